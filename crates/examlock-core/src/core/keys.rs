// examlock-core/src/core/keys.rs
// ============================================================================
// Module: ExamLock Settings Key Namespace
// Description: Well-known text keys of the exam kiosk settings document.
// Purpose: Provide the canonical key constants shared by schema and passes.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The settings document uses a flat namespace of well-known camel-case keys
//! grouped by concern. Key spellings are load-bearing: they must match saved
//! configuration files from every shipped product version, so they are never
//! renamed. The per-item sub-schema keys for the four nested collections and
//! the proxy record live here as well.

// ============================================================================
// SECTION: General
// ============================================================================

/// Exam start page URL.
pub const START_URL: &str = "startURL";
/// Kiosk operating mode selector.
pub const SEB_MODE: &str = "sebMode";
/// Purpose of this configuration file (exam vs. client setup).
pub const SEB_CONFIG_PURPOSE: &str = "sebConfigPurpose";
/// Administrator password hash.
pub const HASHED_ADMIN_PASSWORD: &str = "hashedAdminPassword";
/// Whether users may quit the kiosk at all.
pub const ALLOW_QUIT: &str = "allowQuit";
/// Whether the exit key sequence is ignored.
pub const IGNORE_EXIT_KEYS: &str = "ignoreExitKeys";
/// Quit password hash.
pub const HASHED_QUIT_PASSWORD: &str = "hashedQuitPassword";
/// First key of the exit key sequence.
pub const EXIT_KEY_1: &str = "exitKey1";
/// Second key of the exit key sequence.
pub const EXIT_KEY_2: &str = "exitKey2";
/// Third key of the exit key sequence.
pub const EXIT_KEY_3: &str = "exitKey3";
/// Kiosk helper service enforcement policy.
pub const SEB_SERVICE_POLICY: &str = "sebServicePolicy";
/// Whether running inside a virtual machine is tolerated.
pub const ALLOW_VIRTUAL_MACHINE: &str = "allowVirtualMachine";
/// Whether screen sharing software is tolerated.
pub const ALLOW_SCREEN_SHARING: &str = "allowScreenSharing";
/// Whether the clipboard is isolated to the kiosk session.
pub const ENABLE_PRIVATE_CLIPBOARD: &str = "enablePrivateClipboard";
/// Whether the kiosk runs on a separate desktop.
pub const CREATE_NEW_DESKTOP: &str = "createNewDesktop";
/// Whether the OS shell is terminated for the exam session.
pub const KILL_EXPLORER_SHELL: &str = "killExplorerShell";
/// Whether diagnostic logging is written.
pub const ENABLE_LOGGING: &str = "enableLogging";
/// Log directory on Windows.
pub const LOG_DIRECTORY_WIN: &str = "logDirectoryWin";
/// Log directory on macOS.
pub const LOG_DIRECTORY_OSX: &str = "logDirectoryOSX";
/// Whether the in-session application log is available.
pub const ALLOW_APPLICATION_LOG: &str = "allowApplicationLog";
/// Whether the application log toolbar button is shown.
pub const SHOW_APPLICATION_LOG_BUTTON: &str = "showApplicationLogButton";
/// Version string of the editor that wrote the file.
pub const ORIGINATOR_VERSION: &str = "originatorVersion";

// ============================================================================
// SECTION: User Interface
// ============================================================================

/// Browser window display mode (window vs. fullscreen).
pub const BROWSER_VIEW_MODE: &str = "browserViewMode";
/// Main window width as pixels or percent string.
pub const MAIN_BROWSER_WINDOW_WIDTH: &str = "mainBrowserWindowWidth";
/// Main window height as pixels or percent string.
pub const MAIN_BROWSER_WINDOW_HEIGHT: &str = "mainBrowserWindowHeight";
/// Main window horizontal positioning selector.
pub const MAIN_BROWSER_WINDOW_POSITIONING: &str = "mainBrowserWindowPositioning";
/// Whether the browser toolbar is enabled.
pub const ENABLE_BROWSER_WINDOW_TOOLBAR: &str = "enableBrowserWindowToolbar";
/// Whether the toolbar starts hidden.
pub const HIDE_BROWSER_WINDOW_TOOLBAR: &str = "hideBrowserWindowToolbar";
/// Whether the menu bar is shown.
pub const SHOW_MENU_BAR: &str = "showMenuBar";
/// Whether the task bar is shown.
pub const SHOW_TASK_BAR: &str = "showTaskBar";
/// Task bar height in pixels.
pub const TASK_BAR_HEIGHT: &str = "taskBarHeight";
/// Whether the touch-optimized interface is active.
pub const TOUCH_OPTIMIZED: &str = "touchOptimized";
/// Whether text zoom is offered.
pub const ENABLE_ZOOM_TEXT: &str = "enableZoomText";
/// Whether page zoom is offered.
pub const ENABLE_ZOOM_PAGE: &str = "enableZoomPage";
/// Zoom mode selector.
pub const ZOOM_MODE: &str = "zoomMode";
/// Whether spell checking is offered.
pub const ALLOW_SPELL_CHECK: &str = "allowSpellCheck";
/// Whether the clock is shown in the task bar.
pub const SHOW_TIME: &str = "showTime";
/// Whether the input language indicator is shown.
pub const SHOW_INPUT_LANGUAGE: &str = "showInputLanguage";
/// Whether the reload button is shown.
pub const SHOW_RELOAD_BUTTON: &str = "showReloadButton";
/// Whether reloading the exam page asks for confirmation.
pub const SHOW_RELOAD_WARNING: &str = "showReloadWarning";
/// Whether reloading additional windows asks for confirmation.
pub const NEW_BROWSER_WINDOW_SHOW_RELOAD_WARNING: &str = "newBrowserWindowShowReloadWarning";
/// Whether the audio control is shown.
pub const AUDIO_CONTROL_ENABLED: &str = "audioControlEnabled";
/// Whether audio starts muted.
pub const AUDIO_MUTE: &str = "audioMute";
/// Whether an initial volume level is applied.
pub const AUDIO_SET_VOLUME_LEVEL: &str = "audioSetVolumeLevel";
/// Initial volume level percentage.
pub const AUDIO_VOLUME_LEVEL: &str = "audioVolumeLevel";

// ============================================================================
// SECTION: Browser
// ============================================================================

/// Policy for windows opened by links.
pub const NEW_BROWSER_WINDOW_BY_LINK_POLICY: &str = "newBrowserWindowByLinkPolicy";
/// Policy for windows opened by scripts.
pub const NEW_BROWSER_WINDOW_BY_SCRIPT_POLICY: &str = "newBrowserWindowByScriptPolicy";
/// Whether foreign-host link targets are blocked.
pub const NEW_BROWSER_WINDOW_BY_LINK_BLOCK_FOREIGN: &str = "newBrowserWindowByLinkBlockForeign";
/// Whether foreign-host script targets are blocked.
pub const NEW_BROWSER_WINDOW_BY_SCRIPT_BLOCK_FOREIGN: &str =
    "newBrowserWindowByScriptBlockForeign";
/// Width of link-opened windows as pixels or percent string.
pub const NEW_BROWSER_WINDOW_BY_LINK_WIDTH: &str = "newBrowserWindowByLinkWidth";
/// Height of link-opened windows as pixels or percent string.
pub const NEW_BROWSER_WINDOW_BY_LINK_HEIGHT: &str = "newBrowserWindowByLinkHeight";
/// Positioning selector for link-opened windows.
pub const NEW_BROWSER_WINDOW_BY_LINK_POSITIONING: &str = "newBrowserWindowByLinkPositioning";
/// Whether navigation is allowed in additional windows.
pub const NEW_BROWSER_WINDOW_NAVIGATION: &str = "newBrowserWindowNavigation";
/// Whether the main window allows reload.
pub const BROWSER_WINDOW_ALLOW_RELOAD: &str = "browserWindowAllowReload";
/// Whether additional windows allow reload.
pub const NEW_BROWSER_WINDOW_ALLOW_RELOAD: &str = "newBrowserWindowAllowReload";
/// Whether browser plug-ins are enabled.
pub const ENABLE_PLUG_INS: &str = "enablePlugIns";
/// Whether Java applets are enabled.
pub const ENABLE_JAVA: &str = "enableJava";
/// Whether JavaScript is enabled.
pub const ENABLE_JAVA_SCRIPT: &str = "enableJavaScript";
/// Whether pop-up windows are blocked.
pub const BLOCK_POP_UP_WINDOWS: &str = "blockPopUpWindows";
/// Whether pages may capture video.
pub const ALLOW_VIDEO_CAPTURE: &str = "allowVideoCapture";
/// Whether pages may capture audio.
pub const ALLOW_AUDIO_CAPTURE: &str = "allowAudioCapture";
/// Whether back/forward navigation is allowed.
pub const ALLOW_BROWSING_BACK_FORWARD: &str = "allowBrowsingBackForward";
/// Whether the browser profile is removed on exit.
pub const REMOVE_BROWSER_PROFILE: &str = "removeBrowserProfile";
/// Whether DOM local storage is disabled.
pub const DISABLE_LOCAL_STORAGE: &str = "disableLocalStorage";
/// Whether the embedded kiosk browser is used.
pub const ENABLE_SEB_BROWSER: &str = "enableSebBrowser";
/// Suffix appended to browser window titles.
pub const BROWSER_WINDOW_TITLE_SUFFIX: &str = "browserWindowTitleSuffix";
/// Desktop-mode user agent selector for Windows.
pub const BROWSER_USER_AGENT_WIN_DESKTOP_MODE: &str = "browserUserAgentWinDesktopMode";
/// Custom desktop-mode user agent string for Windows.
pub const BROWSER_USER_AGENT_WIN_DESKTOP_MODE_CUSTOM: &str =
    "browserUserAgentWinDesktopModeCustom";
/// Touch-mode user agent selector for Windows.
pub const BROWSER_USER_AGENT_WIN_TOUCH_MODE: &str = "browserUserAgentWinTouchMode";
/// Custom touch-mode user agent string for Windows.
pub const BROWSER_USER_AGENT_WIN_TOUCH_MODE_CUSTOM: &str = "browserUserAgentWinTouchModeCustom";
/// Global user agent override.
pub const BROWSER_USER_AGENT: &str = "browserUserAgent";
/// User agent selector for macOS.
pub const BROWSER_USER_AGENT_MAC: &str = "browserUserAgentMac";
/// Custom user agent string for macOS.
pub const BROWSER_USER_AGENT_MAC_CUSTOM: &str = "browserUserAgentMacCustom";

// ============================================================================
// SECTION: Downloads and Uploads
// ============================================================================

/// Whether downloading and uploading files is allowed.
pub const ALLOW_DOWN_UPLOADS: &str = "allowDownUploads";
/// Download directory on Windows.
pub const DOWNLOAD_DIRECTORY_WIN: &str = "downloadDirectoryWin";
/// Download directory on macOS.
pub const DOWNLOAD_DIRECTORY_OSX: &str = "downloadDirectoryOSX";
/// Whether downloads open automatically.
pub const OPEN_DOWNLOADS: &str = "openDownloads";
/// Policy for choosing files to upload.
pub const CHOOSE_FILE_TO_UPLOAD_POLICY: &str = "chooseFileToUploadPolicy";
/// Whether PDF files are downloaded instead of displayed.
pub const DOWNLOAD_PDF_FILES: &str = "downloadPDFFiles";
/// Whether the PDF plug-in is allowed.
pub const ALLOW_PDF_PLUG_IN: &str = "allowPDFPlugIn";
/// Whether downloaded kiosk configurations are opened.
pub const DOWNLOAD_AND_OPEN_SEB_CONFIG: &str = "downloadAndOpenSebConfig";
/// Whether configuration downloads reconfigure silently.
pub const BACKGROUND_OPEN_SEB_CONFIG: &str = "backgroundOpenSEBConfig";

// ============================================================================
// SECTION: Exam
// ============================================================================

/// Salt for the configuration key, stored as raw bytes.
pub const EXAM_KEY_SALT: &str = "examKeySalt";
/// Expected browser exam key hash.
pub const BROWSER_EXAM_KEY: &str = "browserExamKey";
/// Whether request URLs are salted into the exam key.
pub const BROWSER_URL_SALT: &str = "browserURLSalt";
/// Whether the exam key is sent in request headers.
pub const SEND_BROWSER_EXAM_KEY: &str = "sendBrowserExamKey";
/// URL that quits the session when visited.
pub const QUIT_URL: &str = "quitURL";
/// Whether visiting the quit URL asks for confirmation.
pub const QUIT_URL_CONFIRM: &str = "quitURLConfirm";
/// URL of the restart-exam action.
pub const RESTART_EXAM_URL: &str = "restartExamURL";
/// Whether restart uses the start URL.
pub const RESTART_EXAM_USE_START_URL: &str = "restartExamUseStartURL";
/// Label for the restart-exam action.
pub const RESTART_EXAM_TEXT: &str = "restartExamText";
/// Whether the restart action is password protected.
pub const RESTART_EXAM_PASSWORD_PROTECTED: &str = "restartExamPasswordProtected";

// ============================================================================
// SECTION: Applications
// ============================================================================

/// Whether third-party processes are monitored.
pub const MONITOR_PROCESSES: &str = "monitorProcesses";
/// Permitted process records.
pub const PERMITTED_PROCESSES: &str = "permittedProcesses";
/// Prohibited process records.
pub const PROHIBITED_PROCESSES: &str = "prohibitedProcesses";
/// Whether switching to permitted applications is allowed.
pub const ALLOW_SWITCH_TO_APPLICATIONS: &str = "allowSwitchToApplications";
/// Whether Flash is allowed to go fullscreen.
pub const ALLOW_FLASH_FULLSCREEN: &str = "allowFlashFullscreen";

// ============================================================================
// SECTION: Network
// ============================================================================

/// Whether the URL filter is active.
pub const URL_FILTER_ENABLE: &str = "URLFilterEnable";
/// Whether the URL filter also filters embedded content.
pub const URL_FILTER_ENABLE_CONTENT_FILTER: &str = "URLFilterEnableContentFilter";
/// URL filter rule records.
pub const URL_FILTER_RULES: &str = "URLFilterRules";
/// Embedded certificate records.
pub const EMBEDDED_CERTIFICATES: &str = "embeddedCertificates";
/// Whether embedded server certificates are pinned.
pub const PIN_EMBEDDED_CERTIFICATES: &str = "pinEmbeddedCertificates";
/// Proxy settings policy (system vs. kiosk settings).
pub const PROXY_SETTINGS_POLICY: &str = "proxySettingsPolicy";
/// Proxy configuration record.
pub const PROXIES: &str = "proxies";

// ============================================================================
// SECTION: Security
// ============================================================================

/// Whether Wi-Fi control is available in the task bar.
pub const ALLOW_WLAN: &str = "allowWlan";
/// Whether display mirroring is tolerated.
pub const ALLOW_DISPLAY_MIRRORING: &str = "allowDisplayMirroring";
/// Maximum number of connected displays.
pub const ALLOWED_DISPLAYS_MAX_NUMBER: &str = "allowedDisplaysMaxNumber";
/// Whether the built-in display must be used.
pub const ALLOWED_DISPLAY_BUILTIN: &str = "allowedDisplayBuiltin";
/// Whether a stopped kiosk process is detected and reported.
pub const DETECT_STOPPED_PROCESS: &str = "detectStoppedProcess";
/// Whether the security screen's user switching entry stays enabled.
pub const INSIDE_SEB_ENABLE_SWITCH_USER: &str = "insideSebEnableSwitchUser";
/// Whether the security screen's lock entry stays enabled.
pub const INSIDE_SEB_ENABLE_LOCK_THIS_COMPUTER: &str = "insideSebEnableLockThisComputer";
/// Whether the security screen's change-password entry stays enabled.
pub const INSIDE_SEB_ENABLE_CHANGE_A_PASSWORD: &str = "insideSebEnableChangeAPassword";
/// Whether the security screen's task manager entry stays enabled.
pub const INSIDE_SEB_ENABLE_START_TASK_MANAGER: &str = "insideSebEnableStartTaskManager";
/// Whether the security screen's log-off entry stays enabled.
pub const INSIDE_SEB_ENABLE_LOG_OFF: &str = "insideSebEnableLogOff";
/// Whether the security screen's shutdown entry stays enabled.
pub const INSIDE_SEB_ENABLE_SHUT_DOWN: &str = "insideSebEnableShutDown";
/// Whether the ease-of-access tools stay enabled.
pub const INSIDE_SEB_ENABLE_EASE_OF_ACCESS: &str = "insideSebEnableEaseOfAccess";
/// Whether the VMware client shade stays enabled.
pub const INSIDE_SEB_ENABLE_VM_WARE_CLIENT_SHADE: &str = "insideSebEnableVmWareClientShade";
/// Whether the network connection selector stays enabled.
pub const INSIDE_SEB_ENABLE_NETWORK_CONNECTION_SELECTOR: &str =
    "insideSebEnableNetworkConnectionSelector";

// ============================================================================
// SECTION: Hooked Keys
// ============================================================================

/// Whether keyboard hooks are installed at all.
pub const HOOK_KEYS: &str = "hookKeys";
/// Whether Esc is passed through.
pub const ENABLE_ESC: &str = "enableEsc";
/// Whether Ctrl-Esc is passed through.
pub const ENABLE_CTRL_ESC: &str = "enableCtrlEsc";
/// Whether Alt-Esc is passed through.
pub const ENABLE_ALT_ESC: &str = "enableAltEsc";
/// Whether Alt-Tab is passed through.
pub const ENABLE_ALT_TAB: &str = "enableAltTab";
/// Whether Alt-F4 is passed through.
pub const ENABLE_ALT_F4: &str = "enableAltF4";
/// Whether the start menu key is passed through.
pub const ENABLE_START_MENU: &str = "enableStartMenu";
/// Whether the right mouse button is passed through.
pub const ENABLE_RIGHT_MOUSE: &str = "enableRightMouse";
/// Whether Print Screen is passed through.
pub const ENABLE_PRINT_SCREEN: &str = "enablePrintScreen";
/// Whether Alt plus mouse wheel is passed through.
pub const ENABLE_ALT_MOUSE_WHEEL: &str = "enableAltMouseWheel";
/// Whether F1 is passed through.
pub const ENABLE_F1: &str = "enableF1";
/// Whether F2 is passed through.
pub const ENABLE_F2: &str = "enableF2";
/// Whether F3 is passed through.
pub const ENABLE_F3: &str = "enableF3";
/// Whether F4 is passed through.
pub const ENABLE_F4: &str = "enableF4";
/// Whether F5 is passed through.
pub const ENABLE_F5: &str = "enableF5";
/// Whether F6 is passed through.
pub const ENABLE_F6: &str = "enableF6";
/// Whether F7 is passed through.
pub const ENABLE_F7: &str = "enableF7";
/// Whether F8 is passed through.
pub const ENABLE_F8: &str = "enableF8";
/// Whether F9 is passed through.
pub const ENABLE_F9: &str = "enableF9";
/// Whether F10 is passed through.
pub const ENABLE_F10: &str = "enableF10";
/// Whether F11 is passed through.
pub const ENABLE_F11: &str = "enableF11";
/// Whether F12 is passed through.
pub const ENABLE_F12: &str = "enableF12";
/// Whether touch exit gestures are recognized.
pub const ENABLE_TOUCH_EXIT: &str = "enableTouchExit";

// ============================================================================
// SECTION: Permitted Process Items
// ============================================================================

/// Whether the permitted process entry is active.
pub const PROCESS_ACTIVE: &str = "active";
/// Whether the process starts with the session.
pub const PROCESS_AUTOSTART: &str = "autostart";
/// Whether the process shows an icon in the task bar.
pub const PROCESS_ICON_IN_TASKBAR: &str = "iconInTaskbar";
/// Whether the process runs hidden in the background.
pub const PROCESS_RUN_IN_BACKGROUND: &str = "runInBackground";
/// Whether the user may locate the application manually.
pub const PROCESS_ALLOW_USER_TO_CHOOSE_APP: &str = "allowUserToChooseApp";
/// Whether the process is killed without prompting.
pub const PROCESS_STRONG_KILL: &str = "strongKill";
/// Operating system tag of the entry.
pub const PROCESS_OS: &str = "os";
/// Display title of the application.
pub const PROCESS_TITLE: &str = "title";
/// Free-text description of the entry.
pub const PROCESS_DESCRIPTION: &str = "description";
/// Executable file name.
pub const PROCESS_EXECUTABLE: &str = "executable";
/// Original file name recorded in the executable's metadata.
pub const PROCESS_ORIGINAL_NAME: &str = "originalName";
/// Additional window-handling process name.
pub const PROCESS_WINDOW_HANDLING_PROCESS: &str = "windowHandlingProcess";
/// Executable path relative to the application folder.
pub const PROCESS_PATH: &str = "path";
/// Process identifier used on macOS.
pub const PROCESS_IDENTIFIER: &str = "identifier";
/// Argument records passed at launch.
pub const PROCESS_ARGUMENTS: &str = "arguments";
/// User account the prohibited process is matched against.
pub const PROCESS_USER: &str = "user";
/// Whether a prohibited process is matched for the current user only.
pub const PROCESS_CURRENT_USER: &str = "currentUser";

// ============================================================================
// SECTION: Permitted Argument Items
// ============================================================================

/// Whether the argument entry is active.
pub const ARGUMENT_ACTIVE: &str = "active";
/// Argument string passed to the process.
pub const ARGUMENT_ARGUMENT: &str = "argument";

// ============================================================================
// SECTION: Embedded Certificate Items
// ============================================================================

/// Certificate payload bytes.
pub const CERTIFICATE_DATA: &str = "certificateData";
/// Certificate type selector.
pub const CERTIFICATE_TYPE: &str = "type";
/// Certificate display name.
pub const CERTIFICATE_NAME: &str = "name";

// ============================================================================
// SECTION: Proxy Record
// ============================================================================

/// Bypassed host patterns.
pub const PROXY_EXCEPTIONS_LIST: &str = "exceptionsList";
/// Whether simple hostnames bypass the proxy.
pub const PROXY_EXCLUDE_SIMPLE_HOSTNAMES: &str = "excludeSimpleHostnames";
/// Whether proxy auto-discovery is enabled.
pub const PROXY_AUTO_DISCOVERY_ENABLED: &str = "autoDiscoveryEnabled";
/// Whether a PAC configuration is enabled.
pub const PROXY_AUTO_CONFIGURATION_ENABLED: &str = "autoConfigurationEnabled";
/// PAC file URL.
pub const PROXY_AUTO_CONFIGURATION_URL: &str = "autoConfigurationURL";
/// Inline PAC JavaScript.
pub const PROXY_AUTO_CONFIGURATION_JAVASCRIPT: &str = "autoConfigurationJavaScript";
/// Whether passive FTP mode is used.
pub const PROXY_FTP_PASSIVE: &str = "ftpPassive";
/// Whether the HTTP proxy is enabled.
pub const PROXY_HTTP_ENABLE: &str = "HTTPEnable";
/// HTTP proxy port.
pub const PROXY_HTTP_PORT: &str = "HTTPPort";
/// HTTP proxy host.
pub const PROXY_HTTP_PROXY: &str = "HTTPProxy";
/// Whether the HTTP proxy requires a password.
pub const PROXY_HTTP_REQUIRES_PASSWORD: &str = "HTTPRequiresPassword";
/// HTTP proxy user name.
pub const PROXY_HTTP_USERNAME: &str = "HTTPUsername";
/// HTTP proxy password.
pub const PROXY_HTTP_PASSWORD: &str = "HTTPPassword";
/// Whether the HTTPS proxy is enabled.
pub const PROXY_HTTPS_ENABLE: &str = "HTTPSEnable";
/// HTTPS proxy port.
pub const PROXY_HTTPS_PORT: &str = "HTTPSPort";
/// HTTPS proxy host.
pub const PROXY_HTTPS_PROXY: &str = "HTTPSProxy";
/// Whether the HTTPS proxy requires a password.
pub const PROXY_HTTPS_REQUIRES_PASSWORD: &str = "HTTPSRequiresPassword";
/// HTTPS proxy user name.
pub const PROXY_HTTPS_USERNAME: &str = "HTTPSUsername";
/// HTTPS proxy password.
pub const PROXY_HTTPS_PASSWORD: &str = "HTTPSPassword";
/// Whether the FTP proxy is enabled.
pub const PROXY_FTP_ENABLE: &str = "FTPEnable";
/// FTP proxy port.
pub const PROXY_FTP_PORT: &str = "FTPPort";
/// FTP proxy host.
pub const PROXY_FTP_PROXY: &str = "FTPProxy";
/// Whether the FTP proxy requires a password.
pub const PROXY_FTP_REQUIRES_PASSWORD: &str = "FTPRequiresPassword";
/// FTP proxy user name.
pub const PROXY_FTP_USERNAME: &str = "FTPUsername";
/// FTP proxy password.
pub const PROXY_FTP_PASSWORD: &str = "FTPPassword";
/// Whether the SOCKS proxy is enabled.
pub const PROXY_SOCKS_ENABLE: &str = "SOCKSEnable";
/// SOCKS proxy port.
pub const PROXY_SOCKS_PORT: &str = "SOCKSPort";
/// SOCKS proxy host.
pub const PROXY_SOCKS_PROXY: &str = "SOCKSProxy";
/// Whether the SOCKS proxy requires a password.
pub const PROXY_SOCKS_REQUIRES_PASSWORD: &str = "SOCKSRequiresPassword";
/// SOCKS proxy user name.
pub const PROXY_SOCKS_USERNAME: &str = "SOCKSUsername";
/// SOCKS proxy password.
pub const PROXY_SOCKS_PASSWORD: &str = "SOCKSPassword";
/// Whether the RTSP proxy is enabled.
pub const PROXY_RTSP_ENABLE: &str = "RTSPEnable";
/// RTSP proxy port.
pub const PROXY_RTSP_PORT: &str = "RTSPPort";
/// RTSP proxy host.
pub const PROXY_RTSP_PROXY: &str = "RTSPProxy";
/// Whether the RTSP proxy requires a password.
pub const PROXY_RTSP_REQUIRES_PASSWORD: &str = "RTSPRequiresPassword";
/// RTSP proxy user name.
pub const PROXY_RTSP_USERNAME: &str = "RTSPUsername";
/// RTSP proxy password.
pub const PROXY_RTSP_PASSWORD: &str = "RTSPPassword";
