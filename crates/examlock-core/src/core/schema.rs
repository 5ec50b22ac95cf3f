// examlock-core/src/core/schema.rs
// ============================================================================
// Module: ExamLock Canonical Schema
// Description: Authoritative default settings document and per-item schemas.
// Purpose: Define every expected key, its default value, and its variant kind.
// Dependencies: crate::core::{keys, value}
// ============================================================================

//! ## Overview
//! The canonical schema is the reference document for reconciliation: its
//! shape and the variant kind of each default define what is "correct" at the
//! corresponding document position. Construction is pure data assembly and
//! cannot fail. Callers build the schema once per session and treat it as
//! read-only afterwards.
//!
//! Saved files from older product versions routinely miss keys or carry
//! obsolete types; the defaults here are the compatibility contract with
//! every version that ever wrote a configuration file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::keys;
use crate::core::value::Document;
use crate::core::value::Record;
use crate::core::value::Value;

// ============================================================================
// SECTION: Platform Tags
// ============================================================================

/// On-disk operating system tag for macOS entries.
pub const OS_MACOS: i64 = 0;
/// On-disk operating system tag for Windows entries.
pub const OS_WINDOWS: i64 = 1;

// ============================================================================
// SECTION: Default Prohibited Process Lists
// ============================================================================

/// Remote-control and screen-sharing executables prohibited in every session.
pub const STRICT_PROHIBITED: &[&str] = &[
    "AeroAdmin.exe",
    "AnyDesk.exe",
    "beamyourscreen-host.exe",
    "chromoting.exe",
    "CiscoWebExStart.exe",
    "join.me.exe",
    "Mikogo-host.exe",
    "RemotePCDesktop.exe",
    "ScreenConnect.Client.exe",
    "Skype.exe",
    "TeamViewer.exe",
    "vncserver.exe",
    "vncviewer.exe",
];

/// Common browsers prohibited only when the OS shell is killed for the exam.
pub const SHELL_KILL_PROHIBITED: &[&str] = &[
    "brave.exe",
    "chrome.exe",
    "firefox.exe",
    "iexplore.exe",
    "msedge.exe",
    "opera.exe",
    "seamonkey.exe",
    "vivaldi.exe",
];

/// Replacement value for empty bypass-host entries in the proxy record.
pub const DEFAULT_BYPASS_HOST: &str = "*.local";

// ============================================================================
// SECTION: Canonical Schema
// ============================================================================

/// Authoritative default document plus the four per-item default records.
///
/// Built once per session; read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSchema {
    /// Full default top-level document.
    pub defaults: Document,
    /// Per-item default for permitted process records.
    pub permitted_process: Record,
    /// Per-item default for permitted argument records.
    pub permitted_argument: Record,
    /// Per-item default for prohibited process records.
    pub prohibited_process: Record,
    /// Per-item default for embedded certificate records.
    pub embedded_certificate: Record,
    /// Default proxy configuration record.
    pub proxy: Record,
}

impl CanonicalSchema {
    /// Builds the canonical schema. Pure construction; cannot fail.
    #[must_use]
    pub fn new() -> Self {
        let permitted_process = permitted_process_defaults();
        let permitted_argument = permitted_argument_defaults();
        let prohibited_process = prohibited_process_defaults();
        let embedded_certificate = embedded_certificate_defaults();
        let proxy = proxy_defaults();

        let mut defaults = Document::new();
        general_defaults(&mut defaults);
        user_interface_defaults(&mut defaults);
        browser_defaults(&mut defaults);
        down_upload_defaults(&mut defaults);
        exam_defaults(&mut defaults);
        application_defaults(&mut defaults);
        network_defaults(&mut defaults, &proxy);
        security_defaults(&mut defaults);
        hooked_key_defaults(&mut defaults);

        Self {
            defaults,
            permitted_process,
            permitted_argument,
            prohibited_process,
            embedded_certificate,
            proxy,
        }
    }
}

impl Default for CanonicalSchema {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Top-Level Groups
// ============================================================================

/// Inserts general session defaults.
fn general_defaults(doc: &mut Document) {
    doc.insert(keys::START_URL, Value::text("https://www.examlock.org/start"));
    doc.insert(keys::SEB_MODE, Value::Int(0));
    doc.insert(keys::SEB_CONFIG_PURPOSE, Value::Int(0));
    doc.insert(keys::HASHED_ADMIN_PASSWORD, Value::text(""));
    doc.insert(keys::ALLOW_QUIT, Value::Bool(true));
    doc.insert(keys::IGNORE_EXIT_KEYS, Value::Bool(false));
    doc.insert(keys::HASHED_QUIT_PASSWORD, Value::text(""));
    doc.insert(keys::EXIT_KEY_1, Value::Int(2));
    doc.insert(keys::EXIT_KEY_2, Value::Int(10));
    doc.insert(keys::EXIT_KEY_3, Value::Int(5));
    doc.insert(keys::SEB_SERVICE_POLICY, Value::Int(2));
    doc.insert(keys::ALLOW_VIRTUAL_MACHINE, Value::Bool(false));
    doc.insert(keys::ALLOW_SCREEN_SHARING, Value::Bool(false));
    doc.insert(keys::ENABLE_PRIVATE_CLIPBOARD, Value::Bool(true));
    doc.insert(keys::CREATE_NEW_DESKTOP, Value::Bool(true));
    doc.insert(keys::KILL_EXPLORER_SHELL, Value::Bool(false));
    doc.insert(keys::ENABLE_LOGGING, Value::Bool(false));
    doc.insert(keys::LOG_DIRECTORY_WIN, Value::text(""));
    doc.insert(keys::LOG_DIRECTORY_OSX, Value::text("~/Documents"));
    doc.insert(keys::ALLOW_APPLICATION_LOG, Value::Bool(false));
    doc.insert(keys::SHOW_APPLICATION_LOG_BUTTON, Value::Bool(false));
    doc.insert(keys::ORIGINATOR_VERSION, Value::text(""));
}

/// Inserts user interface defaults.
fn user_interface_defaults(doc: &mut Document) {
    doc.insert(keys::BROWSER_VIEW_MODE, Value::Int(0));
    doc.insert(keys::MAIN_BROWSER_WINDOW_WIDTH, Value::text("100%"));
    doc.insert(keys::MAIN_BROWSER_WINDOW_HEIGHT, Value::text("100%"));
    doc.insert(keys::MAIN_BROWSER_WINDOW_POSITIONING, Value::Int(1));
    doc.insert(keys::ENABLE_BROWSER_WINDOW_TOOLBAR, Value::Bool(false));
    doc.insert(keys::HIDE_BROWSER_WINDOW_TOOLBAR, Value::Bool(false));
    doc.insert(keys::SHOW_MENU_BAR, Value::Bool(false));
    doc.insert(keys::SHOW_TASK_BAR, Value::Bool(true));
    doc.insert(keys::TASK_BAR_HEIGHT, Value::Int(40));
    doc.insert(keys::TOUCH_OPTIMIZED, Value::Bool(false));
    doc.insert(keys::ENABLE_ZOOM_TEXT, Value::Bool(true));
    doc.insert(keys::ENABLE_ZOOM_PAGE, Value::Bool(true));
    doc.insert(keys::ZOOM_MODE, Value::Int(0));
    doc.insert(keys::ALLOW_SPELL_CHECK, Value::Bool(false));
    doc.insert(keys::SHOW_TIME, Value::Bool(true));
    doc.insert(keys::SHOW_INPUT_LANGUAGE, Value::Bool(false));
    doc.insert(keys::SHOW_RELOAD_BUTTON, Value::Bool(true));
    doc.insert(keys::SHOW_RELOAD_WARNING, Value::Bool(true));
    doc.insert(keys::NEW_BROWSER_WINDOW_SHOW_RELOAD_WARNING, Value::Bool(false));
    doc.insert(keys::AUDIO_CONTROL_ENABLED, Value::Bool(false));
    doc.insert(keys::AUDIO_MUTE, Value::Bool(false));
    doc.insert(keys::AUDIO_SET_VOLUME_LEVEL, Value::Bool(false));
    doc.insert(keys::AUDIO_VOLUME_LEVEL, Value::Int(25));
}

/// Inserts browser behavior defaults.
fn browser_defaults(doc: &mut Document) {
    doc.insert(keys::NEW_BROWSER_WINDOW_BY_LINK_POLICY, Value::Int(2));
    doc.insert(keys::NEW_BROWSER_WINDOW_BY_SCRIPT_POLICY, Value::Int(2));
    doc.insert(keys::NEW_BROWSER_WINDOW_BY_LINK_BLOCK_FOREIGN, Value::Bool(false));
    doc.insert(keys::NEW_BROWSER_WINDOW_BY_SCRIPT_BLOCK_FOREIGN, Value::Bool(false));
    doc.insert(keys::NEW_BROWSER_WINDOW_BY_LINK_WIDTH, Value::text("1000"));
    doc.insert(keys::NEW_BROWSER_WINDOW_BY_LINK_HEIGHT, Value::text("100%"));
    doc.insert(keys::NEW_BROWSER_WINDOW_BY_LINK_POSITIONING, Value::Int(2));
    doc.insert(keys::NEW_BROWSER_WINDOW_NAVIGATION, Value::Bool(true));
    doc.insert(keys::BROWSER_WINDOW_ALLOW_RELOAD, Value::Bool(true));
    doc.insert(keys::NEW_BROWSER_WINDOW_ALLOW_RELOAD, Value::Bool(true));
    doc.insert(keys::ENABLE_PLUG_INS, Value::Bool(true));
    doc.insert(keys::ENABLE_JAVA, Value::Bool(false));
    doc.insert(keys::ENABLE_JAVA_SCRIPT, Value::Bool(true));
    doc.insert(keys::BLOCK_POP_UP_WINDOWS, Value::Bool(false));
    doc.insert(keys::ALLOW_VIDEO_CAPTURE, Value::Bool(false));
    doc.insert(keys::ALLOW_AUDIO_CAPTURE, Value::Bool(false));
    doc.insert(keys::ALLOW_BROWSING_BACK_FORWARD, Value::Bool(false));
    doc.insert(keys::REMOVE_BROWSER_PROFILE, Value::Bool(false));
    doc.insert(keys::DISABLE_LOCAL_STORAGE, Value::Bool(false));
    doc.insert(keys::ENABLE_SEB_BROWSER, Value::Bool(true));
    doc.insert(keys::BROWSER_WINDOW_TITLE_SUFFIX, Value::text(""));
    doc.insert(keys::BROWSER_USER_AGENT_WIN_DESKTOP_MODE, Value::Int(0));
    doc.insert(keys::BROWSER_USER_AGENT_WIN_DESKTOP_MODE_CUSTOM, Value::text(""));
    doc.insert(keys::BROWSER_USER_AGENT_WIN_TOUCH_MODE, Value::Int(0));
    doc.insert(keys::BROWSER_USER_AGENT_WIN_TOUCH_MODE_CUSTOM, Value::text(""));
    doc.insert(keys::BROWSER_USER_AGENT, Value::text(""));
    doc.insert(keys::BROWSER_USER_AGENT_MAC, Value::Int(0));
    doc.insert(keys::BROWSER_USER_AGENT_MAC_CUSTOM, Value::text(""));
}

/// Inserts download and upload defaults.
fn down_upload_defaults(doc: &mut Document) {
    doc.insert(keys::ALLOW_DOWN_UPLOADS, Value::Bool(false));
    doc.insert(keys::DOWNLOAD_DIRECTORY_WIN, Value::text(""));
    doc.insert(keys::DOWNLOAD_DIRECTORY_OSX, Value::text("~/Downloads"));
    doc.insert(keys::OPEN_DOWNLOADS, Value::Bool(false));
    doc.insert(keys::CHOOSE_FILE_TO_UPLOAD_POLICY, Value::Int(0));
    doc.insert(keys::DOWNLOAD_PDF_FILES, Value::Bool(false));
    doc.insert(keys::ALLOW_PDF_PLUG_IN, Value::Bool(false));
    doc.insert(keys::DOWNLOAD_AND_OPEN_SEB_CONFIG, Value::Bool(true));
    doc.insert(keys::BACKGROUND_OPEN_SEB_CONFIG, Value::Bool(false));
}

/// Inserts exam session defaults.
fn exam_defaults(doc: &mut Document) {
    doc.insert(keys::EXAM_KEY_SALT, Value::Bytes(Vec::new()));
    doc.insert(keys::BROWSER_EXAM_KEY, Value::text(""));
    doc.insert(keys::BROWSER_URL_SALT, Value::Bool(true));
    doc.insert(keys::SEND_BROWSER_EXAM_KEY, Value::Bool(false));
    doc.insert(keys::QUIT_URL, Value::text(""));
    doc.insert(keys::QUIT_URL_CONFIRM, Value::Bool(true));
    doc.insert(keys::RESTART_EXAM_URL, Value::text(""));
    doc.insert(keys::RESTART_EXAM_USE_START_URL, Value::Bool(false));
    doc.insert(keys::RESTART_EXAM_TEXT, Value::text(""));
    doc.insert(keys::RESTART_EXAM_PASSWORD_PROTECTED, Value::Bool(true));
}

/// Inserts application monitoring defaults, including the process collections.
fn application_defaults(doc: &mut Document) {
    doc.insert(keys::MONITOR_PROCESSES, Value::Bool(false));
    doc.insert(keys::PERMITTED_PROCESSES, Value::Seq(Vec::new()));
    doc.insert(keys::PROHIBITED_PROCESSES, Value::Seq(Vec::new()));
    doc.insert(keys::ALLOW_SWITCH_TO_APPLICATIONS, Value::Bool(false));
    doc.insert(keys::ALLOW_FLASH_FULLSCREEN, Value::Bool(false));
}

/// Inserts network defaults, including the certificate collection and proxies.
fn network_defaults(doc: &mut Document, proxy: &Record) {
    doc.insert(keys::URL_FILTER_ENABLE, Value::Bool(false));
    doc.insert(keys::URL_FILTER_ENABLE_CONTENT_FILTER, Value::Bool(false));
    doc.insert(keys::URL_FILTER_RULES, Value::Seq(Vec::new()));
    doc.insert(keys::EMBEDDED_CERTIFICATES, Value::Seq(Vec::new()));
    doc.insert(keys::PIN_EMBEDDED_CERTIFICATES, Value::Bool(false));
    doc.insert(keys::PROXY_SETTINGS_POLICY, Value::Int(0));
    doc.insert(keys::PROXIES, Value::Rec(proxy.clone()));
}

/// Inserts security screen and display defaults.
fn security_defaults(doc: &mut Document) {
    doc.insert(keys::ALLOW_WLAN, Value::Bool(false));
    doc.insert(keys::ALLOW_DISPLAY_MIRRORING, Value::Bool(false));
    doc.insert(keys::ALLOWED_DISPLAYS_MAX_NUMBER, Value::Int(1));
    doc.insert(keys::ALLOWED_DISPLAY_BUILTIN, Value::Bool(true));
    doc.insert(keys::DETECT_STOPPED_PROCESS, Value::Bool(true));
    doc.insert(keys::INSIDE_SEB_ENABLE_SWITCH_USER, Value::Bool(false));
    doc.insert(keys::INSIDE_SEB_ENABLE_LOCK_THIS_COMPUTER, Value::Bool(false));
    doc.insert(keys::INSIDE_SEB_ENABLE_CHANGE_A_PASSWORD, Value::Bool(false));
    doc.insert(keys::INSIDE_SEB_ENABLE_START_TASK_MANAGER, Value::Bool(false));
    doc.insert(keys::INSIDE_SEB_ENABLE_LOG_OFF, Value::Bool(false));
    doc.insert(keys::INSIDE_SEB_ENABLE_SHUT_DOWN, Value::Bool(false));
    doc.insert(keys::INSIDE_SEB_ENABLE_EASE_OF_ACCESS, Value::Bool(false));
    doc.insert(keys::INSIDE_SEB_ENABLE_VM_WARE_CLIENT_SHADE, Value::Bool(false));
    doc.insert(keys::INSIDE_SEB_ENABLE_NETWORK_CONNECTION_SELECTOR, Value::Bool(false));
}

/// Inserts hooked key defaults.
fn hooked_key_defaults(doc: &mut Document) {
    doc.insert(keys::HOOK_KEYS, Value::Bool(true));
    doc.insert(keys::ENABLE_ESC, Value::Bool(false));
    doc.insert(keys::ENABLE_CTRL_ESC, Value::Bool(false));
    doc.insert(keys::ENABLE_ALT_ESC, Value::Bool(false));
    doc.insert(keys::ENABLE_ALT_TAB, Value::Bool(true));
    doc.insert(keys::ENABLE_ALT_F4, Value::Bool(false));
    doc.insert(keys::ENABLE_START_MENU, Value::Bool(false));
    doc.insert(keys::ENABLE_RIGHT_MOUSE, Value::Bool(false));
    doc.insert(keys::ENABLE_PRINT_SCREEN, Value::Bool(false));
    doc.insert(keys::ENABLE_ALT_MOUSE_WHEEL, Value::Bool(false));
    doc.insert(keys::ENABLE_F1, Value::Bool(false));
    doc.insert(keys::ENABLE_F2, Value::Bool(false));
    doc.insert(keys::ENABLE_F3, Value::Bool(false));
    doc.insert(keys::ENABLE_F4, Value::Bool(false));
    doc.insert(keys::ENABLE_F5, Value::Bool(true));
    doc.insert(keys::ENABLE_F6, Value::Bool(false));
    doc.insert(keys::ENABLE_F7, Value::Bool(false));
    doc.insert(keys::ENABLE_F8, Value::Bool(false));
    doc.insert(keys::ENABLE_F9, Value::Bool(false));
    doc.insert(keys::ENABLE_F10, Value::Bool(false));
    doc.insert(keys::ENABLE_F11, Value::Bool(false));
    doc.insert(keys::ENABLE_F12, Value::Bool(false));
    doc.insert(keys::ENABLE_TOUCH_EXIT, Value::Bool(false));
}

// ============================================================================
// SECTION: Per-Item Schemas
// ============================================================================

/// Builds the permitted process per-item default record.
fn permitted_process_defaults() -> Record {
    let mut record = Record::new();
    record.insert(keys::PROCESS_ACTIVE, Value::Bool(true));
    record.insert(keys::PROCESS_AUTOSTART, Value::Bool(false));
    record.insert(keys::PROCESS_ICON_IN_TASKBAR, Value::Bool(true));
    record.insert(keys::PROCESS_RUN_IN_BACKGROUND, Value::Bool(false));
    record.insert(keys::PROCESS_ALLOW_USER_TO_CHOOSE_APP, Value::Bool(false));
    record.insert(keys::PROCESS_STRONG_KILL, Value::Bool(false));
    record.insert(keys::PROCESS_OS, Value::Int(OS_WINDOWS));
    record.insert(keys::PROCESS_TITLE, Value::text(""));
    record.insert(keys::PROCESS_DESCRIPTION, Value::text(""));
    record.insert(keys::PROCESS_EXECUTABLE, Value::text(""));
    record.insert(keys::PROCESS_ORIGINAL_NAME, Value::text(""));
    record.insert(keys::PROCESS_WINDOW_HANDLING_PROCESS, Value::text(""));
    record.insert(keys::PROCESS_PATH, Value::text(""));
    record.insert(keys::PROCESS_IDENTIFIER, Value::text(""));
    record.insert(keys::PROCESS_ARGUMENTS, Value::Seq(Vec::new()));
    record
}

/// Builds the permitted argument per-item default record.
fn permitted_argument_defaults() -> Record {
    let mut record = Record::new();
    record.insert(keys::ARGUMENT_ACTIVE, Value::Bool(true));
    record.insert(keys::ARGUMENT_ARGUMENT, Value::text(""));
    record
}

/// Builds the prohibited process per-item default record.
fn prohibited_process_defaults() -> Record {
    let mut record = Record::new();
    record.insert(keys::PROCESS_ACTIVE, Value::Bool(true));
    record.insert(keys::PROCESS_CURRENT_USER, Value::Bool(true));
    record.insert(keys::PROCESS_STRONG_KILL, Value::Bool(false));
    record.insert(keys::PROCESS_OS, Value::Int(OS_WINDOWS));
    record.insert(keys::PROCESS_EXECUTABLE, Value::text(""));
    record.insert(keys::PROCESS_ORIGINAL_NAME, Value::text(""));
    record.insert(keys::PROCESS_DESCRIPTION, Value::text(""));
    record.insert(keys::PROCESS_IDENTIFIER, Value::text(""));
    record.insert(keys::PROCESS_USER, Value::text(""));
    record
}

/// Builds the embedded certificate per-item default record.
fn embedded_certificate_defaults() -> Record {
    let mut record = Record::new();
    record.insert(keys::CERTIFICATE_DATA, Value::Bytes(Vec::new()));
    record.insert(keys::CERTIFICATE_TYPE, Value::Int(0));
    record.insert(keys::CERTIFICATE_NAME, Value::text(""));
    record
}

/// Builds the default proxy configuration record with one bypass entry.
fn proxy_defaults() -> Record {
    let mut record = Record::new();
    record.insert(
        keys::PROXY_EXCEPTIONS_LIST,
        Value::Seq(vec![Value::text(DEFAULT_BYPASS_HOST)]),
    );
    record.insert(keys::PROXY_EXCLUDE_SIMPLE_HOSTNAMES, Value::Bool(true));
    record.insert(keys::PROXY_AUTO_DISCOVERY_ENABLED, Value::Bool(false));
    record.insert(keys::PROXY_AUTO_CONFIGURATION_ENABLED, Value::Bool(false));
    record.insert(keys::PROXY_AUTO_CONFIGURATION_URL, Value::text(""));
    record.insert(keys::PROXY_AUTO_CONFIGURATION_JAVASCRIPT, Value::text(""));
    record.insert(keys::PROXY_FTP_PASSIVE, Value::Bool(true));
    record.insert(keys::PROXY_HTTP_ENABLE, Value::Bool(false));
    record.insert(keys::PROXY_HTTP_PORT, Value::Int(80));
    record.insert(keys::PROXY_HTTP_PROXY, Value::text(""));
    record.insert(keys::PROXY_HTTP_REQUIRES_PASSWORD, Value::Bool(false));
    record.insert(keys::PROXY_HTTP_USERNAME, Value::text(""));
    record.insert(keys::PROXY_HTTP_PASSWORD, Value::text(""));
    record.insert(keys::PROXY_HTTPS_ENABLE, Value::Bool(false));
    record.insert(keys::PROXY_HTTPS_PORT, Value::Int(443));
    record.insert(keys::PROXY_HTTPS_PROXY, Value::text(""));
    record.insert(keys::PROXY_HTTPS_REQUIRES_PASSWORD, Value::Bool(false));
    record.insert(keys::PROXY_HTTPS_USERNAME, Value::text(""));
    record.insert(keys::PROXY_HTTPS_PASSWORD, Value::text(""));
    record.insert(keys::PROXY_FTP_ENABLE, Value::Bool(false));
    record.insert(keys::PROXY_FTP_PORT, Value::Int(21));
    record.insert(keys::PROXY_FTP_PROXY, Value::text(""));
    record.insert(keys::PROXY_FTP_REQUIRES_PASSWORD, Value::Bool(false));
    record.insert(keys::PROXY_FTP_USERNAME, Value::text(""));
    record.insert(keys::PROXY_FTP_PASSWORD, Value::text(""));
    record.insert(keys::PROXY_SOCKS_ENABLE, Value::Bool(false));
    record.insert(keys::PROXY_SOCKS_PORT, Value::Int(1080));
    record.insert(keys::PROXY_SOCKS_PROXY, Value::text(""));
    record.insert(keys::PROXY_SOCKS_REQUIRES_PASSWORD, Value::Bool(false));
    record.insert(keys::PROXY_SOCKS_USERNAME, Value::text(""));
    record.insert(keys::PROXY_SOCKS_PASSWORD, Value::text(""));
    record.insert(keys::PROXY_RTSP_ENABLE, Value::Bool(false));
    record.insert(keys::PROXY_RTSP_PORT, Value::Int(554));
    record.insert(keys::PROXY_RTSP_PROXY, Value::text(""));
    record.insert(keys::PROXY_RTSP_REQUIRES_PASSWORD, Value::Bool(false));
    record.insert(keys::PROXY_RTSP_USERNAME, Value::text(""));
    record.insert(keys::PROXY_RTSP_PASSWORD, Value::text(""));
    record
}
