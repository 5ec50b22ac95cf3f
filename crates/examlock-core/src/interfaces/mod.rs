// examlock-core/src/interfaces/mod.rs
// ============================================================================
// Module: ExamLock Interfaces
// Description: Collaborator contracts for configuration protection.
// Purpose: Define the cipher surface used by the persistence facade.
// Dependencies: crate::core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The engine never inspects the on-disk binary layout of a configuration
//! file: an external protection collaborator turns the opaque encrypted blob
//! into a settings document and back. [`ConfigCipher`] is that boundary.
//! Implementations may prompt for credentials when a file is opened for
//! editing; an absent document after a successful decrypt means "use
//! defaults", not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::value::Document;

// ============================================================================
// SECTION: Certificate Handle
// ============================================================================

/// Opaque reference into the platform certificate store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateHandle(String);

impl CertificateHandle {
    /// Creates a new certificate handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Returns the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertificateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Cipher Contract
// ============================================================================

/// Result of a successful decrypt call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptOutcome {
    /// Decrypted settings document; absent means "use defaults".
    pub document: Option<Document>,
    /// Password recovered or entered during decryption.
    pub password: Option<String>,
    /// Whether the recovered password is already hashed.
    pub password_is_hash: bool,
    /// Certificate used for decryption, when any.
    pub certificate: Option<CertificateHandle>,
}

/// Credentials supplied to the encrypt call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Password protecting the file, when any.
    pub password: Option<String>,
    /// Whether the password is already hashed.
    pub password_is_hash: bool,
    /// Certificate protecting the file, when any.
    pub certificate: Option<CertificateHandle>,
    /// Whether only asymmetric encryption is used.
    pub asymmetric_only: bool,
}

/// Purpose recorded in an encrypted configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptPurpose {
    /// The file starts an exam session.
    StartingExam,
    /// The file reconfigures a client installation.
    ConfiguringClient,
}

/// Cipher collaborator errors. Opaque to the engine; never retried.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Decryption failed.
    #[error("config decrypt error: {0}")]
    Decrypt(String),
    /// Encryption failed.
    #[error("config encrypt error: {0}")]
    Encrypt(String),
}

/// External protection collaborator for configuration files.
pub trait ConfigCipher {
    /// Decrypts raw file bytes into a settings document.
    ///
    /// `for_editing` is true when the file is loaded into an editor; the
    /// implementation may prompt for credentials in that case.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Decrypt`] when the blob cannot be decrypted.
    fn decrypt(&self, bytes: &[u8], for_editing: bool) -> Result<DecryptOutcome, CipherError>;

    /// Encrypts a settings document into raw file bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::Encrypt`] when the document cannot be encrypted.
    fn encrypt(
        &self,
        document: &Document,
        credentials: &Credentials,
        purpose: EncryptPurpose,
        for_editing: bool,
    ) -> Result<Vec<u8>, CipherError>;
}

// ============================================================================
// SECTION: Plain Cipher
// ============================================================================

/// Pass-through cipher storing documents as plain JSON.
///
/// Used by tests and local tooling; real deployments substitute the platform
/// protection collaborator.
#[derive(Debug, Default, Clone)]
pub struct PlainCipher;

impl PlainCipher {
    /// Creates a new plain cipher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigCipher for PlainCipher {
    fn decrypt(&self, bytes: &[u8], _for_editing: bool) -> Result<DecryptOutcome, CipherError> {
        if bytes.is_empty() {
            return Ok(DecryptOutcome {
                document: None,
                password: None,
                password_is_hash: false,
                certificate: None,
            });
        }
        let document: Document =
            serde_json::from_slice(bytes).map_err(|err| CipherError::Decrypt(err.to_string()))?;
        Ok(DecryptOutcome {
            document: Some(document),
            password: None,
            password_is_hash: false,
            certificate: None,
        })
    }

    fn encrypt(
        &self,
        document: &Document,
        _credentials: &Credentials,
        _purpose: EncryptPurpose,
        _for_editing: bool,
    ) -> Result<Vec<u8>, CipherError> {
        serde_json::to_vec(document).map_err(|err| CipherError::Encrypt(err.to_string()))
    }
}
