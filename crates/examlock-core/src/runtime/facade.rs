// examlock-core/src/runtime/facade.rs
// ============================================================================
// Module: ExamLock Persistence Facade
// Description: Sequences decrypt, reconcile, inject, minimize, and encrypt.
// Purpose: Drive the passes around the external protection collaborator.
// Dependencies: crate::core, crate::interfaces, crate::runtime
// ============================================================================

//! ## Overview
//! The facade is thin glue: it hands raw bytes to the cipher collaborator,
//! runs the reconciliation pass and default-record injection on whatever
//! comes back, and reconciles then optionally minimizes before encryption.
//! File helpers read and write the opaque encrypted blob with a fail-closed
//! size limit. No cryptography or binary layout knowledge lives here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::hashing::ConfigKey;
use crate::core::hashing::HashError;
use crate::core::hashing::config_key;
use crate::core::schema::CanonicalSchema;
use crate::core::value::Document;
use crate::interfaces::CertificateHandle;
use crate::interfaces::CipherError;
use crate::interfaces::ConfigCipher;
use crate::interfaces::Credentials;
use crate::interfaces::EncryptPurpose;
use crate::runtime::injector::inject_defaults;
use crate::runtime::minimizer::MinimizeSource;
use crate::runtime::minimizer::minimize;
use crate::runtime::reconciler::SchemaViolation;
use crate::runtime::reconciler::reconcile;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: u64 = 16 * 1024 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Persistence facade errors. Surfaced to the caller; never retried.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Cipher collaborator reported an error.
    #[error(transparent)]
    Cipher(#[from] CipherError),
    /// Configuration file read or write failed.
    #[error("config file io error: {0}")]
    Io(String),
}

// ============================================================================
// SECTION: Loaded Configuration
// ============================================================================

/// Result of loading a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    /// Reconciled and injected settings document.
    pub document: Document,
    /// Password recovered during decryption, when any.
    pub password: Option<String>,
    /// Whether the recovered password is already hashed.
    pub password_is_hash: bool,
    /// Certificate used for decryption, when any.
    pub certificate: Option<CertificateHandle>,
    /// Structural violations masked during reconciliation.
    pub violations: Vec<SchemaViolation>,
}

impl LoadedConfig {
    /// Computes the config key for the loaded document.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when canonicalization fails.
    pub fn config_key(&self) -> Result<ConfigKey, HashError> {
        config_key(&self.document)
    }
}

// ============================================================================
// SECTION: Persistence Facade
// ============================================================================

/// Drives load and save around a cipher collaborator.
#[derive(Debug, Clone)]
pub struct ConfigPersistence<C> {
    /// Protection collaborator for the on-disk blob.
    cipher: C,
}

impl<C: ConfigCipher> ConfigPersistence<C> {
    /// Creates a facade over a cipher collaborator.
    pub const fn new(cipher: C) -> Self {
        Self {
            cipher,
        }
    }

    /// Loads raw file bytes into a reconciled session document.
    ///
    /// An absent decrypted document means "use defaults". `for_editing` is
    /// forwarded to the cipher, which may prompt for credentials.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Cipher`] when decryption fails.
    pub fn load(
        &self,
        bytes: &[u8],
        schema: &CanonicalSchema,
        for_editing: bool,
    ) -> Result<LoadedConfig, PersistError> {
        let outcome = self.cipher.decrypt(bytes, for_editing)?;
        let document = outcome.document.unwrap_or_else(|| schema.defaults.clone());
        let reconciled = reconcile(document, schema);
        let mut document = reconciled.document;
        inject_defaults(&mut document, schema);
        Ok(LoadedConfig {
            document,
            password: outcome.password,
            password_is_hash: outcome.password_is_hash,
            certificate: outcome.certificate,
            violations: reconciled.violations,
        })
    }

    /// Serializes a session document into encrypted file bytes.
    ///
    /// The document is reconciled and injected before serialization so a
    /// saved file always carries the baseline; minimization is optional.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Cipher`] when encryption fails.
    pub fn save(
        &self,
        document: &Document,
        schema: &CanonicalSchema,
        credentials: &Credentials,
        purpose: EncryptPurpose,
        minimize_output: bool,
        for_editing: bool,
    ) -> Result<Vec<u8>, PersistError> {
        let reconciled = reconcile(document.clone(), schema);
        let mut prepared = reconciled.document;
        inject_defaults(&mut prepared, schema);
        if minimize_output {
            prepared = minimize(&prepared, schema, MinimizeSource::Current);
        }
        let bytes = self.cipher.encrypt(&prepared, credentials, purpose, for_editing)?;
        Ok(bytes)
    }

    /// Loads a configuration file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Io`] when the file cannot be read or exceeds
    /// the size limit, and [`PersistError::Cipher`] when decryption fails.
    pub fn load_file(
        &self,
        path: &Path,
        schema: &CanonicalSchema,
        for_editing: bool,
    ) -> Result<LoadedConfig, PersistError> {
        let metadata =
            fs::metadata(path).map_err(|err| PersistError::Io(err.to_string()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(PersistError::Io(format!(
                "config file exceeds size limit: {} bytes (max {MAX_CONFIG_FILE_SIZE})",
                metadata.len()
            )));
        }
        let bytes = fs::read(path).map_err(|err| PersistError::Io(err.to_string()))?;
        self.load(&bytes, schema, for_editing)
    }

    /// Saves a configuration file to disk.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Cipher`] when encryption fails and
    /// [`PersistError::Io`] when the file cannot be written.
    #[allow(clippy::too_many_arguments, reason = "mirrors the save operation surface")]
    pub fn save_file(
        &self,
        path: &Path,
        document: &Document,
        schema: &CanonicalSchema,
        credentials: &Credentials,
        purpose: EncryptPurpose,
        minimize_output: bool,
        for_editing: bool,
    ) -> Result<(), PersistError> {
        let bytes =
            self.save(document, schema, credentials, purpose, minimize_output, for_editing)?;
        fs::write(path, bytes).map_err(|err| PersistError::Io(err.to_string()))
    }
}
