// examlock-core/src/core/hashing.rs
// ============================================================================
// Module: ExamLock Config Key Hashing
// Description: RFC 8785 JSON canonicalization and config key computation.
// Purpose: Provide the deterministic config key reported to exam servers.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Exam servers verify that a client runs an approved configuration by
//! comparing a config key: the SHA-256 digest of the settings document in
//! RFC 8785 (JCS) canonical JSON form. Canonicalization makes the key stable
//! across key ordering and serialization differences between editor versions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

use crate::core::value::Document;

// ============================================================================
// SECTION: Config Key
// ============================================================================

/// Hash algorithm used for config keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAlgorithm {
    /// SHA-256 hashing.
    Sha256,
}

/// Deterministic configuration digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigKey {
    /// Hash algorithm identifier.
    pub algorithm: KeyAlgorithm,
    /// Lowercase hex-encoded digest bytes.
    pub value: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when computing config keys.
#[derive(Debug, Error)]
pub enum HashError {
    /// JSON canonicalization failed.
    #[error("failed to canonicalize settings document: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: Key Computation
// ============================================================================

/// Computes the config key for a settings document.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn config_key(document: &Document) -> Result<ConfigKey, HashError> {
    let bytes = canonical_bytes(document)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();
    Ok(ConfigKey {
        algorithm: KeyAlgorithm::Sha256,
        value: hex_encode(&digest),
    })
}

/// Returns canonical JSON bytes for a settings document using RFC 8785.
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when serialization fails.
pub fn canonical_bytes(document: &Document) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(document).map_err(|err| HashError::Canonicalization(err.to_string()))
}

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
