// examlock-core/src/core/mod.rs
// ============================================================================
// Module: ExamLock Core Types
// Description: Canonical settings value model, schema, and hashing.
// Purpose: Provide the stable data types the passes operate on.
// Dependencies: serde, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! Core types define the settings value tree, the canonical default schema,
//! the well-known key namespace, and config key hashing. These types are the
//! source of truth for the runtime passes and any derived editor surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod hashing;
pub mod keys;
pub mod schema;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use hashing::ConfigKey;
pub use hashing::HashError;
pub use hashing::KeyAlgorithm;
pub use hashing::canonical_bytes;
pub use hashing::config_key;
pub use schema::CanonicalSchema;
pub use schema::DEFAULT_BYPASS_HOST;
pub use schema::OS_MACOS;
pub use schema::OS_WINDOWS;
pub use schema::SHELL_KILL_PROHIBITED;
pub use schema::STRICT_PROHIBITED;
pub use value::Document;
pub use value::Record;
pub use value::Value;
pub use value::ValueKind;
