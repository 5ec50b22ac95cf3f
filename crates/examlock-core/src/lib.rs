// examlock-core/src/lib.rs
// ============================================================================
// Module: ExamLock Core Library
// Description: Public API surface for the ExamLock configuration engine.
// Purpose: Expose core types, interfaces, and runtime passes.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! ExamLock core provides the configuration schema reconciliation engine for
//! a locked-down exam browser: a canonical default schema, reconciliation of
//! arbitrary loaded documents, minimization for compact serialization, and
//! baseline prohibited-process injection. It is UI- and crypto-agnostic and
//! integrates through explicit interfaces rather than embedding into the
//! editor shell.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use interfaces::CertificateHandle;
pub use interfaces::CipherError;
pub use interfaces::ConfigCipher;
pub use interfaces::Credentials;
pub use interfaces::DecryptOutcome;
pub use interfaces::EncryptPurpose;
pub use interfaces::PlainCipher;
pub use runtime::CheckMode;
pub use runtime::ConfigPersistence;
pub use runtime::LoadedConfig;
pub use runtime::MinimizeSource;
pub use runtime::PersistError;
pub use runtime::ReconcileOutcome;
pub use runtime::SchemaViolation;
pub use runtime::SettingsStore;
pub use runtime::SideTable;
pub use runtime::check_shell_kill_entries;
pub use runtime::inject_defaults;
pub use runtime::minimize;
pub use runtime::reconcile;
pub use runtime::reconcile_strict;
