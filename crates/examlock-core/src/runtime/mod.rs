// examlock-core/src/runtime/mod.rs
// ============================================================================
// Module: ExamLock Runtime Passes
// Description: Reconciliation, minimization, injection, store, and facade.
// Purpose: Provide the pure transforms and session glue over core types.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runtime passes are single-threaded, synchronous transforms over
//! in-memory documents. They take documents by value or reference, retain
//! nothing, and define no shared mutable state; callers own the session
//! documents and sequence the passes.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod facade;
pub mod injector;
pub mod minimizer;
pub mod reconciler;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use facade::ConfigPersistence;
pub use facade::LoadedConfig;
pub use facade::PersistError;
pub use injector::CheckMode;
pub use injector::check_shell_kill_entries;
pub use injector::inject_defaults;
pub use minimizer::MinimizeSource;
pub use minimizer::minimize;
pub use reconciler::ReconcileOutcome;
pub use reconciler::SchemaViolation;
pub use reconciler::reconcile;
pub use reconciler::reconcile_strict;
pub use store::SettingsStore;
pub use store::SideTable;
