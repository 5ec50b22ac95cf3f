// crates/examlock-core/tests/store.rs
// ============================================================================
// Module: Settings Store Tests
// Description: Verifies session document lifecycle and the UI side table.
// ============================================================================
//! ## Overview
//! Ensures the store keeps current, default, and original documents in step
//! across adopt, reset, and revert, and rebuilds the side table from window
//! settings.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use examlock_core::CanonicalSchema;
use examlock_core::Document;
use examlock_core::STRICT_PROHIBITED;
use examlock_core::SettingsStore;
use examlock_core::Value;
use examlock_core::inject_defaults;
use examlock_core::keys;
use examlock_core::reconcile;

fn loaded_document(schema: &CanonicalSchema) -> Document {
    let mut document = Document::new();
    document.insert(keys::START_URL, Value::text("https://exam.example.edu"));
    document.insert(keys::MAIN_BROWSER_WINDOW_WIDTH, Value::text("1280"));
    let mut document = reconcile(document, schema).document;
    inject_defaults(&mut document, schema);
    document
}

#[test]
fn from_defaults_starts_all_three_documents_equal() {
    let schema = CanonicalSchema::new();
    let store = SettingsStore::from_defaults(&schema);

    assert_eq!(store.current(), store.default_document());
    assert_eq!(store.current(), store.original());
}

#[test]
fn from_defaults_carries_the_injected_baseline() {
    let schema = CanonicalSchema::new();
    let store = SettingsStore::from_defaults(&schema);

    let entries = store.current().get_seq(keys::PROHIBITED_PROCESSES).expect("sequence");
    assert_eq!(entries.len(), STRICT_PROHIBITED.len());
}

#[test]
fn adopt_installs_the_document_and_snapshots_it() {
    let schema = CanonicalSchema::new();
    let mut store = SettingsStore::from_defaults(&schema);
    let document = loaded_document(&schema);

    store.adopt(document.clone(), &schema);

    assert_eq!(store.current(), &document);
    assert_eq!(store.original(), &document);
    assert_ne!(store.default_document(), &document);
    assert_eq!(store.side().main_window_width, "1280");
}

#[test]
fn edits_touch_only_the_current_document() {
    let schema = CanonicalSchema::new();
    let mut store = SettingsStore::from_defaults(&schema);

    store.current_mut().insert(keys::ALLOW_QUIT, Value::Bool(false));

    assert_eq!(store.current().get_bool(keys::ALLOW_QUIT), Some(false));
    assert_eq!(store.default_document().get_bool(keys::ALLOW_QUIT), Some(true));
    assert_eq!(store.original().get_bool(keys::ALLOW_QUIT), Some(true));
}

#[test]
fn revert_restores_the_loaded_snapshot() {
    let schema = CanonicalSchema::new();
    let mut store = SettingsStore::from_defaults(&schema);
    let document = loaded_document(&schema);
    store.adopt(document.clone(), &schema);

    store.current_mut().insert(keys::START_URL, Value::text("https://other.example.edu"));
    store.revert_to_original();

    assert_eq!(store.current(), &document);
    assert_eq!(store.side().main_window_width, "1280");
}

#[test]
fn reset_recreates_all_three_documents_from_defaults() {
    let schema = CanonicalSchema::new();
    let mut store = SettingsStore::from_defaults(&schema);
    store.adopt(loaded_document(&schema), &schema);

    store.reset_to_defaults(&schema);

    assert_eq!(store.current(), store.default_document());
    assert_eq!(store.current(), store.original());
    assert_eq!(store.current().get_text(keys::START_URL), schema.defaults.get_text(keys::START_URL));
}

#[test]
fn side_table_reads_the_window_settings() {
    let schema = CanonicalSchema::new();
    let store = SettingsStore::from_defaults(&schema);

    assert_eq!(store.side().main_window_width, "100%");
    assert_eq!(store.side().main_window_height, "100%");
    assert_eq!(store.side().new_window_width, "1000");
    assert_eq!(store.side().new_window_height, "100%");
    assert_eq!(store.side().certificate_identity, None);
}
