// crates/examlock-core/tests/injector.rs
// ============================================================================
// Module: Default Record Injector Tests
// Description: Verifies baseline injection, fuzzy matching, and removal.
// ============================================================================
//! ## Overview
//! Ensures the curated prohibited process lists are injected without
//! duplicates, that fuzzy matching is case-insensitive and extension-stripped
//! over Windows entries only, and that the shell-kill check matches exactly.

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
use examlock_core::CheckMode;
use examlock_core::Document;
use examlock_core::OS_MACOS;
use examlock_core::OS_WINDOWS;
use examlock_core::Record;
use examlock_core::SHELL_KILL_PROHIBITED;
use examlock_core::STRICT_PROHIBITED;
use examlock_core::Value;
use examlock_core::check_shell_kill_entries;
use examlock_core::inject_defaults;
use examlock_core::keys;
use examlock_core::reconcile;

fn base_document(schema: &CanonicalSchema, shell_kill: bool) -> Document {
    let mut document = reconcile(Document::new(), schema).document;
    document.insert(keys::KILL_EXPLORER_SHELL, Value::Bool(shell_kill));
    document
}

fn prohibited_entry(executable: &str, original_name: &str, os: i64) -> Value {
    let mut record = Record::new();
    record.insert(keys::PROCESS_OS, Value::Int(os));
    record.insert(keys::PROCESS_EXECUTABLE, Value::text(executable));
    record.insert(keys::PROCESS_ORIGINAL_NAME, Value::text(original_name));
    Value::Rec(record)
}

fn executables(document: &Document) -> Vec<&str> {
    document
        .get_seq(keys::PROHIBITED_PROCESSES)
        .expect("prohibited sequence")
        .iter()
        .filter_map(|entry| match entry {
            Value::Rec(record) => record.get_text(keys::PROCESS_EXECUTABLE),
            _ => None,
        })
        .collect()
}

#[test]
fn strict_list_is_always_injected() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, false);

    inject_defaults(&mut document, &schema);

    let names = executables(&document);
    for name in STRICT_PROHIBITED {
        assert!(names.contains(name), "missing strict entry {name}");
    }
    for name in SHELL_KILL_PROHIBITED {
        assert!(!names.contains(name), "unexpected shell-kill entry {name}");
    }
}

#[test]
fn shell_kill_list_is_injected_when_the_shell_is_killed() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, true);

    inject_defaults(&mut document, &schema);

    let names = executables(&document);
    for name in SHELL_KILL_PROHIBITED {
        assert!(names.contains(name), "missing shell-kill entry {name}");
    }
}

#[test]
fn injection_is_idempotent() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, true);

    inject_defaults(&mut document, &schema);
    let snapshot = document.clone();
    inject_defaults(&mut document, &schema);

    assert_eq!(document, snapshot);
}

#[test]
fn injected_entries_carry_the_baseline_record() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, false);

    inject_defaults(&mut document, &schema);

    let entries = document.get_seq(keys::PROHIBITED_PROCESSES).expect("sequence");
    let Value::Rec(record) = &entries[0] else {
        panic!("expected record entry");
    };
    assert_eq!(record.get_bool(keys::PROCESS_ACTIVE), Some(true));
    assert_eq!(record.get_bool(keys::PROCESS_CURRENT_USER), Some(true));
    assert_eq!(record.get_int(keys::PROCESS_OS), Some(OS_WINDOWS));
    let executable = record.get_text(keys::PROCESS_EXECUTABLE).expect("executable");
    assert_eq!(record.get_text(keys::PROCESS_ORIGINAL_NAME), Some(executable));
}

#[test]
fn matching_is_case_insensitive_and_extension_stripped() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, true);
    document.insert(
        keys::PROHIBITED_PROCESSES,
        Value::Seq(vec![
            prohibited_entry("Chrome.exe", "", OS_WINDOWS),
            prohibited_entry("TEAMVIEWER.EXE", "", OS_WINDOWS),
        ]),
    );

    inject_defaults(&mut document, &schema);

    let names = executables(&document);
    assert!(!names.contains(&"chrome.exe"), "existing entry must block chrome.exe");
    assert!(!names.contains(&"TeamViewer.exe"), "existing entry must block TeamViewer.exe");
    assert!(names.contains(&"firefox.exe"));
}

#[test]
fn original_name_alone_blocks_injection() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, false);
    document.insert(
        keys::PROHIBITED_PROCESSES,
        Value::Seq(vec![prohibited_entry("renamed.exe", "skype", OS_WINDOWS)]),
    );

    inject_defaults(&mut document, &schema);

    let names = executables(&document);
    assert!(!names.contains(&"Skype.exe"));
}

#[test]
fn non_windows_entries_never_block_injection() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, false);
    document.insert(
        keys::PROHIBITED_PROCESSES,
        Value::Seq(vec![prohibited_entry("Skype.exe", "Skype.exe", OS_MACOS)]),
    );

    inject_defaults(&mut document, &schema);

    let names = executables(&document);
    assert_eq!(names.iter().filter(|name| **name == "Skype.exe").count(), 2);
}

#[test]
fn new_entries_are_inserted_at_the_front() {
    let schema = CanonicalSchema::new();
    let existing = prohibited_entry("legacy.exe", "legacy.exe", OS_WINDOWS);
    let mut document = base_document(&schema, false);
    document.insert(keys::PROHIBITED_PROCESSES, Value::Seq(vec![existing]));

    inject_defaults(&mut document, &schema);

    let names = executables(&document);
    assert_eq!(names.last(), Some(&"legacy.exe"));
}

#[test]
fn injection_without_a_prohibited_collection_is_a_no_op() {
    let schema = CanonicalSchema::new();
    let mut document = Document::new();
    document.insert(keys::KILL_EXPLORER_SHELL, Value::Bool(true));

    inject_defaults(&mut document, &schema);

    assert!(!document.contains_key(keys::PROHIBITED_PROCESSES));
}

#[test]
fn shell_kill_check_reports_injected_browser_entries() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, true);
    inject_defaults(&mut document, &schema);

    assert!(check_shell_kill_entries(&mut document, CheckMode::Report));
}

#[test]
fn shell_kill_check_is_false_without_browser_entries() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, false);
    inject_defaults(&mut document, &schema);

    assert!(!check_shell_kill_entries(&mut document, CheckMode::Report));
}

#[test]
fn shell_kill_check_matches_exact_names_only() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, false);
    document.insert(
        keys::PROHIBITED_PROCESSES,
        Value::Seq(vec![prohibited_entry("CHROME.EXE", "", OS_WINDOWS)]),
    );

    assert!(!check_shell_kill_entries(&mut document, CheckMode::Report));
}

#[test]
fn shell_kill_removal_keeps_strict_entries() {
    let schema = CanonicalSchema::new();
    let mut document = base_document(&schema, true);
    inject_defaults(&mut document, &schema);

    assert!(check_shell_kill_entries(&mut document, CheckMode::Remove));

    let names = executables(&document);
    for name in SHELL_KILL_PROHIBITED {
        assert!(!names.contains(name), "shell-kill entry {name} should be removed");
    }
    for name in STRICT_PROHIBITED {
        assert!(names.contains(name), "strict entry {name} should remain");
    }
}
