// crates/examlock-core/tests/reconcile.rs
// ============================================================================
// Module: Reconciliation Pass Tests
// Description: Verifies schema completeness, coercion, and back-fill rules.
// ============================================================================
//! ## Overview
//! Ensures reconciliation fills missing keys, replaces kind mismatches
//! wholesale, back-fills nested collection items, and normalizes the proxy
//! bypass list while reporting structural violations.

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
use examlock_core::DEFAULT_BYPASS_HOST;
use examlock_core::Document;
use examlock_core::Record;
use examlock_core::SchemaViolation;
use examlock_core::Value;
use examlock_core::keys;
use examlock_core::reconcile;
use examlock_core::reconcile_strict;

fn seq_of(items: Vec<Value>) -> Value {
    Value::Seq(items)
}

fn record_with(entries: &[(&str, Value)]) -> Record {
    entries.iter().map(|(key, value)| ((*key).to_string(), value.clone())).collect()
}

#[test]
fn empty_document_gains_every_schema_key() {
    let schema = CanonicalSchema::new();
    let outcome = reconcile(Document::new(), &schema);

    assert!(outcome.violations.is_empty());
    for (key, default) in schema.defaults.iter() {
        let value = outcome.document.get(key).expect("schema key present");
        assert_eq!(value.kind(), default.kind(), "kind mismatch at {key}");
    }
}

#[test]
fn defaults_document_is_a_fixed_point() {
    let schema = CanonicalSchema::new();
    let outcome = reconcile(schema.defaults.clone(), &schema);

    assert!(outcome.violations.is_empty());
    assert_eq!(outcome.document, schema.defaults);
}

#[test]
fn reconcile_is_idempotent() {
    let schema = CanonicalSchema::new();
    let mut document = Document::new();
    document.insert(keys::START_URL, Value::text("https://exam.example.edu"));
    document.insert(keys::ALLOW_QUIT, Value::Int(7));

    let first = reconcile(document, &schema);
    let second = reconcile(first.document.clone(), &schema);

    assert_eq!(second.document, first.document);
    assert!(second.violations.is_empty());
}

#[test]
fn kind_mismatch_is_replaced_wholesale() {
    let schema = CanonicalSchema::new();
    let mut document = Document::new();
    document.insert(keys::START_URL, Value::Int(42));
    document.insert(keys::KILL_EXPLORER_SHELL, Value::text("yes"));

    let outcome = reconcile(document, &schema);

    assert_eq!(outcome.document.get(keys::START_URL), schema.defaults.get(keys::START_URL));
    assert_eq!(outcome.document.get_bool(keys::KILL_EXPLORER_SHELL), Some(false));
    assert!(outcome.violations.is_empty(), "top-level coercion is silent");
}

#[test]
fn valid_values_survive_unchanged() {
    let schema = CanonicalSchema::new();
    let mut document = Document::new();
    document.insert(keys::START_URL, Value::text("https://exam.example.edu"));
    document.insert(keys::TASK_BAR_HEIGHT, Value::Int(64));

    let outcome = reconcile(document, &schema);

    assert_eq!(outcome.document.get_text(keys::START_URL), Some("https://exam.example.edu"));
    assert_eq!(outcome.document.get_int(keys::TASK_BAR_HEIGHT), Some(64));
}

#[test]
fn unknown_keys_are_preserved() {
    let schema = CanonicalSchema::new();
    let mut document = Document::new();
    document.insert("vendorExtension", Value::text("keep me"));

    let outcome = reconcile(document, &schema);

    assert_eq!(outcome.document.get_text("vendorExtension"), Some("keep me"));
}

#[test]
fn prohibited_process_items_are_backfilled() {
    let schema = CanonicalSchema::new();
    let item = record_with(&[(keys::PROCESS_EXECUTABLE, Value::text("calc.exe"))]);
    let mut document = Document::new();
    document.insert(keys::PROHIBITED_PROCESSES, seq_of(vec![Value::Rec(item)]));

    let outcome = reconcile(document, &schema);

    let items = outcome.document.get_seq(keys::PROHIBITED_PROCESSES).expect("sequence");
    let Value::Rec(record) = &items[0] else {
        panic!("expected record item");
    };
    assert_eq!(record.get_text(keys::PROCESS_EXECUTABLE), Some("calc.exe"));
    assert_eq!(record.len(), schema.prohibited_process.len());
    for (key, _) in schema.prohibited_process.iter() {
        assert!(record.contains_key(key), "missing back-filled key {key}");
    }
}

#[test]
fn argument_records_skip_empty_text_defaults() {
    let schema = CanonicalSchema::new();
    let argument = Record::new();
    let process = record_with(&[(keys::PROCESS_ARGUMENTS, seq_of(vec![Value::Rec(argument)]))]);
    let mut document = Document::new();
    document.insert(keys::PERMITTED_PROCESSES, seq_of(vec![Value::Rec(process)]));

    let outcome = reconcile(document, &schema);

    let processes = outcome.document.get_seq(keys::PERMITTED_PROCESSES).expect("sequence");
    let Value::Rec(process) = &processes[0] else {
        panic!("expected process record");
    };
    let arguments = process.get_seq(keys::PROCESS_ARGUMENTS).expect("arguments");
    let Value::Rec(argument) = &arguments[0] else {
        panic!("expected argument record");
    };
    assert_eq!(argument.get_bool(keys::ARGUMENT_ACTIVE), Some(true));
    assert!(
        !argument.contains_key(keys::ARGUMENT_ARGUMENT),
        "empty-text default must not be back-filled into argument records"
    );
}

#[test]
fn missing_arguments_key_gains_an_empty_sequence() {
    let schema = CanonicalSchema::new();
    let process = record_with(&[(keys::PROCESS_TITLE, Value::text("Calculator"))]);
    let mut document = Document::new();
    document.insert(keys::PERMITTED_PROCESSES, seq_of(vec![Value::Rec(process)]));

    let outcome = reconcile(document, &schema);

    let processes = outcome.document.get_seq(keys::PERMITTED_PROCESSES).expect("sequence");
    let Value::Rec(process) = &processes[0] else {
        panic!("expected process record");
    };
    assert_eq!(process.get_seq(keys::PROCESS_ARGUMENTS), Some(&[][..]));
}

#[test]
fn empty_bypass_hosts_become_the_default_host() {
    let schema = CanonicalSchema::new();
    let proxy = record_with(&[(
        keys::PROXY_EXCEPTIONS_LIST,
        seq_of(vec![Value::text(""), Value::text("proxy.example.edu"), Value::text("")]),
    )]);
    let mut document = Document::new();
    document.insert(keys::PROXIES, Value::Rec(proxy));

    let outcome = reconcile(document, &schema);

    assert!(outcome.violations.is_empty(), "empty-text replacement is silent");
    let proxy = outcome.document.get_rec(keys::PROXIES).expect("proxy record");
    let hosts = proxy.get_seq(keys::PROXY_EXCEPTIONS_LIST).expect("bypass list");
    assert_eq!(
        hosts,
        &[
            Value::text(DEFAULT_BYPASS_HOST),
            Value::text("proxy.example.edu"),
            Value::text(DEFAULT_BYPASS_HOST),
        ]
    );
}

#[test]
fn non_text_bypass_host_is_a_violation() {
    let schema = CanonicalSchema::new();
    let proxy = record_with(&[(keys::PROXY_EXCEPTIONS_LIST, seq_of(vec![Value::Int(3)]))]);
    let mut document = Document::new();
    document.insert(keys::PROXIES, Value::Rec(proxy));

    let outcome = reconcile(document, &schema);

    assert_eq!(outcome.violations.len(), 1);
    let proxy = outcome.document.get_rec(keys::PROXIES).expect("proxy record");
    let hosts = proxy.get_seq(keys::PROXY_EXCEPTIONS_LIST).expect("bypass list");
    assert_eq!(hosts, &[Value::text(DEFAULT_BYPASS_HOST)]);
}

#[test]
fn proxy_record_backfills_missing_keys() {
    let schema = CanonicalSchema::new();
    let mut document = Document::new();
    document.insert(keys::PROXIES, Value::Rec(Record::new()));

    let outcome = reconcile(document, &schema);

    let proxy = outcome.document.get_rec(keys::PROXIES).expect("proxy record");
    assert_eq!(proxy, &schema.proxy);
}

#[test]
fn non_record_collection_item_is_masked_and_reported() {
    let schema = CanonicalSchema::new();
    let mut document = Document::new();
    document.insert(keys::EMBEDDED_CERTIFICATES, seq_of(vec![Value::text("not a record")]));

    let outcome = reconcile(document, &schema);

    assert_eq!(outcome.violations.len(), 1);
    let SchemaViolation::ShapeConflict {
        path, ..
    } = &outcome.violations[0];
    assert_eq!(path, "embeddedCertificates[0]");
    let items = outcome.document.get_seq(keys::EMBEDDED_CERTIFICATES).expect("sequence");
    assert_eq!(items, &[Value::Rec(schema.embedded_certificate.clone())]);
}

#[test]
fn non_sequence_arguments_value_is_masked_and_reported() {
    let schema = CanonicalSchema::new();
    let process = record_with(&[(keys::PROCESS_ARGUMENTS, Value::Bool(true))]);
    let mut document = Document::new();
    document.insert(keys::PERMITTED_PROCESSES, seq_of(vec![Value::Rec(process)]));

    let outcome = reconcile(document, &schema);

    assert_eq!(outcome.violations.len(), 1);
    let processes = outcome.document.get_seq(keys::PERMITTED_PROCESSES).expect("sequence");
    let Value::Rec(process) = &processes[0] else {
        panic!("expected process record");
    };
    assert_eq!(process.get_seq(keys::PROCESS_ARGUMENTS), Some(&[][..]));
}

#[test]
fn strict_reconcile_accepts_clean_documents() {
    let schema = CanonicalSchema::new();
    let document = reconcile_strict(Document::new(), &schema).expect("clean document");
    assert!(document.contains_key(keys::START_URL));
}

#[test]
fn strict_reconcile_surfaces_the_first_violation() {
    let schema = CanonicalSchema::new();
    let mut document = Document::new();
    document.insert(keys::PROHIBITED_PROCESSES, seq_of(vec![Value::Int(1)]));

    let err = reconcile_strict(document, &schema).unwrap_err();
    let SchemaViolation::ShapeConflict {
        path, ..
    } = err;
    assert_eq!(path, "prohibitedProcesses[0]");
}
