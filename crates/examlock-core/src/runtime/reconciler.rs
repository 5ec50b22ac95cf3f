// examlock-core/src/runtime/reconciler.rs
// ============================================================================
// Module: ExamLock Reconciliation Pass
// Description: Fills and coerces loaded documents against the canonical schema.
// Purpose: Guarantee every schema key exists with the schema-correct kind.
// Dependencies: crate::core::{keys, schema, value}, thiserror
// ============================================================================

//! ## Overview
//! Documents saved by older or newer product versions arrive missing keys,
//! with keys of the wrong type, or with extra structure. The reconciliation
//! pass rebuilds the invariants every consumer relies on: each top-level
//! schema key is present with the schema's variant kind, and every item of
//! the four known nested collections carries its per-item default keys.
//!
//! Coercion is by replacement: a value whose kind disagrees with the schema
//! is discarded wholesale, never converted in place. The single structural
//! error case is a collection position holding a fundamentally incompatible
//! shape; the pass records a [`SchemaViolation`] for it, substitutes the
//! schema default, and continues.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::keys;
use crate::core::schema::CanonicalSchema;
use crate::core::value::Document;
use crate::core::value::Record;
use crate::core::value::Value;
use crate::core::value::ValueKind;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Structural schema violations detected during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// A collection position held a fundamentally incompatible shape.
    #[error("expected {expected} at {path}, found {found}")]
    ShapeConflict {
        /// Document path of the conflicting position.
        path: String,
        /// Kind required by the schema.
        expected: ValueKind,
        /// Kind found in the document.
        found: ValueKind,
    },
}

// ============================================================================
// SECTION: Reconciliation Outcome
// ============================================================================

/// Result of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Reconciled document satisfying the schema invariants.
    pub document: Document,
    /// Structural violations that were masked by schema defaults.
    pub violations: Vec<SchemaViolation>,
}

// ============================================================================
// SECTION: Back-Fill Rules
// ============================================================================

/// Back-fill rule applied when an item record misses a default key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backfill {
    /// Insert every missing default key.
    Always,
    /// Skip keys whose default is an empty text scalar.
    ///
    /// Only the permitted-argument records use this rule. The asymmetry is
    /// preserved from the original settings logic for file compatibility.
    SkipEmptyTextDefaults,
}

// ============================================================================
// SECTION: Reconciliation Pass
// ============================================================================

/// Reconciles a document against the canonical schema.
///
/// Never fails: structural conflicts are masked by schema defaults and
/// reported in the outcome.
#[must_use]
pub fn reconcile(document: Document, schema: &CanonicalSchema) -> ReconcileOutcome {
    let mut document = document;
    let mut violations = Vec::new();

    reconcile_top_level(&mut document, schema);
    reconcile_permitted_processes(&mut document, schema, &mut violations);
    reconcile_collection(
        &mut document,
        keys::PROHIBITED_PROCESSES,
        &schema.prohibited_process,
        &mut violations,
    );
    reconcile_collection(
        &mut document,
        keys::EMBEDDED_CERTIFICATES,
        &schema.embedded_certificate,
        &mut violations,
    );
    reconcile_proxies(&mut document, schema, &mut violations);

    ReconcileOutcome {
        document,
        violations,
    }
}

/// Reconciles a document, surfacing the first structural violation.
///
/// # Errors
///
/// Returns the first [`SchemaViolation`] instead of masking it.
pub fn reconcile_strict(
    document: Document,
    schema: &CanonicalSchema,
) -> Result<Document, SchemaViolation> {
    let outcome = reconcile(document, schema);
    match outcome.violations.into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(outcome.document),
    }
}

// ============================================================================
// SECTION: Top Level
// ============================================================================

/// Ensures every schema key is present with the schema's kind.
///
/// A missing key gets the default inserted; a kind mismatch replaces the
/// stored value with the default wholesale.
fn reconcile_top_level(document: &mut Document, schema: &CanonicalSchema) {
    for (key, default) in schema.defaults.iter() {
        let replace = match document.get(key) {
            None => true,
            Some(value) => value.kind() != default.kind(),
        };
        if replace {
            document.insert(key, default.clone());
        }
    }
}

// ============================================================================
// SECTION: Nested Collections
// ============================================================================

/// Reconciles one sequence-of-records collection against a per-item default.
fn reconcile_collection(
    document: &mut Document,
    collection_key: &str,
    item_default: &Record,
    violations: &mut Vec<SchemaViolation>,
) {
    if let Some(Value::Seq(items)) = document.get_mut(collection_key) {
        reconcile_items(items, item_default, Backfill::Always, collection_key, violations);
    }
}

/// Reconciles the permitted process collection and its argument sequences.
fn reconcile_permitted_processes(
    document: &mut Document,
    schema: &CanonicalSchema,
    violations: &mut Vec<SchemaViolation>,
) {
    let Some(Value::Seq(items)) = document.get_mut(keys::PERMITTED_PROCESSES) else {
        return;
    };
    reconcile_items(
        items,
        &schema.permitted_process,
        Backfill::Always,
        keys::PERMITTED_PROCESSES,
        violations,
    );
    for (index, item) in items.iter_mut().enumerate() {
        if let Value::Rec(process) = item {
            reconcile_arguments(process, index, schema, violations);
        }
    }
}

/// Reconciles the argument sequence of one permitted process record.
fn reconcile_arguments(
    process: &mut Record,
    process_index: usize,
    schema: &CanonicalSchema,
    violations: &mut Vec<SchemaViolation>,
) {
    let path = format!("{}[{process_index}].{}", keys::PERMITTED_PROCESSES, keys::PROCESS_ARGUMENTS);
    match process.get_mut(keys::PROCESS_ARGUMENTS) {
        Some(Value::Seq(arguments)) => {
            reconcile_items(
                arguments,
                &schema.permitted_argument,
                Backfill::SkipEmptyTextDefaults,
                &path,
                violations,
            );
        }
        Some(other) => {
            violations.push(SchemaViolation::ShapeConflict {
                path,
                expected: ValueKind::Seq,
                found: other.kind(),
            });
            *other = Value::Seq(Vec::new());
        }
        None => {
            process.insert(keys::PROCESS_ARGUMENTS, Value::Seq(Vec::new()));
        }
    }
}

/// Applies the per-item back-fill rule to every record in a sequence.
///
/// Non-record items are a structural conflict: the violation is recorded and
/// the item is replaced with the per-item default so later passes can index
/// into it.
fn reconcile_items(
    items: &mut [Value],
    item_default: &Record,
    rule: Backfill,
    collection_path: &str,
    violations: &mut Vec<SchemaViolation>,
) {
    for (index, item) in items.iter_mut().enumerate() {
        match item {
            Value::Rec(record) => backfill_record(record, item_default, rule),
            other => {
                violations.push(SchemaViolation::ShapeConflict {
                    path: format!("{collection_path}[{index}]"),
                    expected: ValueKind::Rec,
                    found: other.kind(),
                });
                let mut replacement = Record::new();
                backfill_record(&mut replacement, item_default, rule);
                *other = Value::Rec(replacement);
            }
        }
    }
}

/// Inserts missing default keys into a record according to the back-fill rule.
pub(crate) fn backfill_record(record: &mut Record, defaults: &Record, rule: Backfill) {
    for (key, default) in defaults.iter() {
        if record.contains_key(key) {
            continue;
        }
        if rule == Backfill::SkipEmptyTextDefaults
            && matches!(default, Value::Text(text) if text.is_empty())
        {
            continue;
        }
        record.insert(key, default.clone());
    }
}

// ============================================================================
// SECTION: Proxy Record
// ============================================================================

/// Reconciles the proxy record: key presence plus bypass normalization.
///
/// Unlike the top level, the proxy record only back-fills missing keys; an
/// existing value of the wrong kind is left for the bypass step to handle,
/// matching the original settings logic.
fn reconcile_proxies(
    document: &mut Document,
    schema: &CanonicalSchema,
    violations: &mut Vec<SchemaViolation>,
) {
    let Some(Value::Rec(proxy)) = document.get_mut(keys::PROXIES) else {
        return;
    };
    backfill_record(proxy, &schema.proxy, Backfill::Always);

    let path = format!("{}.{}", keys::PROXIES, keys::PROXY_EXCEPTIONS_LIST);
    match proxy.get_mut(keys::PROXY_EXCEPTIONS_LIST) {
        Some(Value::Seq(hosts)) => {
            normalize_bypass_hosts(hosts, &path, violations);
        }
        Some(other) => {
            violations.push(SchemaViolation::ShapeConflict {
                path,
                expected: ValueKind::Seq,
                found: other.kind(),
            });
            let default = schema
                .proxy
                .get(keys::PROXY_EXCEPTIONS_LIST)
                .cloned()
                .unwrap_or_else(|| Value::Seq(Vec::new()));
            *other = default;
        }
        None => {}
    }
}

/// Replaces empty or non-text bypass entries with the default bypass host.
fn normalize_bypass_hosts(
    hosts: &mut [Value],
    path: &str,
    violations: &mut Vec<SchemaViolation>,
) {
    for (index, host) in hosts.iter_mut().enumerate() {
        match host {
            Value::Text(text) if text.is_empty() => {
                *host = Value::text(crate::core::schema::DEFAULT_BYPASS_HOST);
            }
            Value::Text(_) => {}
            other => {
                violations.push(SchemaViolation::ShapeConflict {
                    path: format!("{path}[{index}]"),
                    expected: ValueKind::Text,
                    found: other.kind(),
                });
                *other = Value::text(crate::core::schema::DEFAULT_BYPASS_HOST);
            }
        }
    }
}
