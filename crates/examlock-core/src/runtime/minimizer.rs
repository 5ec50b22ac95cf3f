// examlock-core/src/runtime/minimizer.rs
// ============================================================================
// Module: ExamLock Minimization Pass
// Description: Produces reduced documents for compact serialization.
// Purpose: Drop structurally empty collections without losing information.
// Dependencies: crate::core::{keys, schema, value}, crate::runtime::reconciler
// ============================================================================

//! ## Overview
//! Minimization is the inverse of reconciliation: it omits structurally
//! empty sequences and records before a document is serialized, relying on
//! the next reconciliation pass to rebuild exactly what was dropped. The
//! pass never mutates its input and never discards information the
//! reconciler would reconstruct differently.
//!
//! The original settings code appears to copy plain top-level values from
//! the default schema rather than from the current document, which looks
//! like a defect. Both readings are implemented behind [`MinimizeSource`];
//! [`MinimizeSource::Current`] is the committed default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::keys;
use crate::core::schema::CanonicalSchema;
use crate::core::value::Document;
use crate::core::value::Record;
use crate::core::value::Value;
use crate::runtime::reconciler::Backfill;
use crate::runtime::reconciler::backfill_record;

// ============================================================================
// SECTION: Minimization Source
// ============================================================================

/// Source of plain top-level values kept by minimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinimizeSource {
    /// Copy kept values from the document being minimized.
    #[default]
    Current,
    /// Copy kept values from the canonical schema defaults where present.
    ///
    /// Mirrors the suspected defect in the original settings code; retained
    /// until real saved-file fixtures rule one reading out.
    Defaults,
}

// ============================================================================
// SECTION: Minimization Pass
// ============================================================================

/// Produces a reduced copy of a document for serialization.
#[must_use]
pub fn minimize(
    document: &Document,
    schema: &CanonicalSchema,
    source: MinimizeSource,
) -> Document {
    let mut out = Document::new();
    for (key, value) in document.iter() {
        if is_empty_container(value) {
            continue;
        }
        let kept = match key {
            keys::PERMITTED_PROCESSES => minimize_permitted_processes(value, schema),
            keys::PROHIBITED_PROCESSES | keys::EMBEDDED_CERTIFICATES => {
                minimize_collection(value)
            }
            keys::PROXIES => minimize_proxy(value),
            _ => match source {
                MinimizeSource::Current => value.clone(),
                MinimizeSource::Defaults => {
                    schema.defaults.get(key).cloned().unwrap_or_else(|| value.clone())
                }
            },
        };
        out.insert(key, kept);
    }
    out
}

// ============================================================================
// SECTION: Collection Minimization
// ============================================================================

/// Minimizes the permitted process collection, recursing into arguments.
fn minimize_permitted_processes(value: &Value, schema: &CanonicalSchema) -> Value {
    let Value::Seq(items) = value else {
        return value.clone();
    };
    let minimized = items
        .iter()
        .map(|item| match item {
            Value::Rec(process) => Value::Rec(minimize_process_item(process, schema)),
            other => other.clone(),
        })
        .collect();
    Value::Seq(minimized)
}

/// Minimizes one permitted process record and its argument sequence.
fn minimize_process_item(process: &Record, schema: &CanonicalSchema) -> Record {
    let mut out = Record::new();
    for (key, value) in process.iter() {
        if is_empty_container(value) {
            continue;
        }
        if key == keys::PROCESS_ARGUMENTS {
            out.insert(key, minimize_arguments(value, schema));
        } else {
            out.insert(key, value.clone());
        }
    }
    out
}

/// Minimizes an argument sequence, carrying the empty-default exception.
///
/// Argument records back-fill missing keys during minimization exactly as
/// the reconciler does: a key whose default is an empty text scalar is
/// never re-added.
fn minimize_arguments(value: &Value, schema: &CanonicalSchema) -> Value {
    let Value::Seq(arguments) = value else {
        return value.clone();
    };
    let minimized = arguments
        .iter()
        .map(|item| match item {
            Value::Rec(argument) => {
                let mut out = filter_empty_containers(argument);
                backfill_record(
                    &mut out,
                    &schema.permitted_argument,
                    Backfill::SkipEmptyTextDefaults,
                );
                Value::Rec(out)
            }
            other => other.clone(),
        })
        .collect();
    Value::Seq(minimized)
}

/// Minimizes a sequence-of-records collection by filtering empty containers.
fn minimize_collection(value: &Value) -> Value {
    let Value::Seq(items) = value else {
        return value.clone();
    };
    let minimized = items
        .iter()
        .map(|item| match item {
            Value::Rec(record) => Value::Rec(filter_empty_containers(record)),
            other => other.clone(),
        })
        .collect();
    Value::Seq(minimized)
}

/// Minimizes the proxy record, always retaining the bypass sequence.
///
/// An empty bypass sequence stays in place because downstream consumers
/// expect the key itself; only items with empty sub-collections are filtered
/// elsewhere.
fn minimize_proxy(value: &Value) -> Value {
    let Value::Rec(proxy) = value else {
        return value.clone();
    };
    let mut out = Record::new();
    for (key, entry) in proxy.iter() {
        if key != keys::PROXY_EXCEPTIONS_LIST && is_empty_container(entry) {
            continue;
        }
        out.insert(key, entry.clone());
    }
    Value::Rec(out)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Copies a record, dropping keys whose values are empty containers.
fn filter_empty_containers(record: &Record) -> Record {
    let mut out = Record::new();
    for (key, value) in record.iter() {
        if is_empty_container(value) {
            continue;
        }
        out.insert(key, value.clone());
    }
    out
}

/// Returns true for structurally empty sequences and records.
fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Seq(items) => items.is_empty(),
        Value::Rec(record) => record.is_empty(),
        Value::Bool(_) | Value::Int(_) | Value::Text(_) | Value::Bytes(_) => false,
    }
}
