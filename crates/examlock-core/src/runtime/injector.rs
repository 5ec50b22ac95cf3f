// examlock-core/src/runtime/injector.rs
// ============================================================================
// Module: ExamLock Default Record Injector
// Description: Seeds baseline prohibited process entries without duplicates.
// Purpose: Guarantee the prohibited list carries the curated baseline.
// Dependencies: crate::core::{keys, schema, value}
// ============================================================================

//! ## Overview
//! Every full reconciliation is followed by injection so the prohibited
//! process collection carries the curated baseline regardless of document
//! provenance. The strict list of remote-control tools is injected always;
//! the common-browser list only when the session kills the OS shell.
//! Matching against existing entries is fuzzy: extension-stripped and
//! case-insensitive over both the executable and original-name fields, and
//! only entries tagged for Windows block insertion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::keys;
use crate::core::schema;
use crate::core::schema::CanonicalSchema;
use crate::core::value::Document;
use crate::core::value::Record;
use crate::core::value::Value;

// ============================================================================
// SECTION: Injection
// ============================================================================

/// Injects the baseline prohibited process records into a document.
///
/// The strict list is always applied; the shell-kill list only when the
/// document's kill-explorer-shell flag is set. Existing matches are never
/// duplicated, so the operation is idempotent.
pub fn inject_defaults(document: &mut Document, schema: &CanonicalSchema) {
    let shell_kill = document.get_bool(keys::KILL_EXPLORER_SHELL).unwrap_or(false);
    let Some(Value::Seq(entries)) = document.get_mut(keys::PROHIBITED_PROCESSES) else {
        return;
    };
    inject_names(entries, schema::STRICT_PROHIBITED, schema);
    if shell_kill {
        inject_names(entries, schema::SHELL_KILL_PROHIBITED, schema);
    }
}

/// Injects one curated name list into the prohibited process collection.
fn inject_names(entries: &mut Vec<Value>, names: &[&str], schema: &CanonicalSchema) {
    for name in names {
        let candidate = strip_extension(name);
        if entries.iter().any(|entry| matches_candidate(entry, candidate)) {
            continue;
        }
        entries.insert(0, Value::Rec(baseline_record(name, schema)));
    }
}

/// Returns true when an existing entry blocks insertion of a candidate.
///
/// An entry matches when its executable or original name, extension-stripped,
/// equals the candidate case-insensitively and the entry is tagged for
/// Windows. Entries for other platforms never block insertion.
fn matches_candidate(entry: &Value, candidate: &str) -> bool {
    let Value::Rec(record) = entry else {
        return false;
    };
    if record.get_int(keys::PROCESS_OS) != Some(schema::OS_WINDOWS) {
        return false;
    }
    [keys::PROCESS_EXECUTABLE, keys::PROCESS_ORIGINAL_NAME].iter().any(|field| {
        record
            .get_text(field)
            .is_some_and(|name| strip_extension(name).eq_ignore_ascii_case(candidate))
    })
}

/// Builds a baseline prohibited process record for a candidate name.
fn baseline_record(name: &str, schema: &CanonicalSchema) -> Record {
    let mut record = schema.prohibited_process.clone();
    record.insert(keys::PROCESS_EXECUTABLE, Value::text(name));
    record.insert(keys::PROCESS_ORIGINAL_NAME, Value::text(name));
    record
}

/// Strips the final extension from an executable name.
fn strip_extension(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

// ============================================================================
// SECTION: Shell-Kill Queries
// ============================================================================

/// Mode for the shell-kill entry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Report whether any shell-kill baseline entry exists.
    Report,
    /// Remove all shell-kill baseline entries.
    Remove,
}

/// Checks for, or removes, shell-kill baseline entries in a document.
///
/// Unlike injection, the comparison is exact: full executable and original
/// names, case-sensitively. Returns true when any entry matched.
pub fn check_shell_kill_entries(
    document: &mut Document,
    mode: CheckMode,
) -> bool {
    let Some(Value::Seq(entries)) = document.get_mut(keys::PROHIBITED_PROCESSES) else {
        return false;
    };
    let matched = entries.iter().any(is_shell_kill_entry);
    if mode == CheckMode::Remove {
        entries.retain(|entry| !is_shell_kill_entry(entry));
    }
    matched
}

/// Returns true when an entry names one of the shell-kill executables exactly.
fn is_shell_kill_entry(entry: &Value) -> bool {
    let Value::Rec(record) = entry else {
        return false;
    };
    if record.get_int(keys::PROCESS_OS) != Some(schema::OS_WINDOWS) {
        return false;
    }
    schema::SHELL_KILL_PROHIBITED.iter().copied().any(|name| {
        record.get_text(keys::PROCESS_EXECUTABLE) == Some(name)
            || record.get_text(keys::PROCESS_ORIGINAL_NAME) == Some(name)
    })
}
