// examlock-core/src/runtime/store.rs
// ============================================================================
// Module: ExamLock Settings Store
// Description: Holds the current, default, and loaded settings documents.
// Purpose: Provide explicit session state instead of mutable singletons.
// Dependencies: crate::core::{keys, schema, value}, crate::runtime::injector
// ============================================================================

//! ## Overview
//! An editing session owns three documents: `current` (the only one edits
//! mutate), `default` (never mutated after construction), and `original`
//! (the snapshot of what was loaded, kept for revert). All three are
//! (re)created together on load, reset, or restore-to-defaults. The store is
//! a plain value passed to and returned from operations; nothing here is
//! shared or locked.
//!
//! The side table carries a handful of scalar values the schema does not
//! model directly. They are consumed only by the UI collaborator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::keys;
use crate::core::schema::CanonicalSchema;
use crate::core::value::Document;
use crate::runtime::injector::inject_defaults;

// ============================================================================
// SECTION: Side Table
// ============================================================================

/// Scalar side values consumed by the UI collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideTable {
    /// Main window width selection as pixels or percent string.
    pub main_window_width: String,
    /// Main window height selection as pixels or percent string.
    pub main_window_height: String,
    /// Additional window width selection as pixels or percent string.
    pub new_window_width: String,
    /// Additional window height selection as pixels or percent string.
    pub new_window_height: String,
    /// Selected certificate identity index, when any.
    pub certificate_identity: Option<usize>,
}

impl SideTable {
    /// Builds the side table from a document's window settings.
    #[must_use]
    fn from_document(document: &Document) -> Self {
        Self {
            main_window_width: text_or_empty(document, keys::MAIN_BROWSER_WINDOW_WIDTH),
            main_window_height: text_or_empty(document, keys::MAIN_BROWSER_WINDOW_HEIGHT),
            new_window_width: text_or_empty(document, keys::NEW_BROWSER_WINDOW_BY_LINK_WIDTH),
            new_window_height: text_or_empty(document, keys::NEW_BROWSER_WINDOW_BY_LINK_HEIGHT),
            certificate_identity: None,
        }
    }
}

/// Returns a document's text value for a key, or the empty string.
fn text_or_empty(document: &Document, key: &str) -> String {
    document.get_text(key).unwrap_or_default().to_string()
}

// ============================================================================
// SECTION: Settings Store
// ============================================================================

/// Session-scoped settings state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    /// Document mutated by interactive edits.
    current: Document,
    /// Baseline document; never mutated after construction.
    default: Document,
    /// Snapshot of the loaded document, kept for revert.
    original: Document,
    /// Scalar side values for the UI collaborator.
    side: SideTable,
}

impl SettingsStore {
    /// Creates a store populated from the canonical schema defaults.
    #[must_use]
    pub fn from_defaults(schema: &CanonicalSchema) -> Self {
        let baseline = baseline_document(schema);
        let side = SideTable::from_document(&baseline);
        Self {
            current: baseline.clone(),
            default: baseline.clone(),
            original: baseline,
            side,
        }
    }

    /// Installs a reconciled document as the session state.
    ///
    /// The document is expected to have been reconciled and injected by the
    /// persistence facade. All three documents are recreated together.
    pub fn adopt(&mut self, document: Document, schema: &CanonicalSchema) {
        self.side = SideTable::from_document(&document);
        self.original = document.clone();
        self.current = document;
        self.default = baseline_document(schema);
    }

    /// Resets all three documents to the canonical schema defaults.
    pub fn reset_to_defaults(&mut self, schema: &CanonicalSchema) {
        *self = Self::from_defaults(schema);
    }

    /// Restores `current` from the loaded snapshot.
    pub fn revert_to_original(&mut self) {
        self.current = self.original.clone();
        self.side = SideTable::from_document(&self.current);
    }

    /// Returns the document interactive edits operate on.
    #[must_use]
    pub const fn current(&self) -> &Document {
        &self.current
    }

    /// Returns a mutable reference to the editable document.
    pub const fn current_mut(&mut self) -> &mut Document {
        &mut self.current
    }

    /// Returns the baseline default document.
    #[must_use]
    pub const fn default_document(&self) -> &Document {
        &self.default
    }

    /// Returns the snapshot of the loaded document.
    #[must_use]
    pub const fn original(&self) -> &Document {
        &self.original
    }

    /// Returns the UI side table.
    #[must_use]
    pub const fn side(&self) -> &SideTable {
        &self.side
    }

    /// Returns a mutable reference to the UI side table.
    pub const fn side_mut(&mut self) -> &mut SideTable {
        &mut self.side
    }
}

/// Builds the baseline document: schema defaults plus injected records.
fn baseline_document(schema: &CanonicalSchema) -> Document {
    let mut document = schema.defaults.clone();
    inject_defaults(&mut document, schema);
    document
}
