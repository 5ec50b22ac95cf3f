// examlock-core/src/core/value.rs
// ============================================================================
// Module: ExamLock Settings Value Model
// Description: Recursive value tree for exam kiosk settings documents.
// Purpose: Provide a closed tagged union with exhaustive matching for passes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Settings documents are deeply nested, dynamically typed trees: keyed
//! records of scalars, sequences, and further records. The [`Value`] union is
//! closed so every reconciliation and minimization site matches exhaustively.
//! [`Record`] preserves key insertion order because saved files are diffed by
//! operators and fixtures compare structurally.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde::de;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

// ============================================================================
// SECTION: Value Union
// ============================================================================

/// A settings document rooted at the top-level record.
pub type Document = Record;

/// Dynamically typed settings value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Text scalar.
    Text(String),
    /// Raw byte sequence scalar.
    Bytes(Vec<u8>),
    /// Ordered sequence of values. Order is significant; duplicates allowed.
    Seq(Vec<Value>),
    /// Keyed record of values.
    Rec(Record),
}

impl Value {
    /// Creates a text value from anything convertible to a string.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns the runtime kind discriminant for schema comparison.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Seq(_) => ValueKind::Seq,
            Self::Rec(_) => ValueKind::Rec,
        }
    }
}

/// Runtime kind discriminant for [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Boolean scalar.
    Bool,
    /// Integer scalar.
    Int,
    /// Text scalar.
    Text,
    /// Raw byte sequence scalar.
    Bytes,
    /// Ordered sequence.
    Seq,
    /// Keyed record.
    Rec,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Seq => "sequence",
            Self::Rec => "record",
        };
        f.write_str(label)
    }
}

// ============================================================================
// SECTION: Record
// ============================================================================

/// Keyed map of settings values with unique keys and stable insertion order.
///
/// Insertion order is preserved for serialization and diffing, but equality
/// is key-based: two records with the same key/value pairs compare equal
/// regardless of order.
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Key/value pairs in insertion order.
    entries: Vec<(String, Value)>,
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for Record {}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true when the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value for a key, if present.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.iter_mut().find(|(existing, _)| existing == key).map(|(_, value)| value)
    }

    /// Inserts a value for a key.
    ///
    /// Replacing an existing key keeps its position; a new key is appended.
    /// Returns the previous value when the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Removes a key and returns its value when present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the boolean value for a key, if present with that kind.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(Value::Bool(flag)) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer value for a key, if present with that kind.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Some(Value::Int(number)) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text value for a key, if present with that kind.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Value::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the sequence value for a key, if present with that kind.
    #[must_use]
    pub fn get_seq(&self, key: &str) -> Option<&[Value]> {
        match self.get(key) {
            Some(Value::Seq(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the nested record for a key, if present with that kind.
    #[must_use]
    pub fn get_rec(&self, key: &str) -> Option<&Record> {
        match self.get(key) {
            Some(Value::Rec(record)) => Some(record),
            _ => None,
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = RecordIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RecordIter {
            inner: self.entries.iter(),
        }
    }
}

/// Borrowing iterator over record entries in insertion order.
pub struct RecordIter<'a> {
    /// Underlying entry iterator.
    inner: std::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = (&'a String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }
}

// ============================================================================
// SECTION: Record Serde
// ============================================================================

impl Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Map visitor that rejects duplicate keys.
struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a settings record keyed by strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
        let mut record = Record::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            if record.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate record key: {key}")));
            }
            record.insert(key, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}
