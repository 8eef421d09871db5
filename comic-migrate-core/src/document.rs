//! Catalog document access.
//!
//! The catalog is kept as a `serde_json::Value` so that fields the migrations
//! never touch (and their key order) survive a run unchanged. [`ComicRecord`]
//! is a typed view over one entry of the `items` map.

use serde_json::{Map, Value};

use crate::error::MigrateError;
use crate::rules::Weekday;

/// Top-level key holding the comic records.
pub const ITEMS: &str = "items";

const NAME: &str = "name";
const SOURCE: &str = "source";
const SOURCE_IDENTIFIER: &str = "sourceIdentifier";
const ACTIVE: &str = "active";
const PUBLICATION_DAYS: &str = "publicationDays";

/// Display name used when a record has no `name`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Borrow the `items` map of a catalog document.
pub fn catalog_items_mut(document: &mut Value) -> Result<&mut Map<String, Value>, MigrateError> {
    let items = document
        .as_object_mut()
        .and_then(|root| root.get_mut(ITEMS))
        .ok_or(MigrateError::MissingItems)?;
    items
        .as_object_mut()
        .ok_or_else(|| MigrateError::not_an_object("'items'"))
}

/// Mutable view over one comic record.
pub struct ComicRecord<'a> {
    fields: &'a mut Map<String, Value>,
}

impl<'a> ComicRecord<'a> {
    /// Wrap the record stored under `id`. Fails if it is not a JSON object.
    pub fn new(id: &str, value: &'a mut Value) -> Result<Self, MigrateError> {
        let fields = value
            .as_object_mut()
            .ok_or_else(|| MigrateError::not_an_object(format!("comic '{id}'")))?;
        Ok(Self { fields })
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn set_text(&mut self, key: &str, value: &str) {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    /// Display name, or [`UNKNOWN_NAME`] when absent.
    pub fn name(&self) -> &str {
        self.text(NAME).unwrap_or(UNKNOWN_NAME)
    }

    /// Current `source`, or `""` when absent or not a string.
    pub fn source(&self) -> &str {
        self.text(SOURCE).unwrap_or_default()
    }

    /// Current `sourceIdentifier`, or `""` when absent or not a string.
    pub fn source_identifier(&self) -> &str {
        self.text(SOURCE_IDENTIFIER).unwrap_or_default()
    }

    /// `key` holds a truthy value: not null, `false`, zero, `""`, `[]` or `{}`.
    fn is_present(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    /// Both `source` and `sourceIdentifier` hold a value, whatever its type.
    pub fn has_source_info(&self) -> bool {
        self.is_present(SOURCE) && self.is_present(SOURCE_IDENTIFIER)
    }

    pub fn set_source(&mut self, source: &str) {
        self.set_text(SOURCE, source);
    }

    pub fn set_source_identifier(&mut self, identifier: &str) {
        self.set_text(SOURCE_IDENTIFIER, identifier);
    }

    /// `active` is exactly `false`. Absent or any other value counts as active.
    pub fn is_inactive(&self) -> bool {
        matches!(self.fields.get(ACTIVE), Some(Value::Bool(false)))
    }

    pub fn deactivate(&mut self) {
        self.fields.insert(ACTIVE.to_string(), Value::Bool(false));
    }

    /// `publicationDays` is present and equal to `days`, in order.
    pub fn has_publication_days(&self, days: &[Weekday]) -> bool {
        match self.fields.get(PUBLICATION_DAYS).and_then(Value::as_array) {
            Some(current) => {
                current.len() == days.len()
                    && current
                        .iter()
                        .zip(days)
                        .all(|(have, want)| have.as_str() == Some(want.as_str()))
            }
            None => false,
        }
    }

    /// Replace `publicationDays` with `days`.
    pub fn set_publication_days(&mut self, days: &[Weekday]) {
        let list = days
            .iter()
            .map(|d| Value::String(d.as_str().to_string()))
            .collect();
        self.fields
            .insert(PUBLICATION_DAYS.to_string(), Value::Array(list));
    }
}

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
