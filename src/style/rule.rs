//! Ordered property map serialized to style text.
//!
//! A [`StyleRule`] is the unit of styling: property names mapped to value
//! strings, serialized as `property:value;` lines. Property and value strings
//! are opaque — no validation against the host toolkit's grammar happens
//! here. Serialization is pure and order-stable: first-insert order is
//! preserved across overwrites, so identical property state always produces
//! byte-identical text.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// An ordered `property -> value` map with builder-style setters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRule {
    properties: IndexMap<String, String>,
}

impl StyleRule {
    /// Create an empty rule.
    pub fn new() -> Self {
        Self {
            properties: IndexMap::new(),
        }
    }

    /// Insert or overwrite a property (builder).
    ///
    /// Overwriting an existing property keeps its original position; any
    /// string pair is accepted.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    /// The value of a property, if present.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Produce a fresh rule equal to `self` with every property of `other`
    /// overlaid. `other` wins on conflicts; neither operand is mutated.
    pub fn merge(&self, other: &StyleRule) -> StyleRule {
        let mut merged = self.clone();
        merged.update(other);
        merged
    }

    /// Overlay every property of `other` onto `self` in place, with the same
    /// override semantics as [`merge`](Self::merge).
    pub fn update(&mut self, other: &StyleRule) {
        for (property, value) in &other.properties {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    /// Remove a property.
    ///
    /// Fails with [`Error::NotFound`] if the property is absent. Remaining
    /// entries keep their relative insertion order.
    pub fn remove(&mut self, property: &str) -> Result<()> {
        self.properties
            .shift_remove(property)
            .map(|_| ())
            .ok_or_else(|| Error::not_found("style rule", property))
    }

    /// Serialize as `property:value;` per entry, joined by newlines, in
    /// current insertion order.
    pub fn to_text(&self) -> String {
        self.properties
            .iter()
            .map(|(property, value)| format!("{property}:{value};"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the rule has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
