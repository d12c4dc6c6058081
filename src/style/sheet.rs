//! Selector-scoped collection of style rules.
//!
//! A [`StyleSheet`] aggregates named [`StyleRule`]s under selector strings
//! and serializes them as `selector { <rule text> };` lines. Selectors are
//! opaque here; the conventional forms are the bare class tag of an element,
//! or `tag#id` when the element carries a non-empty id (see
//! [`ElementData::selector`](crate::tree::element::ElementData::selector)).

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::style::rule::StyleRule;

/// An ordered `selector -> StyleRule` map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: IndexMap<String, StyleRule>,
}

impl StyleSheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Add or replace the rule for a selector (builder).
    ///
    /// Replacing keeps the selector's original position in the sheet.
    pub fn rule(mut self, selector: impl Into<String>, rule: StyleRule) -> Self {
        self.insert(selector, rule);
        self
    }

    /// Add or replace the rule for a selector.
    pub fn insert(&mut self, selector: impl Into<String>, rule: StyleRule) {
        self.rules.insert(selector.into(), rule);
    }

    /// The rule registered under a selector, if any.
    pub fn get(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.get(selector)
    }

    /// Remove the rule for a selector.
    ///
    /// Fails with [`Error::NotFound`] if the selector is absent. Remaining
    /// selectors keep their relative insertion order.
    pub fn remove(&mut self, selector: &str) -> Result<()> {
        self.rules
            .shift_remove(selector)
            .map(|_| ())
            .ok_or_else(|| Error::not_found("stylesheet", selector))
    }

    /// Serialize as `selector { <rule text> };` per entry, joined by
    /// newlines, in selector-insertion order.
    pub fn to_text(&self) -> String {
        self.rules
            .iter()
            .map(|(selector, rule)| format!("{selector} {{ {} }};", rule.to_text()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the sheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
