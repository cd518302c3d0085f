//! Entity annotations
//!
//! The shape produced by the lexical annotation capability: a recognized
//! span of text with a coarse semantic label. Only the two labels the
//! parser consumes are modeled.

use serde::{Deserialize, Serialize};

/// Semantic category of a recognized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    /// Geopolitical entity (candidate state name)
    Geopolitical,
    /// Date-like span (candidate year)
    Date,
}

/// A recognized span of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The matched text, as it appeared in the (lower-cased) input
    pub text: String,
    /// Semantic category
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}
