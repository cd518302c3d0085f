//! Parsed question record
//!
//! The single immutable result of one parse call. A fresh record is built
//! for every incoming question and discarded after the query/response step
//! consumes it.

use serde::{Deserialize, Serialize};

use crate::Intent;

/// Result of parsing one question.
///
/// Invariants:
/// - `intent` is always set; `Intent::Unknown` when no rule matched.
/// - `states` entries are canonical Title-Case names from the 50-state set,
///   in detection order, duplicates preserved.
/// - `year` is in [1900, 2099] when present.
/// - `confidence` is in [0.0, 1.0], rounded to 2 decimals, and was computed
///   against the finally chosen `intent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    /// Classified intent
    pub intent: Intent,
    /// Recognized states, canonical display casing, detection order
    pub states: Vec<String>,
    /// Recognized year, if any
    pub year: Option<u16>,
    /// Heuristic keyword-coverage score for `intent`
    pub confidence: f64,
}

impl ParsedQuestion {
    pub fn new(intent: Intent, states: Vec<String>, year: Option<u16>, confidence: f64) -> Self {
        Self {
            intent,
            states,
            year,
            confidence,
        }
    }

    /// First detected state, the one single-state queries operate on.
    pub fn primary_state(&self) -> Option<&str> {
        self.states.first().map(String::as_str)
    }

    /// Whether the score falls below the caller-supplied advisory threshold.
    ///
    /// This is a signal, not a failure; the record is still usable.
    pub fn is_low_confidence(&self, threshold: f64) -> bool {
        self.confidence < threshold
    }
}
