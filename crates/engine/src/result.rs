//! Structured query results

use serde::{Deserialize, Serialize};

/// One state's value in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareEntry {
    pub state: String,
    pub value: f64,
}

/// Payload of one query operation. Each variant carries exactly what its
/// response template needs; cells that failed numeric parsing never get
/// this far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryResult {
    /// Current rate for one state
    CurrentRate {
        state: String,
        rate_text: String,
        note: Option<String>,
    },
    /// Historical rate for one state and year
    HistoryPoint {
        state: String,
        year: u16,
        rate: String,
    },
    /// Full per-year series for one state
    HistorySeries {
        state: String,
        series: Vec<(String, String)>,
    },
    /// Tipped-worker rate for one state
    TippedRate { state: String, rate: String },
    /// Minor labor-certificate provision for one state
    AgeProvision { state: String, provision: String },
    /// Single state holding the highest basic rate
    Highest { state: String, rate_text: String },
    /// All states tied at the lowest basic rate
    LowestTies { value: f64, states: Vec<String> },
    /// Jurisdiction with the highest or lowest tipped rate
    TippedExtreme {
        state: String,
        rate: String,
        highest: bool,
    },
    /// Side-by-side values for the requested states
    Comparison { entries: Vec<CompareEntry> },
}
