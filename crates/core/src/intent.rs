//! Question intents
//!
//! The classifier maps every question to exactly one of these labels. The
//! serde names double as the dispatch keys used by the query layer.

use serde::{Deserialize, Serialize};

/// The classified purpose of a question.
///
/// `Unknown` is a valid, representable outcome (no rule matched), not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Current minimum wage for a state
    Current,
    /// Historical rates, optionally for a specific year
    History,
    /// Tipped-worker minimum wage
    Tipped,
    /// Minor labor-certificate provisions
    Age,
    /// State with the highest minimum wage
    Max,
    /// State(s) with the lowest minimum wage
    Min,
    /// Highest tipped minimum wage
    MaxTipped,
    /// Lowest tipped minimum wage
    MinTipped,
    /// Side-by-side comparison of two or more states
    Compare,
    /// No rule matched
    Unknown,
}

impl Intent {
    /// All intents, in declaration order.
    pub const ALL: [Intent; 10] = [
        Intent::Current,
        Intent::History,
        Intent::Tipped,
        Intent::Age,
        Intent::Max,
        Intent::Min,
        Intent::MaxTipped,
        Intent::MinTipped,
        Intent::Compare,
        Intent::Unknown,
    ];

    /// Stable string label, identical to the serde name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Current => "current",
            Intent::History => "history",
            Intent::Tipped => "tipped",
            Intent::Age => "age",
            Intent::Max => "max",
            Intent::Min => "min",
            Intent::MaxTipped => "max_tipped",
            Intent::MinTipped => "min_tipped",
            Intent::Compare => "compare",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
