//! Keyword-set configuration
//!
//! The intent classifier and confidence scorer both match lemmas against
//! per-intent keyword sets. The sets are config-driven so a deployment can
//! extend them (e.g. regional vocabulary) without a code change; the serde
//! defaults are the canonical sets.
//!
//! Two extra lists back the raw-text extreme fallback: a question like
//! "which state pays the most" carries no `max` keyword lemma, but "most"
//! in the raw text still marks it as an extreme query. Those synonym lists
//! are matched against raw text, not lemmas, and are not part of the
//! confidence denominator.

use serde::{Deserialize, Serialize};
use std::path::Path;

use wagebot_core::Intent;

use crate::ConfigError;

/// Keyword sets loaded from keywords.yaml (all fields optional).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Tipped-worker vocabulary
    #[serde(default = "default_tipped")]
    pub tipped: Vec<String>,
    /// Historical-rate vocabulary
    #[serde(default = "default_history")]
    pub history: Vec<String>,
    /// Minor/labor-certificate vocabulary
    #[serde(default = "default_age")]
    pub age: Vec<String>,
    /// Current-rate vocabulary
    #[serde(default = "default_current")]
    pub current: Vec<String>,
    /// Highest-rate vocabulary (lemma form)
    #[serde(default = "default_max")]
    pub max: Vec<String>,
    /// Lowest-rate vocabulary (lemma form)
    #[serde(default = "default_min")]
    pub min: Vec<String>,
    /// Comparison vocabulary
    #[serde(default = "default_compare")]
    pub compare: Vec<String>,
    /// Raw-text synonyms that mark an unqualified "highest" question
    #[serde(default = "default_max_synonyms")]
    pub max_synonyms: Vec<String>,
    /// Raw-text synonyms that mark an unqualified "lowest" question
    #[serde(default = "default_min_synonyms")]
    pub min_synonyms: Vec<String>,
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_tipped() -> Vec<String> {
    to_strings(&[
        "tip",
        "tipped",
        "gratuity",
        "server",
        "waiter",
        "waitress",
        "bartender",
    ])
}

fn default_history() -> Vec<String> {
    to_strings(&[
        "since",
        "year",
        "change",
        "history",
        "evolve",
        "past",
        "historical",
    ])
}

fn default_age() -> Vec<String> {
    to_strings(&[
        "minor",
        "certificate",
        "age",
        "child",
        "children",
        "kid",
        "kids",
        "teen",
        "teenager",
        "youth",
    ])
}

fn default_current() -> Vec<String> {
    to_strings(&["wage", "minimum", "pay", "current"])
}

fn default_max() -> Vec<String> {
    to_strings(&["highest", "max", "biggest", "largest", "top"])
}

fn default_min() -> Vec<String> {
    to_strings(&["lowest", "min", "smallest", "least", "bottom"])
}

fn default_compare() -> Vec<String> {
    to_strings(&["compare", "vs", "versus"])
}

fn default_max_synonyms() -> Vec<String> {
    to_strings(&["highest", "most", "greatest", "largest", "top", "max"])
}

fn default_min_synonyms() -> Vec<String> {
    to_strings(&["lowest", "least", "smallest", "bottom", "low", "min"])
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            tipped: default_tipped(),
            history: default_history(),
            age: default_age(),
            current: default_current(),
            max: default_max(),
            min: default_min(),
            compare: default_compare(),
            max_synonyms: default_max_synonyms(),
            min_synonyms: default_min_synonyms(),
        }
    }
}

impl KeywordsConfig {
    /// Load from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(format!("{}: {}", path.as_ref().display(), e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// The keyword set the confidence score is computed against.
    ///
    /// `MaxTipped`, `MinTipped` and `Unknown` have no set of their own; the
    /// scorer treats the empty slice as a denominator of 1, so those intents
    /// score 0.00.
    pub fn keywords_for(&self, intent: Intent) -> &[String] {
        match intent {
            Intent::Current => &self.current,
            Intent::History => &self.history,
            Intent::Tipped => &self.tipped,
            Intent::Age => &self.age,
            Intent::Max => &self.max,
            Intent::Min => &self.min,
            Intent::Compare => &self.compare,
            Intent::MaxTipped | Intent::MinTipped | Intent::Unknown => &[],
        }
    }

    /// Whether any lemma is a member of the given keyword set.
    pub fn any_in(set: &[String], lemmas: &[String]) -> bool {
        lemmas.iter().any(|l| set.iter().any(|k| k == l))
    }
}
