//! Confidence scoring
//!
//! A deterministic, explainable scalar in [0, 1] — keyword coverage for
//! the finally chosen intent plus fixed per-intent boosts. Not a
//! calibrated probability. The scorer applies no threshold; the caller
//! decides what to do with a low score.

use wagebot_config::KeywordsConfig;
use wagebot_core::states::is_state;
use wagebot_core::Intent;

/// Wage-context words shared by the age and current boosts.
const WAGE_CONTEXT: &[&str] = &["wage", "minimum", "pay"];

/// Age-context words for the age boost.
const AGE_CONTEXT: &[&str] = &[
    "child", "children", "kid", "kids", "minor", "teen", "teenager",
];

/// Age words whose presence disqualifies the current boost.
const AGE_EXCLUSION: &[&str] = &["child", "children", "kid", "minor", "teen"];

/// Keyword-coverage confidence scorer.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    keywords: KeywordsConfig,
}

impl ConfidenceScorer {
    pub fn new(keywords: KeywordsConfig) -> Self {
        Self { keywords }
    }

    /// Score an intent against the lemma sequence.
    ///
    /// Base: `matches / max(|keyword set|, 1)`, duplicate lemmas counted
    /// each time. Boosts are additive and applied after the base:
    /// - `age`: +0.30 when a wage word and an age word co-occur
    /// - `current`: +0.20 when "wage" appears with no age word
    /// - `compare`: +0.50 when two or more lemmas are state-name tokens
    ///
    /// Clamped to 1.0, rounded to 2 decimals. Intents without a keyword
    /// set score 0.00 before boosts.
    pub fn score(&self, intent: Intent, lemmas: &[String]) -> f64 {
        let set = self.keywords.keywords_for(intent);
        let matches = lemmas.iter().filter(|l| set.iter().any(|k| k == *l)).count();
        let mut confidence = matches as f64 / set.len().max(1) as f64;

        match intent {
            Intent::Age => {
                if contains_any(lemmas, WAGE_CONTEXT) && contains_any(lemmas, AGE_CONTEXT) {
                    confidence += 0.30;
                }
            }
            Intent::Current => {
                if lemmas.iter().any(|l| l == "wage") && !contains_any(lemmas, AGE_EXCLUSION) {
                    confidence += 0.20;
                }
            }
            Intent::Compare => {
                let state_tokens = lemmas.iter().filter(|l| is_state(l)).count();
                if state_tokens >= 2 {
                    confidence += 0.50;
                }
            }
            _ => {}
        }

        round2(confidence.min(1.0))
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(KeywordsConfig::default())
    }
}

fn contains_any(lemmas: &[String], words: &[&str]) -> bool {
    lemmas.iter().any(|l| words.contains(&l.as_str()))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmas(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn score(intent: Intent, words: &[&str]) -> f64 {
        ConfidenceScorer::default().score(intent, &lemmas(words))
    }

    #[test]
    fn test_base_coverage() {
        // history set has 7 keywords; two match -> 2/7 rounded
        assert_eq!(score(Intent::History, &["since", "year"]), 0.29);
        assert_eq!(score(Intent::Max, &["highest"]), 0.2);
    }

    #[test]
    fn test_duplicates_counted() {
        assert_eq!(score(Intent::Max, &["highest", "highest"]), 0.4);
    }

    #[test]
    fn test_unknown_scores_zero() {
        assert_eq!(score(Intent::Unknown, &["wage", "minimum"]), 0.0);
        assert_eq!(score(Intent::Unknown, &[]), 0.0);
    }

    #[test]
    fn test_extreme_tipped_have_no_keyword_set() {
        assert_eq!(score(Intent::MaxTipped, &["highest", "tip", "wage"]), 0.0);
        assert_eq!(score(Intent::MinTipped, &["lowest", "tip"]), 0.0);
    }

    #[test]
    fn test_age_boost() {
        let without = score(Intent::Age, &["minor"]);
        let with = score(Intent::Age, &["wage", "minor"]);
        assert_eq!(without, 0.1);
        assert_eq!(with, 0.4);
        // Boost law: adding wage context never lowers the age score.
        assert!(with >= without);
    }

    #[test]
    fn test_current_boost_requires_no_age_word() {
        assert_eq!(score(Intent::Current, &["wage"]), 0.45);
        // "minor" disqualifies the boost
        assert_eq!(score(Intent::Current, &["wage", "minor"]), 0.25);
    }

    #[test]
    fn test_compare_boost_needs_two_state_tokens() {
        assert_eq!(score(Intent::Compare, &["colorado", "utah"]), 0.5);
        assert_eq!(score(Intent::Compare, &["colorado"]), 0.0);
        // compare keyword plus two states
        assert_eq!(score(Intent::Compare, &["compare", "texas", "ohio"]), 0.83);
    }

    #[test]
    fn test_clamped_at_one() {
        // All ten age keywords plus the boost exceed 1.0 before the clamp.
        let all_age = [
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
            "wage",
        ];
        assert_eq!(score(Intent::Age, &all_age), 1.0);
    }

    #[test]
    fn test_rounded_to_two_decimals() {
        // 1/7 = 0.142857... -> 0.14
        assert_eq!(score(Intent::History, &["since"]), 0.14);
    }
}
