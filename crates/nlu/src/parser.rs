//! Question parsing pipeline
//!
//! raw text -> lexical annotation -> entity mapping -> intent cascade ->
//! confidence score -> [`ParsedQuestion`]. One fresh record per call; the
//! parser holds no per-question state.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use wagebot_config::KeywordsConfig;
use wagebot_core::entity::{Entity, EntityLabel};
use wagebot_core::states::canonical_state;
use wagebot_core::ParsedQuestion;

use crate::annotate::{LexicalAnnotator, RuleBasedAnnotator};
use crate::classifier::{ClassifierInput, IntentClassifier};
use crate::confidence::ConfidenceScorer;
use crate::error::Result;

/// Exactly four digits starting 19 or 20.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(19|20)\d{2}$").unwrap());

/// The question parser. Construct once, reuse for every question.
pub struct QuestionParser {
    annotator: Arc<dyn LexicalAnnotator>,
    classifier: IntentClassifier,
    scorer: ConfidenceScorer,
}

impl QuestionParser {
    /// Build a parser around an injected annotation capability.
    pub fn new(annotator: Arc<dyn LexicalAnnotator>, keywords: KeywordsConfig) -> Self {
        Self {
            annotator,
            classifier: IntentClassifier::new(keywords.clone()),
            scorer: ConfidenceScorer::new(keywords),
        }
    }

    /// Parser with the shared rule-based annotator and the canonical
    /// keyword sets. Fails only if the annotator cannot be built.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(RuleBasedAnnotator::shared()?, KeywordsConfig::default()))
    }

    /// Parse one question. Pure aside from logging; never panics, any
    /// input yields a record (`Unknown` / empty when nothing is found).
    pub fn parse(&self, question: &str) -> ParsedQuestion {
        let text = question.to_lowercase();
        let annotation = self.annotator.tokenize_and_tag(&text);

        let (states, year) = map_entities(&annotation.entities);

        let intent = self.classifier.classify(&ClassifierInput {
            lemmas: &annotation.lemmas,
            text: &text,
            states: &states,
            year,
        });
        let confidence = self.scorer.score(intent, &annotation.lemmas);

        tracing::debug!(
            intent = %intent,
            states = ?states,
            year = ?year,
            confidence,
            "parsed question"
        );

        ParsedQuestion::new(intent, states, year, confidence)
    }
}

/// Map raw entity spans onto the record fields.
///
/// Geopolitical spans are kept only on an exact state-name match and
/// canonicalized to Title-Case, detection order preserved, duplicates kept.
/// The first valid 4-digit date span wins the single year slot; malformed
/// spans are dropped silently.
fn map_entities(entities: &[Entity]) -> (Vec<String>, Option<u16>) {
    let mut states = Vec::new();
    let mut year = None;

    for entity in entities {
        match entity.label {
            EntityLabel::Geopolitical => {
                if let Some(canonical) = canonical_state(&entity.text) {
                    states.push(canonical);
                }
            }
            EntityLabel::Date => {
                if year.is_none() && YEAR_RE.is_match(entity.text.trim()) {
                    year = entity.text.trim().parse::<u16>().ok();
                }
            }
        }
    }

    (states, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wagebot_core::Intent;

    /// Deterministic stub annotator: whitespace tokens as lemmas, entities
    /// scripted by the test.
    struct StubAnnotator {
        entities: Vec<Entity>,
    }

    impl LexicalAnnotator for StubAnnotator {
        fn tokenize_and_tag(&self, text: &str) -> crate::Annotation {
            crate::Annotation {
                lemmas: text.split_whitespace().map(|t| t.to_string()).collect(),
                entities: self.entities.clone(),
            }
        }
    }

    fn parser_with_entities(entities: Vec<Entity>) -> QuestionParser {
        QuestionParser::new(
            Arc::new(StubAnnotator { entities }),
            KeywordsConfig::default(),
        )
    }

    #[test]
    fn test_geopolitical_entity_must_be_a_state() {
        let parser = parser_with_entities(vec![
            Entity::new("florida", EntityLabel::Geopolitical),
            Entity::new("springfield", EntityLabel::Geopolitical),
        ]);
        let parsed = parser.parse("wage");
        assert_eq!(parsed.states, vec!["Florida"]);
    }

    #[test]
    fn test_duplicate_states_preserved_in_order() {
        let parser = parser_with_entities(vec![
            Entity::new("utah", EntityLabel::Geopolitical),
            Entity::new("texas", EntityLabel::Geopolitical),
            Entity::new("utah", EntityLabel::Geopolitical),
        ]);
        let parsed = parser.parse("wage");
        assert_eq!(parsed.states, vec!["Utah", "Texas", "Utah"]);
    }

    #[test]
    fn test_first_valid_year_wins() {
        let parser = parser_with_entities(vec![
            Entity::new("3000", EntityLabel::Date),
            Entity::new("2005", EntityLabel::Date),
            Entity::new("2010", EntityLabel::Date),
        ]);
        let parsed = parser.parse("wage");
        assert_eq!(parsed.year, Some(2005));
    }

    #[test]
    fn test_malformed_dates_dropped() {
        let parser = parser_with_entities(vec![
            Entity::new("95", EntityLabel::Date),
            Entity::new("18005", EntityLabel::Date),
            Entity::new("1850", EntityLabel::Date),
        ]);
        let parsed = parser.parse("wage");
        assert_eq!(parsed.year, None);
    }

    #[test]
    fn test_year_forces_history_intent() {
        let parser = parser_with_entities(vec![Entity::new("2005", EntityLabel::Date)]);
        let parsed = parser.parse("wage in 2005");
        assert_eq!(parsed.intent, Intent::History);
    }

    #[test]
    fn test_empty_question() {
        let parser = parser_with_entities(vec![]);
        let parsed = parser.parse("");
        assert_eq!(parsed.intent, Intent::Unknown);
        assert_eq!(parsed.confidence, 0.0);
        assert!(parsed.states.is_empty());
        assert_eq!(parsed.year, None);
    }

    #[test]
    fn test_confidence_scored_against_final_intent() {
        // Both utah and texas present: the compare rule wins over current
        // even though "wage" appears, and the score is compare's.
        let parser = parser_with_entities(vec![
            Entity::new("utah", EntityLabel::Geopolitical),
            Entity::new("texas", EntityLabel::Geopolitical),
        ]);
        let parsed = parser.parse("wage utah texas");
        assert_eq!(parsed.intent, Intent::Compare);
        // no compare keyword lemma; boost from two state tokens
        assert_eq!(parsed.confidence, 0.5);
    }
}
