//! Lexical annotation
//!
//! The parser consumes lemmas and entity spans through the
//! [`LexicalAnnotator`] trait; it does not care how they were produced.
//! [`RuleBasedAnnotator`] is the default implementation: a deterministic
//! tokenizer, a small suffix/exception lemmatizer tuned to the question
//! vocabulary, a US-state gazetteer and 4-digit date tagging. It is
//! deliberately not a general NER system.
//!
//! The annotator is built once and reused for every parse call
//! ([`RuleBasedAnnotator::shared`]); only construction can fail.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use wagebot_config::KeywordsConfig;
use wagebot_core::entity::{Entity, EntityLabel};
use wagebot_core::states::{is_state, US_STATES};

use crate::error::{NluError, Result};

/// Output of one annotation call: one lemma per token, in token order,
/// plus the recognized entity spans.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub lemmas: Vec<String>,
    pub entities: Vec<Entity>,
}

/// The lexical annotation capability.
///
/// Implementations must accept a lower-cased string and return per-token
/// lemmas and entity spans. Calls are infallible; an implementation that
/// cannot be built fails at construction time instead.
pub trait LexicalAnnotator: Send + Sync {
    fn tokenize_and_tag(&self, text: &str) -> Annotation;
}

/// Deterministic rule-based annotator.
pub struct RuleBasedAnnotator {
    /// Irregular forms the suffix rules get wrong
    exceptions: HashMap<&'static str, &'static str>,
    /// Base forms the lemmatizer is allowed to resolve to
    vocabulary: HashSet<String>,
    /// Exactly four ASCII digits
    digits: Regex,
}

/// Irregular lemma forms. The suffix rules below handle the regular ones.
const LEMMA_EXCEPTIONS: &[(&str, &str)] = &[
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("am", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("paid", "pay"),
    ("children", "child"),
    ("tipped", "tip"),
    ("tipping", "tip"),
];

/// Base forms beyond the keyword sets that the lemmatizer may resolve to.
const EXTRA_VOCABULARY: &[&str] = &[
    "state", "worker", "work", "need", "offer", "rate", "require", "earn", "raise",
];

impl RuleBasedAnnotator {
    pub fn new() -> Result<Self> {
        let digits = Regex::new(r"^\d{4}$")
            .map_err(|e| NluError::AnnotatorUnavailable(e.to_string()))?;

        let keywords = KeywordsConfig::default();
        let mut vocabulary: HashSet<String> = [
            &keywords.tipped,
            &keywords.history,
            &keywords.age,
            &keywords.current,
            &keywords.max,
            &keywords.min,
            &keywords.compare,
            &keywords.max_synonyms,
            &keywords.min_synonyms,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
        vocabulary.extend(EXTRA_VOCABULARY.iter().map(|w| w.to_string()));

        Ok(Self {
            exceptions: LEMMA_EXCEPTIONS.iter().copied().collect(),
            vocabulary,
            digits,
        })
    }

    /// Process-wide memoized instance. Built on first use, read-only
    /// afterwards; every caller shares the same annotator.
    pub fn shared() -> Result<Arc<Self>> {
        static SHARED: OnceCell<Arc<RuleBasedAnnotator>> = OnceCell::new();
        SHARED
            .get_or_try_init(|| Self::new().map(Arc::new))
            .map(Arc::clone)
    }

    /// Lemmatize one lower-cased token.
    ///
    /// Exception table first, then suffix rules. Candidate stems are only
    /// preferred when they land in the known vocabulary, so the rules stay
    /// conservative on words they were not tuned for.
    fn lemmatize(&self, token: &str) -> String {
        if let Some(lemma) = self.exceptions.get(token) {
            return (*lemma).to_string();
        }
        // State names pass through untouched ("texas" must not lose its s).
        if is_state(token) {
            return token.to_string();
        }
        if self.vocabulary.contains(token) {
            return token.to_string();
        }
        // Suffix rules slice by byte offset; skip them for non-ASCII tokens.
        if !token.is_ascii() {
            return token.to_string();
        }

        let chars: Vec<char> = token.chars().collect();
        let n = chars.len();

        if token.ends_with("ies") && n > 4 {
            return format!("{}y", &token[..token.len() - 3]);
        }

        if token.ends_with("ed") && n > 3 {
            let minus_d = &token[..token.len() - 1];
            let minus_ed = &token[..token.len() - 2];
            if self.vocabulary.contains(minus_d) {
                return minus_d.to_string();
            }
            if self.vocabulary.contains(minus_ed) {
                return minus_ed.to_string();
            }
            if n > 4 && chars[n - 3] == chars[n - 4] {
                let undoubled = &token[..token.len() - 3];
                if self.vocabulary.contains(undoubled) {
                    return undoubled.to_string();
                }
            }
            return minus_ed.to_string();
        }

        if token.ends_with("ing") && n > 5 {
            let stem = &token[..token.len() - 3];
            if self.vocabulary.contains(stem) {
                return stem.to_string();
            }
            let with_e = format!("{}e", stem);
            if self.vocabulary.contains(&with_e) {
                return with_e;
            }
            if chars[n - 4] == chars[n - 5] {
                let undoubled = &token[..token.len() - 4];
                if self.vocabulary.contains(undoubled) {
                    return undoubled.to_string();
                }
            }
            return stem.to_string();
        }

        if token.ends_with('s')
            && n > 3
            && !token.ends_with("ss")
            && !token.ends_with("us")
            && !token.ends_with("is")
        {
            let minus_s = &token[..token.len() - 1];
            let minus_es = &token[..token.len().saturating_sub(2)];
            if self.vocabulary.contains(minus_s) {
                return minus_s.to_string();
            }
            if token.ends_with("es") && self.vocabulary.contains(minus_es) {
                return minus_es.to_string();
            }
            return minus_s.to_string();
        }

        token.to_string()
    }

    /// Tag state names (including two-word states) and 4-digit date spans.
    fn tag_entities(&self, tokens: &[&str]) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if i + 1 < tokens.len() {
                let bigram = format!("{} {}", tokens[i], tokens[i + 1]);
                if US_STATES.contains(&bigram.as_str()) {
                    entities.push(Entity::new(bigram, EntityLabel::Geopolitical));
                    i += 2;
                    continue;
                }
            }
            if US_STATES.contains(&tokens[i]) {
                entities.push(Entity::new(tokens[i], EntityLabel::Geopolitical));
            } else if self.digits.is_match(tokens[i]) {
                entities.push(Entity::new(tokens[i], EntityLabel::Date));
            }
            i += 1;
        }
        entities
    }
}

impl LexicalAnnotator for RuleBasedAnnotator {
    fn tokenize_and_tag(&self, text: &str) -> Annotation {
        let tokens: Vec<&str> = text.unicode_words().collect();
        let lemmas = tokens.iter().map(|t| self.lemmatize(t)).collect();
        let entities = self.tag_entities(&tokens);
        Annotation { lemmas, entities }
    }
}
