//! Intent classification
//!
//! A priority-ordered rule cascade: rules are evaluated top to bottom and
//! the first match wins; later rules are never consulted. The order is a
//! first-class table ([`IntentClassifier::rule_order`]) so the priority is
//! itself testable.
//!
//! Priority, highest first:
//! 1. tipped-qualified extremes (tipped + max/min lemma, or tipped alone)
//! 2. comparison (compare lemma, "vs"/"versus" in raw text, or >= 2 states)
//! 3. age/minor provisions (wins over any co-occurring wage word)
//! 4. historical (history lemma or an extracted year)
//! 5. unqualified extremes (raw-text max/min synonyms)
//! 6. current ("current" vocabulary or a "how much" interrogative)
//! 7. unknown

use wagebot_config::KeywordsConfig;
use wagebot_core::Intent;

/// Evidence one classification call runs on. Borrowed from the parse-local
/// lexical context; nothing here outlives the call.
#[derive(Debug)]
pub struct ClassifierInput<'a> {
    /// Lower-cased lemmas, token order
    pub lemmas: &'a [String],
    /// Raw lower-cased question text
    pub text: &'a str,
    /// Canonicalized states, detection order
    pub states: &'a [String],
    /// Extracted year, if any
    pub year: Option<u16>,
}

type RuleFn = fn(&KeywordsConfig, &ClassifierInput) -> Option<Intent>;

/// The cascade. Order is the priority; first Some wins.
const CASCADE: &[(&str, RuleFn)] = &[
    ("tipped_qualified", rule_tipped_family),
    ("comparison", rule_comparison),
    ("age", rule_age),
    ("historical", rule_historical),
    ("extreme", rule_extreme),
    ("current", rule_current),
];

/// Rule-cascade intent classifier.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    keywords: KeywordsConfig,
}

impl IntentClassifier {
    pub fn new(keywords: KeywordsConfig) -> Self {
        Self { keywords }
    }

    /// Classify one question. Total: every input maps to exactly one
    /// intent, `Unknown` when nothing matches.
    pub fn classify(&self, input: &ClassifierInput) -> Intent {
        for (name, rule) in CASCADE {
            if let Some(intent) = rule(&self.keywords, input) {
                tracing::debug!(rule = name, intent = %intent, "intent rule matched");
                return intent;
            }
        }
        tracing::debug!("no intent rule matched");
        Intent::Unknown
    }

    /// Rule names in evaluation order.
    pub fn rule_order() -> Vec<&'static str> {
        CASCADE.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(KeywordsConfig::default())
    }
}

fn rule_tipped_family(keywords: &KeywordsConfig, input: &ClassifierInput) -> Option<Intent> {
    if !KeywordsConfig::any_in(&keywords.tipped, input.lemmas) {
        return None;
    }
    if KeywordsConfig::any_in(&keywords.max, input.lemmas) {
        Some(Intent::MaxTipped)
    } else if KeywordsConfig::any_in(&keywords.min, input.lemmas) {
        Some(Intent::MinTipped)
    } else {
        Some(Intent::Tipped)
    }
}

fn rule_comparison(keywords: &KeywordsConfig, input: &ClassifierInput) -> Option<Intent> {
    if KeywordsConfig::any_in(&keywords.compare, input.lemmas)
        || input.text.contains("vs")
        || input.text.contains("versus")
        || input.states.len() >= 2
    {
        Some(Intent::Compare)
    } else {
        None
    }
}

fn rule_age(keywords: &KeywordsConfig, input: &ClassifierInput) -> Option<Intent> {
    // Unconditional: a co-occurring wage word does not demote age questions,
    // the certificate dataset is the more specific answer.
    if KeywordsConfig::any_in(&keywords.age, input.lemmas) {
        Some(Intent::Age)
    } else {
        None
    }
}

fn rule_historical(keywords: &KeywordsConfig, input: &ClassifierInput) -> Option<Intent> {
    if KeywordsConfig::any_in(&keywords.history, input.lemmas) || input.year.is_some() {
        Some(Intent::History)
    } else {
        None
    }
}

fn rule_extreme(keywords: &KeywordsConfig, input: &ClassifierInput) -> Option<Intent> {
    // Raw-text fallback: catches "most"/"greatest"/"low" phrasings that
    // carry no max/min keyword lemma. Matched per word, not per substring,
    // so "min" never fires inside "minimum".
    if keywords.max_synonyms.iter().any(|w| text_has_word(input.text, w)) {
        Some(Intent::Max)
    } else if keywords.min_synonyms.iter().any(|w| text_has_word(input.text, w)) {
        Some(Intent::Min)
    } else {
        None
    }
}

fn text_has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric()).any(|t| t == word)
}

fn rule_current(keywords: &KeywordsConfig, input: &ClassifierInput) -> Option<Intent> {
    let how_much = input.lemmas.iter().any(|l| l == "how")
        && input.lemmas.iter().any(|l| l == "much");
    if KeywordsConfig::any_in(&keywords.current, input.lemmas) || how_much {
        Some(Intent::Current)
    } else {
        None
    }
}
