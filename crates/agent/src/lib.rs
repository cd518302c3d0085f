//! Chatbot orchestration
//!
//! Wires the parser, the query engine and the response renderer into a
//! one-question-in, one-answer-out loop. Startup is fallible (datasets and
//! the annotator must come up); answering is not. Everything is read-only
//! after construction, so one `Chatbot` serves any number of callers.

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use wagebot_config::{KeywordsConfig, Settings};
use wagebot_core::ParsedQuestion;
use wagebot_data::WageData;
use wagebot_engine::{render_response, QueryEngine};
use wagebot_nlu::{LexicalAnnotator, QuestionParser, RuleBasedAnnotator};

/// One answered question.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    /// Rendered reply text
    pub text: String,
    /// The parse record behind the reply, for debug display
    pub parsed: ParsedQuestion,
    /// Whether the confidence fell below the advisory threshold. The
    /// answer is still given; front-ends may flag it.
    pub low_confidence: bool,
}

pub struct Chatbot {
    parser: QuestionParser,
    engine: QueryEngine,
    min_confidence: f64,
}

impl Chatbot {
    /// Bring the chatbot up from settings: load the datasets, the keyword
    /// sets and the shared annotator. Any failure here is startup-fatal.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        settings.validate().context("invalid settings")?;

        let keywords = match &settings.keywords_path {
            Some(path) => KeywordsConfig::load(path)
                .with_context(|| format!("loading keyword sets from {path}"))?,
            None => KeywordsConfig::default(),
        };
        let annotator = RuleBasedAnnotator::shared().context("building the annotator")?;
        let data = WageData::load(&settings.data).context("loading datasets")?;

        Ok(Self::from_parts(annotator, keywords, data, settings.min_confidence))
    }

    /// Assemble from already-built pieces (tests, embedded use).
    pub fn from_parts(
        annotator: Arc<dyn LexicalAnnotator>,
        keywords: KeywordsConfig,
        data: WageData,
        min_confidence: f64,
    ) -> Self {
        Self {
            parser: QuestionParser::new(annotator, keywords),
            engine: QueryEngine::new(data),
            min_confidence,
        }
    }

    /// Answer one question. Never fails: a question nothing matches gets
    /// the generic not-found reply.
    pub fn ask(&self, question: &str) -> Answer {
        let parsed = self.parser.parse(question);
        tracing::debug!(
            intent = %parsed.intent,
            states = ?parsed.states,
            year = ?parsed.year,
            confidence = parsed.confidence,
            "question parsed"
        );

        let result = self.engine.dispatch(&parsed);
        let text = render_response(result.as_ref());
        let low_confidence = parsed.is_low_confidence(self.min_confidence);

        Answer {
            text,
            parsed,
            low_confidence,
        }
    }
}
