//! Question parser for the minimum-wage chatbot
//!
//! This crate turns a free-text question into a [`ParsedQuestion`]:
//! - **Lexical annotation**: lower-cased lemmas plus geopolitical/date
//!   entity spans, behind the [`LexicalAnnotator`] trait so tests can
//!   inject a deterministic stub.
//! - **Intent classification**: a priority-ordered rule cascade — rules are
//!   evaluated top to bottom and the first match wins.
//! - **Confidence scoring**: a deterministic keyword-coverage score with
//!   fixed per-intent boosts. A heuristic scalar, not a probability.
//!
//! # Example
//!
//! ```
//! use wagebot_nlu::QuestionParser;
//! use wagebot_core::Intent;
//!
//! let parser = QuestionParser::with_defaults().unwrap();
//! let parsed = parser.parse("Which state has the highest minimum wage?");
//!
//! assert_eq!(parsed.intent, Intent::Max);
//! assert!(parsed.states.is_empty());
//! ```

pub mod annotate;
pub mod classifier;
pub mod confidence;
mod error;
mod parser;

pub use annotate::{Annotation, LexicalAnnotator, RuleBasedAnnotator};
pub use classifier::{ClassifierInput, IntentClassifier};
pub use confidence::ConfidenceScorer;
pub use error::{NluError, Result};
pub use parser::QuestionParser;
