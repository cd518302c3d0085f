//! Core types for the minimum-wage chatbot
//!
//! This crate provides the value types shared across all other crates:
//! - `Intent` — the fixed enumeration of question intents
//! - `ParsedQuestion` — the immutable parse result handed to the query layer
//! - `Entity`/`EntityLabel` — the annotation shape produced by the lexical
//!   annotation capability
//! - The canonical US state gazetteer

pub mod entity;
pub mod intent;
pub mod question;
pub mod states;

pub use entity::{Entity, EntityLabel};
pub use intent::Intent;
pub use question::ParsedQuestion;
pub use states::{canonical_state, is_state, US_STATES};
