//! Configuration for the minimum-wage chatbot
//!
//! Supports loading configuration from:
//! - YAML files (keyword sets via `KeywordsConfig::load`)
//! - Layered settings files plus environment variables with the
//!   `WAGEBOT` prefix (`load_settings`)
//!
//! Every field carries a serde default, so an empty config is a fully
//! working one: the built-in keyword sets and the 0.3 advisory threshold
//! apply unless overridden.

pub mod keywords;
pub mod settings;

pub use keywords::KeywordsConfig;
pub use settings::{load_settings, DataConfig, Settings};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
