//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Dataset locations
    #[serde(default)]
    pub data: DataConfig,

    /// Confidence advisory threshold: below this the caller is told the
    /// detected intent may be wrong. The record is still returned.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,

    /// Optional keywords.yaml overriding the built-in keyword sets
    #[serde(default)]
    pub keywords_path: Option<String>,
}

fn default_min_confidence() -> f64 {
    0.3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            min_confidence: default_min_confidence(),
            keywords_path: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConfigError::InvalidValue {
                field: "min_confidence".to_string(),
                message: format!("must be in [0.0, 1.0], got {}", self.min_confidence),
            });
        }
        Ok(())
    }
}

/// Dataset file locations, relative to `dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the CSV datasets
    #[serde(default = "default_data_dir")]
    pub dir: String,
    /// Current rates per state
    #[serde(default = "default_states_file")]
    pub states_file: String,
    /// Historical rates per jurisdiction, one column per year
    #[serde(default = "default_history_file")]
    pub history_file: String,
    /// Tipped-worker rates per jurisdiction
    #[serde(default = "default_tipped_file")]
    pub tipped_file: String,
    /// Minor labor-certificate provisions
    #[serde(default = "default_age_file")]
    pub age_file: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_states_file() -> String {
    "us_states_min_wage.csv".to_string()
}

fn default_history_file() -> String {
    "state_minimum_wage_history_2000.csv".to_string()
}

fn default_tipped_file() -> String {
    "tipped_min_wage.csv".to_string()
}

fn default_age_file() -> String {
    "age_certificates.csv".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            states_file: default_states_file(),
            history_file: default_history_file(),
            tipped_file: default_tipped_file(),
            age_file: default_age_file(),
        }
    }
}

/// Load settings from layered sources: `config/default`, an optional
/// environment-specific file, then `WAGEBOT`-prefixed environment
/// variables (`WAGEBOT__MIN_CONFIDENCE=0.5`).
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("WAGEBOT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.min_confidence, 0.3);
        assert_eq!(settings.data.dir, "data");
        assert!(settings.keywords_path.is_none());
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::default();
        settings.min_confidence = 1.5;
        assert!(settings.validate().is_err());

        settings.min_confidence = 0.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_data_config_defaults() {
        let config = DataConfig::default();
        assert_eq!(config.states_file, "us_states_min_wage.csv");
        assert_eq!(config.history_file, "state_minimum_wage_history_2000.csv");
    }
}
