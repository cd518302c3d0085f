//! Dataset loading

use std::path::Path;

use wagebot_config::DataConfig;

use crate::error::Result;
use crate::table::Table;

/// The four datasets, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct WageData {
    /// Current rates per state (`state`, `basic_minimum_rate_text`, ...)
    pub states: Table,
    /// Historical rates: row per jurisdiction, one column per year
    pub history: Table,
    /// Tipped-worker rates per jurisdiction
    pub tipped: Table,
    /// Minor labor-certificate provisions, loosely named columns
    pub age: Table,
}

impl WageData {
    /// Load all four datasets from the configured locations.
    pub fn load(config: &DataConfig) -> Result<Self> {
        let dir = Path::new(&config.dir);
        let data = Self {
            states: Table::from_path(dir.join(&config.states_file))?,
            history: Table::from_path(dir.join(&config.history_file))?,
            tipped: Table::from_path(dir.join(&config.tipped_file))?,
            age: Table::from_path(dir.join(&config.age_file))?,
        };
        tracing::info!(
            states = data.states.len(),
            history = data.history.len(),
            tipped = data.tipped.len(),
            age = data.age.len(),
            "datasets loaded"
        );
        Ok(data)
    }

    /// Build from in-memory tables (tests, fixtures).
    pub fn from_tables(states: Table, history: Table, tipped: Table, age: Table) -> Self {
        Self {
            states,
            history,
            tipped,
            age,
        }
    }
}
