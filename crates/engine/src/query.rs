//! Query operations
//!
//! Nine operations keyed by intent. Every operation returns
//! `Option<QueryResult>`: a missing state, an absent column or an
//! unparseable cell means "no result", never an error. The dispatcher is
//! the only seam the caller needs.

use wagebot_core::{Intent, ParsedQuestion};
use wagebot_data::{parse_dollar, Table, WageData};

use crate::result::{CompareEntry, QueryResult};

/// Column holding the display rate in the current-rates dataset.
const RATE_COLUMN: &str = "basic_minimum_rate_text";
/// Column holding the combined cash-and-tip rate in the tipped dataset.
const TIPPED_RATE_COLUMN: &str = "basic combined cash & tip minimum wage rate";

pub struct QueryEngine {
    data: WageData,
}

impl QueryEngine {
    pub fn new(data: WageData) -> Self {
        Self { data }
    }

    /// Route a parsed question to its query operation.
    ///
    /// Single-state operations run against the first detected state;
    /// `Unknown` dispatches nowhere.
    pub fn dispatch(&self, parsed: &ParsedQuestion) -> Option<QueryResult> {
        let state = parsed.primary_state();
        let result = match parsed.intent {
            Intent::Current => self.current(state?),
            Intent::History => self.history(state?, parsed.year),
            Intent::Tipped => self.tipped(state?),
            Intent::Age => self.age(state?),
            Intent::Max => self.max(),
            Intent::Min => self.min(),
            Intent::MaxTipped => self.tipped_extreme(true),
            Intent::MinTipped => self.tipped_extreme(false),
            Intent::Compare => self.compare(&parsed.states),
            Intent::Unknown => None,
        };
        if result.is_none() {
            tracing::debug!(intent = %parsed.intent, "query produced no result");
        }
        result
    }

    /// Current rate for one state.
    pub fn current(&self, state: &str) -> Option<QueryResult> {
        let table = &self.data.states;
        let state_col = table.column_index("state")?;
        let rate_col = table.column_index(RATE_COLUMN)?;
        let row = table.find_row(state_col, state)?;

        let note = table
            .column_index("note")
            .and_then(|c| table.cell(row, c))
            .filter(|n| !n.is_empty())
            .map(String::from);

        Some(QueryResult::CurrentRate {
            state: state.to_string(),
            rate_text: table.cell(row, rate_col)?.to_string(),
            note,
        })
    }

    /// Historical rate: a single point when a year is given and its column
    /// exists, otherwise the full per-year series. A requested year the
    /// dataset does not cover degrades to the series rather than no result.
    pub fn history(&self, state: &str, year: Option<u16>) -> Option<QueryResult> {
        let table = &self.data.history;
        let state_col = table.column_index("jurisdiction")?;
        let row = table.find_row(state_col, state)?;

        if let Some(year) = year {
            if let Some(col) = table.column_index(&year.to_string()) {
                return Some(QueryResult::HistoryPoint {
                    state: state.to_string(),
                    year,
                    rate: table.cell(row, col)?.to_string(),
                });
            }
        }

        let series: Vec<(String, String)> = table
            .headers()
            .iter()
            .enumerate()
            .filter(|(_, h)| is_year_column(h))
            .filter_map(|(i, h)| table.cell(row, i).map(|v| (h.clone(), v.to_string())))
            .collect();
        if series.is_empty() {
            return None;
        }
        Some(QueryResult::HistorySeries {
            state: state.to_string(),
            series,
        })
    }

    /// Tipped-worker rate for one state.
    pub fn tipped(&self, state: &str) -> Option<QueryResult> {
        let table = &self.data.tipped;
        let state_col = table.column_index("jurisdiction")?;
        let rate_col = table.column_index(TIPPED_RATE_COLUMN)?;
        let row = table.find_row(state_col, state)?;

        Some(QueryResult::TippedRate {
            state: state.to_string(),
            rate: table.cell(row, rate_col)?.to_string(),
        })
    }

    /// Minor labor-certificate provision for one state. The dataset's
    /// columns are loosely named; the first non-empty cell in any
    /// minor/age/certificate column wins. A state present in the table but
    /// with no provision value keeps its result; the renderer substitutes
    /// the missing-data text.
    pub fn age(&self, state: &str) -> Option<QueryResult> {
        let table = &self.data.age;
        let state_col = table.column_index_containing(&["state", "jurisdiction"])?;
        let row = table.find_row(state_col, state)?;

        let provision_cols = table.column_indexes_containing(&["minor", "age", "certificate"]);
        let provision = provision_cols
            .iter()
            .filter_map(|&c| table.cell(row, c))
            .find(|v| !v.is_empty())
            .unwrap_or_default();

        Some(QueryResult::AgeProvision {
            state: state.to_string(),
            provision: provision.to_string(),
        })
    }

    /// State with the highest basic rate.
    pub fn max(&self) -> Option<QueryResult> {
        let table = &self.data.states;
        let state_col = table.column_index("state")?;
        let rate_col = table.column_index(RATE_COLUMN)?;

        let (row, _) = numeric_extreme(table, rate_col, true)?;
        Some(QueryResult::Highest {
            state: table.cell(row, state_col)?.to_string(),
            rate_text: table.cell(row, rate_col)?.to_string(),
        })
    }

    /// All states tied at the lowest basic rate.
    pub fn min(&self) -> Option<QueryResult> {
        let table = &self.data.states;
        let state_col = table.column_index("state")?;
        let rate_col = table.column_index(RATE_COLUMN)?;

        let (_, min_value) = numeric_extreme(table, rate_col, false)?;
        let states: Vec<String> = table
            .row_indexes()
            .filter(|&r| {
                table
                    .cell(r, rate_col)
                    .and_then(parse_dollar)
                    .map(|v| v == min_value)
                    .unwrap_or(false)
            })
            .filter_map(|r| table.cell(r, state_col).map(String::from))
            .collect();

        Some(QueryResult::LowestTies {
            value: min_value,
            states,
        })
    }

    /// Jurisdiction with the highest (or lowest) combined tipped rate.
    pub fn tipped_extreme(&self, highest: bool) -> Option<QueryResult> {
        let table = &self.data.tipped;
        let state_col = table.column_index("jurisdiction")?;
        let rate_col = table.column_index(TIPPED_RATE_COLUMN)?;

        let (row, _) = numeric_extreme(table, rate_col, highest)?;
        Some(QueryResult::TippedExtreme {
            state: table.cell(row, state_col)?.to_string(),
            rate: table.cell(row, rate_col)?.to_string(),
            highest,
        })
    }

    /// Side-by-side basic rates for the requested states, in request
    /// order. States missing from the dataset or with unparseable rates
    /// are skipped; an empty selection is no result.
    pub fn compare(&self, states: &[String]) -> Option<QueryResult> {
        let table = &self.data.states;
        let state_col = table.column_index("state")?;
        let rate_col = table.column_index(RATE_COLUMN)?;

        let entries: Vec<CompareEntry> = states
            .iter()
            .filter_map(|state| {
                let row = table.find_row(state_col, state)?;
                let value = table.cell(row, rate_col).and_then(parse_dollar)?;
                Some(CompareEntry {
                    state: table.cell(row, state_col)?.to_string(),
                    value,
                })
            })
            .collect();

        if entries.is_empty() {
            return None;
        }
        Some(QueryResult::Comparison { entries })
    }
}

/// The history dataset mixes year columns with the jurisdiction column and
/// occasional footnote columns.
fn is_year_column(header: &str) -> bool {
    header.len() == 4 && header.bytes().all(|b| b.is_ascii_digit())
}

/// Row index and value of the numeric extreme of a column. Rows whose cell
/// does not parse as a dollar amount are ignored.
fn numeric_extreme(table: &Table, col: usize, highest: bool) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for row in table.row_indexes() {
        let Some(value) = table.cell(row, col).and_then(parse_dollar) else {
            continue;
        };
        best = match best {
            None => Some((row, value)),
            Some((_, b)) if (highest && value > b) || (!highest && value < b) => {
                Some((row, value))
            }
            keep => keep,
        };
    }
    best
}
