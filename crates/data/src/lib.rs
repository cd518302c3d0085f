//! CSV dataset layer for the minimum-wage chatbot
//!
//! Loads the four tabular datasets (current rates, history, tipped rates,
//! minor labor-certificate provisions) into string tables with normalized
//! headers. Loading happens once at startup and is fatal on failure;
//! individual malformed cells are the query layer's problem, not the
//! loader's.

mod error;
mod loader;
mod table;
mod value;

pub use error::{DataError, Result};
pub use loader::WageData;
pub use table::Table;
pub use value::parse_dollar;
