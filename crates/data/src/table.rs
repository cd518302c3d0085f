//! String table with normalized headers
//!
//! The datasets come from hand-maintained spreadsheets with inconsistent
//! header casing and stray whitespace, so headers are trimmed and
//! lower-cased at load and all lookups go through the normalized form.
//! Cells stay strings; numeric interpretation happens at query time.

use std::io::Read;
use std::path::Path;

use crate::error::{DataError, Result};

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().display().to_string();
        let file = std::fs::File::open(path.as_ref()).map_err(|source| DataError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_reader(file, &display)
    }

    /// Read a table from any reader; `name` is used in error messages.
    pub fn from_reader<R: Read>(reader: R, name: &str) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|source| DataError::Csv {
                path: name.to_string(),
                source,
            })?
            .iter()
            .map(normalize_header)
            .collect();
        if headers.is_empty() {
            return Err(DataError::MissingHeader {
                path: name.to_string(),
            });
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(|source| DataError::Csv {
                path: name.to_string(),
                source,
            })?;
            let mut row: Vec<String> = record.iter().map(|c| c.trim().to_string()).collect();
            // flexible parsing can yield short rows; pad so column indexes
            // stay valid
            row.resize(headers.len().max(row.len()), String::new());
            rows.push(row);
        }

        tracing::debug!(table = name, rows = rows.len(), columns = headers.len(), "loaded table");
        Ok(Self { headers, rows })
    }

    /// Parse a table from an in-memory CSV string (tests, fixtures).
    pub fn from_csv_str(content: &str, name: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes(), name)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by normalized name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers.iter().position(|h| *h == wanted)
    }

    /// First column whose name contains any of the fragments. The age
    /// dataset names its columns loosely, so lookups there are fuzzy.
    pub fn column_index_containing(&self, fragments: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| fragments.iter().any(|f| h.contains(f)))
    }

    /// All columns whose name contains any of the fragments.
    pub fn column_indexes_containing(&self, fragments: &[&str]) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| fragments.iter().any(|f| h.contains(f)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Cell value, `None` when the row or column is out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// Row index of the first row whose `col` cell equals `value`
    /// case-insensitively.
    pub fn find_row(&self, col: usize, value: &str) -> Option<usize> {
        let wanted = value.trim().to_lowercase();
        self.rows
            .iter()
            .position(|r| r.get(col).map(|c| c.to_lowercase()) == Some(wanted.clone()))
    }

    /// Iterate over row indexes.
    pub fn row_indexes(&self) -> impl Iterator<Item = usize> {
        0..self.rows.len()
    }
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}
