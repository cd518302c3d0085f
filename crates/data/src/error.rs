//! Dataset error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {path} has no header row")]
    MissingHeader { path: String },
}

pub type Result<T> = std::result::Result<T, DataError>;
