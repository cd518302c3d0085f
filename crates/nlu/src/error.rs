//! NLU error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NluError {
    /// The lexical annotation capability could not be initialized.
    ///
    /// Fatal at startup: parsing cannot run without it. Individual parse
    /// calls never fail.
    #[error("lexical annotator unavailable: {0}")]
    AnnotatorUnavailable(String),
}

pub type Result<T> = std::result::Result<T, NluError>;
