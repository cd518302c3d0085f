//! Query dispatch and response rendering
//!
//! Maps a parsed question onto one of nine query operations over the
//! tabular datasets and renders the structured result as a natural-language
//! answer. Queries never raise: any internal miss normalizes to `None`,
//! which renders as the generic not-found reply.

mod query;
mod response;
mod result;

pub use query::QueryEngine;
pub use response::render_response;
pub use result::{CompareEntry, QueryResult};
