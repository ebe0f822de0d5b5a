//! Error types for stsdb-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the dataset
///
/// All of these are fatal at startup. Per-query outcomes such as an unknown
/// card name are reported through [`crate::QueryError`] instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A table file could not be opened or read
    #[error("data source unavailable '{path}': {source}")]
    DataSourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row did not have the field count its table requires
    #[error("malformed row at {path}:{line}: expected {expected} fields, found {found}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A field could not be decoded into its typed value
    #[error("invalid {field} '{value}' at {path}:{line}")]
    InvalidField {
        path: PathBuf,
        line: u64,
        field: &'static str,
        value: String,
    },

    /// CSV error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Unknown name matching mode
    #[error("invalid match mode '{0}', expected 'exact' or 'case-insensitive'")]
    InvalidMatchMode(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
