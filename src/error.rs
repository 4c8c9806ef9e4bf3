//! Typed errors for the ingestion boundary and reference table loading.
//!
//! The index calculators themselves never fail; these errors only surface when
//! a caller asks for strict validation or supplies an unreadable table.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building or loading a reference table
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("failed to read reference table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reference table JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("metal '{symbol}': {field} must be {expected}, got {value}")]
    InvalidEntry {
        symbol: String,
        field: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("metal '{0}' appears more than once in the reference table")]
    DuplicateSymbol(String),

    #[error("reference entry has an empty metal symbol")]
    EmptySymbol,
}

/// Failure while building a concentration reading under strict validation
#[derive(Debug, Error, PartialEq)]
pub enum ReadingError {
    #[error("concentration for '{symbol}' must be non-negative, got {value}")]
    Negative { symbol: String, value: f64 },

    #[error("concentration for '{symbol}' is not a finite number")]
    NotFinite { symbol: String },

    #[error("unknown metal symbol '{0}'")]
    UnknownMetal(String),
}
