//! Dataset error types
//!
//! Defines all errors that can occur while loading or reading the dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dataset layer
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed
    #[error("IO error reading {path:?}: {error}")]
    Io { path: PathBuf, error: std::io::Error },

    /// The CSV header could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the dashboard depends on is absent
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A column the dashboard depends on holds non-numeric data
    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    /// Two header cells share the same name
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Columns were built with different lengths
    #[error("Column '{name}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// The source contained a header but no usable rows
    #[error("Dataset has no rows")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
