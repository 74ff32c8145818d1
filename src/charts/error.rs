//! Chart error types

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::dataset::DatasetError;

/// Errors that can occur while building a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A catalog needed for selection is empty
    #[error(transparent)]
    Configuration(#[from] CatalogError),

    /// A column the chart plots is absent from the dataset
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A column the chart plots holds text
    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    /// The requested basemap style is not part of the style catalog
    #[error("Unknown map style: {0}")]
    UnknownStyle(String),
}

impl From<DatasetError> for ChartError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::MissingColumn(name) => ChartError::MissingColumn(name),
            DatasetError::NotNumeric(name) => ChartError::NotNumeric(name),
            // only column lookups reach the chart builders
            other => ChartError::MissingColumn(other.to_string()),
        }
    }
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
