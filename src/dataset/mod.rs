//! Housing Dataset
//!
//! Loads the static housing table once at startup and exposes it as an
//! immutable, fixed-schema, column-oriented `Dataset`.
//!
//! ```rust,no_run
//! use housing_dashboard::dataset::DatasetLoader;
//! use std::path::Path;
//!
//! let report = DatasetLoader::new().load(Path::new("data/housing_sample.csv"))?;
//! println!("numeric columns: {:?}", report.dataset.numeric_column_names());
//! # Ok::<(), housing_dashboard::dataset::DatasetError>(())
//! ```

mod error;
mod loader;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{DatasetLoader, LoadReport};
pub use types::{
    Cell, Column, ColumnData, Dataset, LATITUDE, LONGITUDE, MEDIAN_HOUSE_VALUE, POPULATION,
    REQUIRED_COLUMNS,
};
