//! # Housing Dashboard
//!
//! A small web dashboard over the California housing dataset: a paginated
//! table of the records, a histogram that cycles through the numeric columns,
//! and a geographic scatter map that cycles through basemap styles.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading into a fixed-schema table
//! - [`catalog`]: Option catalogs, click counters and cyclic selection
//! - [`charts`]: Histogram and scatter-map builders
//! - [`dashboard`]: Button handlers and table pagination
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use housing_dashboard::catalog::ClickCounter;
//! use housing_dashboard::dashboard::Dashboard;
//! use housing_dashboard::dataset::DatasetLoader;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = DatasetLoader::new().load(Path::new("data/housing_sample.csv"))?;
//!     let dashboard = Dashboard::new(Arc::new(report.dataset));
//!
//!     // Press "Next Histogram" twice
//!     let mut clicks = ClickCounter::new();
//!     clicks.increment();
//!     clicks.increment();
//!
//!     let chart = dashboard.on_histogram_click(clicks.value())?;
//!     println!("{}", serde_json::to_string_pretty(&chart)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod dataset;

// Re-export top-level types for convenience
pub use catalog::{select, CatalogError, ClickCounter, MAP_STYLES};

pub use charts::{build_histogram, build_map, ChartError, ChartResult, ChartSpec};

pub use dashboard::{Dashboard, Session, TablePage};

pub use dataset::{Dataset, DatasetError, DatasetLoader, DatasetResult};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DatasetConfig, LogFormat, LoggingConfig};
