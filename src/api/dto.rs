//! Data Transfer Objects
//!
//! Request and response types for the HTTP endpoints.
//! These types are serialized/deserialized to/from JSON or query strings.

use serde::{Deserialize, Serialize};

use crate::charts::ChartSpec;

// ============================================
// CHART DTOs
// ============================================

/// Query string of the chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// How many times the chart's button has been pressed
    #[serde(default)]
    pub n_clicks: u64,
}

/// Chart rebuilt for one click counter value
#[derive(Debug, Serialize)]
pub struct ChartResponse {
    /// Counter the chart was built for
    pub n_clicks: u64,
    /// Active column or basemap style
    pub selection: String,
    pub chart: ChartSpec,
}

// ============================================
// CATALOG DTOs
// ============================================

/// Options the two buttons cycle through
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Numeric columns, in histogram order
    pub columns: Vec<String>,
    /// Basemap styles, in map order
    pub styles: Vec<String>,
}

// ============================================
// TABLE DTOs
// ============================================

/// Query string of the table endpoint
#[derive(Debug, Default, Deserialize)]
pub struct TableParams {
    /// Zero-based page index
    #[serde(default)]
    pub page: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Records in the loaded dataset
    pub dataset_rows: usize,
    /// Numeric columns available for histograms
    pub numeric_columns: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
