//! Application State
//!
//! Shared state accessible by all HTTP handlers.
//! Everything here is read-only after startup; click counters live in the
//! browser and arrive with each request.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::dashboard::{Dashboard, DEFAULT_PAGE_SIZE};

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dataset, catalogs and chart builders
    pub dashboard: Arc<Dashboard>,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Rows per table page
    pub page_size: usize,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the default page size
    pub fn new(dashboard: Arc<Dashboard>, config: ApiConfig) -> Self {
        Self {
            dashboard,
            config: Arc::new(config),
            page_size: DEFAULT_PAGE_SIZE,
            start_time: Instant::now(),
        }
    }

    /// Set the number of rows per table page
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
