//! Dashboard
//!
//! Ties the dataset, the two catalogs and the chart builders together.
//! Each button press is answered by a pure function of the button's click
//! counter, so a rebuild never touches shared state.

use serde::Serialize;
use std::sync::Arc;

use crate::catalog::{select, ClickCounter, MAP_STYLES};
use crate::charts::{build_histogram, build_map, ChartError, ChartResult, ChartSpec};
use crate::dataset::{Cell, Dataset};

/// Default number of table rows per page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Read-only dashboard state, shared by every request
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    /// Numeric columns in native order
    columns: Vec<String>,
    /// Basemap styles in display order
    styles: Vec<String>,
}

/// One page of the data table
#[derive(Debug, Serialize)]
pub struct TablePage<'a> {
    pub columns: Vec<&'a str>,
    pub rows: Vec<Vec<Cell<'a>>>,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

impl Dashboard {
    /// Build the dashboard with the default style catalog
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let columns = dataset.numeric_column_names();
        Self {
            dataset,
            columns,
            styles: MAP_STYLES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build the dashboard with a subset or reordering of [`MAP_STYLES`]
    ///
    /// Styles the map builder does not know are rejected here rather than on
    /// the first click that lands on them.
    pub fn with_styles(dataset: Arc<Dataset>, styles: Vec<String>) -> ChartResult<Self> {
        if let Some(unknown) = styles.iter().find(|s| !MAP_STYLES.contains(&s.as_str())) {
            return Err(ChartError::UnknownStyle(unknown.clone()));
        }

        let columns = dataset.numeric_column_names();
        Ok(Self {
            dataset,
            columns,
            styles,
        })
    }

    /// The loaded dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Numeric column catalog
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Style catalog
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Column shown after `counter` presses of the histogram button
    pub fn active_column(&self, counter: u64) -> ChartResult<&str> {
        Ok(select(counter, &self.columns)?.as_str())
    }

    /// Style shown after `counter` presses of the map button
    pub fn active_style(&self, counter: u64) -> ChartResult<&str> {
        Ok(select(counter, &self.styles)?.as_str())
    }

    /// Histogram for the histogram button's counter
    pub fn on_histogram_click(&self, counter: u64) -> ChartResult<ChartSpec> {
        let column = self.active_column(counter)?;
        build_histogram(&self.dataset, column)
    }

    /// Scatter map for the map button's counter
    pub fn on_map_click(&self, counter: u64) -> ChartResult<ChartSpec> {
        let style = self.active_style(counter)?;
        build_map(&self.dataset, style)
    }

    /// Number of table pages for `page_size` rows per page
    pub fn page_count(&self, page_size: usize) -> usize {
        let page_size = page_size.max(1);
        self.dataset.row_count().div_ceil(page_size)
    }

    /// Rows of the table page `page` (zero-based), if it exists
    pub fn table_page(&self, page: usize, page_size: usize) -> Option<TablePage<'_>> {
        let page_size = page_size.max(1);
        let page_count = self.page_count(page_size);
        if page >= page_count {
            return None;
        }

        let start = page * page_size;
        let end = (start + page_size).min(self.dataset.row_count());
        let rows = (start..end).filter_map(|i| self.dataset.row(i)).collect();

        Some(TablePage {
            columns: self.dataset.column_names(),
            rows,
            page,
            page_size,
            page_count,
            total_rows: self.dataset.row_count(),
        })
    }
}

/// The two independent click counters of one browsing session
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    pub histogram_clicks: ClickCounter,
    pub map_clicks: ClickCounter,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press "Next Histogram" and rebuild the histogram
    pub fn next_histogram(&mut self, dashboard: &Dashboard) -> ChartResult<ChartSpec> {
        let counter = self.histogram_clicks.increment();
        dashboard.on_histogram_click(counter)
    }

    /// Press "Next Map" and rebuild the map
    pub fn next_map(&mut self, dashboard: &Dashboard) -> ChartResult<ChartSpec> {
        let counter = self.map_clicks.increment();
        dashboard.on_map_click(counter)
    }
}
