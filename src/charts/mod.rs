//! Chart Builders
//!
//! Pure functions turning the dataset plus one selection (a column or a
//! basemap style) into a renderer-agnostic [`ChartSpec`].
//!
//! - [`build_histogram`]: distribution of one numeric column
//! - [`build_map`]: geographic scatter of every record

mod error;
mod histogram;
mod map;
mod spec;

pub use error::{ChartError, ChartResult};
pub use histogram::{build_histogram, build_histogram_with, compute_bins, BinStrategy};
pub use map::{build_map, MAP_HEIGHT, MAP_ZOOM, POPULATION_SIZE_DIVISOR};
pub use spec::{
    AxisSpec, Bin, ChartSpec, ColorScale, GeoPoint, HistogramSpec, Marker, ScatterMapSpec,
    SizeScale,
};
