//! Chart specifications
//!
//! Renderer-agnostic descriptions of the charts the dashboard shows. They are
//! serialized to JSON and drawn by the browser page; nothing here knows about
//! pixels beyond the requested map height.

use serde::Serialize;

/// A chart ready to be handed to a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Histogram(HistogramSpec),
    ScatterMap(ScatterMapSpec),
}

impl ChartSpec {
    /// Chart title, if the chart has one
    pub fn title(&self) -> Option<&str> {
        match self {
            ChartSpec::Histogram(_) => None,
            ChartSpec::ScatterMap(map) => Some(&map.title),
        }
    }

    /// Borrow the histogram, if this is one
    pub fn as_histogram(&self) -> Option<&HistogramSpec> {
        match self {
            ChartSpec::Histogram(h) => Some(h),
            _ => None,
        }
    }

    /// Borrow the scatter map, if this is one
    pub fn as_scatter_map(&self) -> Option<&ScatterMapSpec> {
        match self {
            ChartSpec::ScatterMap(m) => Some(m),
            _ => None,
        }
    }
}

/// Axis labelling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub title: String,
}

impl AxisSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// One histogram bar covering `[start, end)`
///
/// The last bin of a histogram is closed on the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Distribution of one numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSpec {
    /// Column the histogram was built from
    pub column: String,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub bins: Vec<Bin>,
    /// Records counted across all bins
    pub total: usize,
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Continuous color encoding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    /// Column the color encodes
    pub field: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Linear marker size encoding: `size = field / divisor`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeScale {
    pub field: String,
    pub divisor: f64,
}

/// One record on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub color: f64,
    pub size: f64,
}

/// Geographic scatter plot over a basemap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMapSpec {
    pub title: String,
    /// Basemap tile style
    pub map_style: String,
    pub zoom: u8,
    /// Height in pixels
    pub height: u32,
    pub center: GeoPoint,
    pub color: ColorScale,
    pub size: SizeScale,
    pub markers: Vec<Marker>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_spec_is_tagged_by_kind() {
        let spec = ChartSpec::Histogram(HistogramSpec {
            column: "population".into(),
            x_axis: AxisSpec::new("population"),
            y_axis: AxisSpec::new("count"),
            bins: vec![Bin {
                start: 1.0,
                end: 2.0,
                count: 3,
            }],
            total: 3,
        });

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "histogram");
        assert_eq!(json["bins"][0]["count"], 3);
        assert!(spec.title().is_none());
        assert!(spec.as_histogram().is_some());
        assert!(spec.as_scatter_map().is_none());
    }
}
