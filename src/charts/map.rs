//! Geographic scatter map builder.

use super::error::{ChartError, ChartResult};
use super::spec::{ChartSpec, ColorScale, GeoPoint, Marker, ScatterMapSpec, SizeScale};
use crate::catalog::MAP_STYLES;
use crate::dataset::{Dataset, LATITUDE, LONGITUDE, MEDIAN_HOUSE_VALUE, POPULATION};

/// Initial zoom level of the map
pub const MAP_ZOOM: u8 = 3;

/// Map height in pixels
pub const MAP_HEIGHT: u32 = 600;

/// Population is divided by this to get a legible marker size
pub const POPULATION_SIZE_DIVISOR: f64 = 100.0;

/// Build the scatter map of every record over the `style` basemap.
///
/// Markers sit at each record's latitude/longitude, colored by median house
/// value and sized by `population / 100`.
pub fn build_map(dataset: &Dataset, style: &str) -> ChartResult<ChartSpec> {
    if !MAP_STYLES.contains(&style) {
        return Err(ChartError::UnknownStyle(style.to_string()));
    }

    let lat = dataset.numeric(LATITUDE)?;
    let lon = dataset.numeric(LONGITUDE)?;
    let value = dataset.numeric(MEDIAN_HOUSE_VALUE)?;
    let population = dataset.numeric(POPULATION)?;

    let markers: Vec<Marker> = lat
        .iter()
        .zip(lon)
        .zip(value)
        .zip(population)
        .map(|(((&lat, &lon), &color), &pop)| Marker {
            lat,
            lon,
            color,
            size: pop / POPULATION_SIZE_DIVISOR,
        })
        .collect();

    let (min, max) = finite_range(value);

    tracing::debug!(style, markers = markers.len(), "Built scatter map");

    Ok(ChartSpec::ScatterMap(ScatterMapSpec {
        title: format!("Map style: {}", style),
        map_style: style.to_string(),
        zoom: MAP_ZOOM,
        height: MAP_HEIGHT,
        center: center_of(&markers),
        color: ColorScale {
            field: MEDIAN_HOUSE_VALUE.to_string(),
            min,
            max,
        },
        size: SizeScale {
            field: POPULATION.to_string(),
            divisor: POPULATION_SIZE_DIVISOR,
        },
        markers,
    }))
}

/// Min and max of the finite values, if any
fn finite_range(values: &[f64]) -> (Option<f64>, Option<f64>) {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((None, None), |(min, max), v| {
            (
                Some(min.map_or(v, |m: f64| m.min(v))),
                Some(max.map_or(v, |m: f64| m.max(v))),
            )
        })
}

/// Mean position of markers with finite coordinates
fn center_of(markers: &[Marker]) -> GeoPoint {
    let (sum_lat, sum_lon, n) = markers
        .iter()
        .filter(|m| m.lat.is_finite() && m.lon.is_finite())
        .fold((0.0, 0.0, 0usize), |(lat, lon, n), m| {
            (lat + m.lat, lon + m.lon, n + 1)
        });

    if n == 0 {
        return GeoPoint { lat: 0.0, lon: 0.0 };
    }
    GeoPoint {
        lat: sum_lat / n as f64,
        lon: sum_lon / n as f64,
    }
}
