//! Catalogs and cyclic selection
//!
//! A catalog is a fixed, ordered list of options a button cycles through.
//! The active option is never stored: it is derived from the button's click
//! counter with [`select`].

use thiserror::Error;

/// Basemap styles the map button cycles through, in display order
pub const MAP_STYLES: [&str; 14] = [
    "basic",
    "carto-darkmatter",
    "carto-darkmatter-nolabels",
    "carto-positron",
    "carto-positron-nolabels",
    "carto-voyager",
    "carto-voyager-nolabels",
    "dark",
    "light",
    "open-street-map",
    "outdoors",
    "satellite",
    "satellite-streets",
    "streets",
];

/// Errors raised when selecting from a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no options to select from
    #[error("Configuration error: catalog is empty")]
    Empty,
}

/// Pick the option active after `counter` clicks.
///
/// Returns `catalog[counter mod catalog.len()]`, so the first option is shown
/// before any click and the selection wraps around with period `catalog.len()`.
pub fn select<T>(counter: u64, catalog: &[T]) -> Result<&T, CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }
    // len fits in u64 on every supported target
    let index = counter % catalog.len() as u64;
    Ok(&catalog[index as usize])
}

/// Number of times a button has been pressed in the session
///
/// Starts at zero and only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClickCounter(u64);

impl ClickCounter {
    /// A counter that has not been clicked yet
    pub fn new() -> Self {
        Self(0)
    }

    /// Record one click and return the new value
    pub fn increment(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    /// Current number of clicks
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ClickCounter {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ClickCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [&str; 8] = [
        "longitude",
        "latitude",
        "housing_median_age",
        "total_rooms",
        "total_bedrooms",
        "population",
        "households",
        "median_income",
    ];

    #[test]
    fn test_zero_clicks_selects_first() {
        assert_eq!(select(0, &COLUMNS), Ok(&"longitude"));
        assert_eq!(select(0, &MAP_STYLES), Ok(&"basic"));
    }

    #[test]
    fn test_select_is_counter_mod_len() {
        for counter in 0..100u64 {
            let expected = &COLUMNS[(counter % 8) as usize];
            assert_eq!(select(counter, &COLUMNS), Ok(expected));
        }
    }

    #[test]
    fn test_select_is_periodic() {
        for counter in 0..50u64 {
            assert_eq!(
                select(counter, &MAP_STYLES),
                select(counter + MAP_STYLES.len() as u64, &MAP_STYLES)
            );
        }
    }

    #[test]
    fn test_ten_clicks_over_eight_columns() {
        assert_eq!(select(10, &COLUMNS), Ok(&COLUMNS[2]));
    }

    #[test]
    fn test_style_catalog_wraps_to_basic() {
        assert_eq!(MAP_STYLES.len(), 14);
        assert_eq!(select(13, &MAP_STYLES), Ok(&"streets"));
        assert_eq!(select(14, &MAP_STYLES), Ok(&"basic"));
    }

    #[test]
    fn test_large_counter() {
        assert_eq!(select(u64::MAX, &COLUMNS), Ok(&COLUMNS[7]));
    }

    #[test]
    fn test_empty_catalog_fails() {
        let empty: [&str; 0] = [];
        for counter in [0, 1, 7, u64::MAX] {
            assert_eq!(select(counter, &empty), Err(CatalogError::Empty));
        }
    }

    #[test]
    fn test_click_counter_increments_by_one() {
        let mut counter = ClickCounter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_click_counter_saturates() {
        let mut counter = ClickCounter::from(u64::MAX);
        assert_eq!(counter.increment(), u64::MAX);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut histogram = ClickCounter::new();
        let map = ClickCounter::new();
        histogram.increment();
        histogram.increment();
        assert_eq!(select(histogram.value(), &COLUMNS), Ok(&"housing_median_age"));
        assert_eq!(select(map.value(), &MAP_STYLES), Ok(&"basic"));
    }
}
