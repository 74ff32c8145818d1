//! Core data types for the housing dataset
//!
//! This module defines the fixed-schema table the dashboard works on:
//! - `Dataset`: the immutable, column-oriented table
//! - `Column` and `ColumnData`: a named, typed column
//! - `Cell`: a borrowed view of a single value, used for table rendering

use serde::Serialize;
use std::collections::HashSet;

use super::error::{DatasetError, DatasetResult};

/// Latitude of the block group
pub const LATITUDE: &str = "latitude";
/// Longitude of the block group
pub const LONGITUDE: &str = "longitude";
/// Median house value of the block group, in USD
pub const MEDIAN_HOUSE_VALUE: &str = "median_house_value";
/// Number of residents of the block group
pub const POPULATION: &str = "population";

/// Fields every record must carry for the map to be drawn
pub const REQUIRED_COLUMNS: [&str; 4] = [LATITUDE, LONGITUDE, MEDIAN_HOUSE_VALUE, POPULATION];

/// Values of a single column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Floating point values; missing cells are `NaN`
    Numeric(Vec<f64>),
    /// Free-form text values
    Text(Vec<String>),
}

impl ColumnData {
    /// Number of values in the column
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    /// Whether the column holds no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named column of the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    /// Create a numeric column
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Create a text column
    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }

    /// Whether the column holds numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Numeric(_))
    }

    /// Borrow the cell at `row`
    pub fn cell(&self, row: usize) -> Option<Cell<'_>> {
        match &self.data {
            ColumnData::Numeric(values) => values.get(row).map(|v| Cell::Number(*v)),
            ColumnData::Text(values) => values.get(row).map(|v| Cell::Text(v.as_str())),
        }
    }
}

/// A single value of the table
///
/// Serializes as a bare JSON number or string. Missing numbers (`NaN`)
/// serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell<'a> {
    Number(f64),
    Text(&'a str),
}

/// The in-memory housing table
///
/// Loaded once at startup and never mutated. Column order is the native
/// order of the source, which is also the order of the column catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from columns of equal length
    pub fn from_columns(columns: Vec<Column>) -> DatasetResult<Self> {
        let row_count = columns.first().map(|c| c.data.len()).unwrap_or(0);

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
            if column.data.len() != row_count {
                return Err(DatasetError::LengthMismatch {
                    name: column.name.clone(),
                    expected: row_count,
                    actual: column.data.len(),
                });
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Number of records
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// All columns in native order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Names of all columns in native order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Names of the numeric columns in native order
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Borrow the values of a numeric column
    pub fn numeric(&self, name: &str) -> DatasetResult<&[f64]> {
        let column = self
            .column(name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;

        match &column.data {
            ColumnData::Numeric(values) => Ok(values),
            ColumnData::Text(_) => Err(DatasetError::NotNumeric(name.to_string())),
        }
    }

    /// Check that every named column exists and is numeric
    pub fn require_numeric(&self, names: &[&str]) -> DatasetResult<()> {
        for name in names {
            self.numeric(name)?;
        }
        Ok(())
    }

    /// Borrow one record as cells in column order
    pub fn row(&self, index: usize) -> Option<Vec<Cell<'_>>> {
        if index >= self.row_count {
            return None;
        }
        self.columns.iter().map(|c| c.cell(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_columns(vec![
            Column::numeric("longitude", vec![-122.23, -122.22]),
            Column::numeric("latitude", vec![37.88, 37.86]),
            Column::text("ocean_proximity", vec!["NEAR BAY".into(), "NEAR BAY".into()]),
            Column::numeric("population", vec![322.0, 2401.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_numeric_column_names_keep_native_order() {
        let ds = sample();
        assert_eq!(
            ds.numeric_column_names(),
            vec!["longitude", "latitude", "population"]
        );
    }

    #[test]
    fn test_numeric_lookup_errors() {
        let ds = sample();
        assert!(matches!(
            ds.numeric("median_income"),
            Err(DatasetError::MissingColumn(_))
        ));
        assert!(matches!(
            ds.numeric("ocean_proximity"),
            Err(DatasetError::NotNumeric(_))
        ));
        assert_eq!(ds.numeric("population").unwrap(), &[322.0, 2401.0]);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = Dataset::from_columns(vec![
            Column::numeric("a", vec![1.0, 2.0]),
            Column::numeric("b", vec![1.0]),
        ]);
        assert!(matches!(result, Err(DatasetError::LengthMismatch { .. })));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Dataset::from_columns(vec![
            Column::numeric("a", vec![1.0]),
            Column::numeric("a", vec![2.0]),
        ]);
        assert!(matches!(result, Err(DatasetError::DuplicateColumn(_))));
    }

    #[test]
    fn test_row_serializes_missing_as_null() {
        let ds = Dataset::from_columns(vec![
            Column::numeric("total_bedrooms", vec![f64::NAN]),
            Column::text("ocean_proximity", vec!["INLAND".into()]),
        ])
        .unwrap();

        let row = ds.row(0).unwrap();
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[null,"INLAND"]"#);
        assert!(ds.row(1).is_none());
    }
}
