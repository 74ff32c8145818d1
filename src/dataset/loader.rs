//! CSV Loader
//!
//! Reads the housing CSV into a typed `Dataset`.
//! Column types are inferred: a column is numeric when every non-empty cell
//! parses as a number, otherwise it is text.

use std::io::Read;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{Column, Dataset, REQUIRED_COLUMNS};

/// Maximum number of row errors kept for reporting
const MAX_REPORTED_ERRORS: usize = 100;

/// CSV loader with configurable schema requirements
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    /// Columns that must be present and numeric
    required_columns: Vec<String>,
    /// Field delimiter
    delimiter: u8,
}

/// Result of a load operation
#[derive(Debug)]
pub struct LoadReport {
    pub dataset: Dataset,
    pub rows_loaded: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Create a loader that requires the map fields
    pub fn new() -> Self {
        Self {
            required_columns: REQUIRED_COLUMNS.iter().map(|s| s.to_string()).collect(),
            delimiter: b',',
        }
    }

    /// Replace the set of required numeric columns
    pub fn with_required_columns(mut self, columns: &[&str]) -> Self {
        self.required_columns = columns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load the dataset from a CSV file
    pub fn load(&self, path: &Path) -> DatasetResult<LoadReport> {
        let file = std::fs::File::open(path).map_err(|error| DatasetError::Io {
            path: path.to_path_buf(),
            error,
        })?;

        tracing::debug!(path = ?path, "Reading dataset");
        self.read(file)
    }

    /// Load the dataset from a CSV string (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> DatasetResult<LoadReport> {
        self.read(csv_data.as_bytes())
    }

    fn read<R: Read>(&self, source: R) -> DatasetResult<LoadReport> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut rows_loaded = 0;
        let mut rows_failed = 0;
        let mut errors = Vec::new();

        for (line_num, result) in reader.records().enumerate() {
            // header is line 1
            let actual_line = line_num + 2;

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    errors.push(format!("Line {}: {}", actual_line, e));
                    rows_failed += 1;
                    continue;
                }
            };

            if record.len() != headers.len() {
                errors.push(format!(
                    "Line {}: expected {} fields, found {}",
                    actual_line,
                    headers.len(),
                    record.len()
                ));
                rows_failed += 1;
                continue;
            }

            for (column, value) in cells.iter_mut().zip(record.iter()) {
                column.push(value.trim().to_string());
            }
            rows_loaded += 1;
        }

        if rows_loaded == 0 {
            return Err(DatasetError::Empty);
        }

        if rows_failed > 0 {
            tracing::warn!(rows_failed, "Skipped malformed dataset rows");
        }

        if errors.len() > MAX_REPORTED_ERRORS {
            let total = errors.len();
            errors.truncate(MAX_REPORTED_ERRORS);
            errors.push(format!("... and {} more errors", total - MAX_REPORTED_ERRORS));
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, values)| infer_column(name, values))
            .collect();

        let dataset = Dataset::from_columns(columns)?;

        let required: Vec<&str> = self.required_columns.iter().map(|s| s.as_str()).collect();
        dataset.require_numeric(&required)?;

        tracing::info!(
            rows = rows_loaded,
            columns = dataset.columns().len(),
            numeric_columns = dataset.numeric_column_names().len(),
            "Dataset loaded"
        );

        Ok(LoadReport {
            dataset,
            rows_loaded,
            rows_failed,
            errors,
        })
    }
}

/// Build a typed column from raw cells
fn infer_column(name: String, values: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = values
        .iter()
        .map(|v| {
            if v.is_empty() {
                Some(f64::NAN)
            } else {
                v.parse::<f64>().ok()
            }
        })
        .collect();

    match parsed {
        Some(numbers) => Column::numeric(name, numbers),
        None => Column::text(name, values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HOUSING: &str = "\
longitude,latitude,housing_median_age,total_rooms,total_bedrooms,population,households,median_income,median_house_value,ocean_proximity
-122.23,37.88,41.0,880.0,129.0,322.0,126.0,8.3252,452600.0,NEAR BAY
-122.22,37.86,21.0,7099.0,1106.0,2401.0,1138.0,8.3014,358500.0,NEAR BAY
-122.24,37.85,52.0,1467.0,,496.0,177.0,7.2574,352100.0,NEAR BAY";

    #[test]
    fn test_load_housing_columns() {
        let report = DatasetLoader::new().load_str(HOUSING).unwrap();

        assert_eq!(report.rows_loaded, 3);
        assert_eq!(report.rows_failed, 0);

        let ds = report.dataset;
        assert_eq!(ds.row_count(), 3);
        assert_eq!(
            ds.numeric_column_names(),
            vec![
                "longitude",
                "latitude",
                "housing_median_age",
                "total_rooms",
                "total_bedrooms",
                "population",
                "households",
                "median_income",
                "median_house_value",
            ]
        );
        assert!(!ds.column("ocean_proximity").unwrap().is_numeric());
    }

    #[test]
    fn test_empty_numeric_cell_is_nan() {
        let ds = DatasetLoader::new().load_str(HOUSING).unwrap().dataset;
        let bedrooms = ds.numeric("total_bedrooms").unwrap();
        assert_eq!(bedrooms[0], 129.0);
        assert!(bedrooms[2].is_nan());
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let csv = "\
latitude,longitude,median_house_value,population
37.88,-122.23,452600.0,322.0
37.86,-122.22
37.85,-122.24,352100.0,496.0";

        let report = DatasetLoader::new().load_str(csv).unwrap();
        assert_eq!(report.rows_loaded, 2);
        assert_eq!(report.rows_failed, 1);
        assert!(report.errors[0].starts_with("Line 3:"));
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "latitude,longitude,population\n37.88,-122.23,322.0";
        let result = DatasetLoader::new().load_str(csv);
        assert!(matches!(
            result,
            Err(DatasetError::MissingColumn(name)) if name == "median_house_value"
        ));
    }

    #[test]
    fn test_required_column_must_be_numeric() {
        let csv = "latitude,longitude,median_house_value,population\n37.88,-122.23,high,322.0";
        let result = DatasetLoader::new().load_str(csv);
        assert!(matches!(result, Err(DatasetError::NotNumeric(_))));
    }

    #[test]
    fn test_no_rows() {
        let csv = "latitude,longitude,median_house_value,population\n";
        let result = DatasetLoader::new().load_str(csv);
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_custom_requirements() {
        let csv = "a;b\n1;x\n2;y";
        let ds = DatasetLoader::new()
            .with_required_columns(&["a"])
            .with_delimiter(b';')
            .load_str(csv)
            .unwrap()
            .dataset;
        assert_eq!(ds.numeric_column_names(), vec!["a"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HOUSING.as_bytes()).unwrap();

        let report = DatasetLoader::new().load(file.path()).unwrap();
        assert_eq!(report.dataset.row_count(), 3);
    }

    #[test]
    fn test_load_bundled_sample() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/housing_sample.csv");
        let report = DatasetLoader::new().load(&path).unwrap();

        assert_eq!(report.rows_failed, 0);
        assert_eq!(report.dataset.row_count(), 21);
        assert_eq!(report.dataset.numeric_column_names().len(), 9);
    }

    #[test]
    fn test_missing_file() {
        let result = DatasetLoader::new().load(Path::new("/nonexistent/housing.csv"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
