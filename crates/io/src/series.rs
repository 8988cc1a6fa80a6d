//! Year/value series.

use std::path::Path;

use tracing::info;

use crate::cell;
use crate::error::IoError;
use crate::validate::{self, ValidationCollector};

/// Reads `(year, value)` pairs from two columns of a CSV file.
///
/// Rows with a missing value are skipped; a malformed year is a validation
/// error. Pairs are returned in file order.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if the file does not exist.
/// - [`IoError::MissingColumn`] if either column is absent.
/// - [`IoError::Validation`] listing every malformed year cell.
/// - [`IoError::Csv`] on a malformed CSV record.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_series(
    path: &Path,
    year_column: &str,
    value_column: &str,
) -> Result<Vec<(i32, f64)>, IoError> {
    let mut reader = cell::open(path)?;
    let headers = reader.headers()?.clone();
    let year_idx = cell::column(&headers, year_column, path)?;
    let value_idx = cell::column(&headers, value_column, path)?;

    let mut points = Vec::new();
    let mut n_missing = 0usize;
    let mut collector = ValidationCollector::new();
    for (n, record) in reader.records().enumerate() {
        let record = record?;
        let line = cell::line_of(&record, n as u64 + 2);
        let year = validate::require_year(&mut collector, line, record.get(year_idx).unwrap_or(""));
        match (year, cell::parse_value(record.get(value_idx).unwrap_or(""))) {
            (Some(y), Some(v)) => points.push((y, v)),
            (Some(_), None) => n_missing += 1,
            (None, _) => {}
        }
    }
    collector.finish()?;

    info!(n_points = points.len(), n_missing, "loaded series");
    Ok(points)
}
