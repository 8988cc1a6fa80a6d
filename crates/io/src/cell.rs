//! Cell parsing and header lookup helpers.

use std::path::Path;

use csv::StringRecord;

use crate::error::IoError;

/// Parses a measure cell. Empty, non-numeric and non-finite cells are
/// missing.
pub(crate) fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses an integer cell, accepting a float form with no fractional part
/// (`"2014.0"`).
pub(crate) fn parse_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(y) = trimmed.parse::<i32>() {
        return Some(y);
    }
    let f = trimmed.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= i32::MAX as f64).then_some(f as i32)
}

/// Returns `true` for headers made of exactly four ASCII digits.
pub(crate) fn is_year_header(header: &str) -> bool {
    header.len() == 4 && header.bytes().all(|b| b.is_ascii_digit())
}

/// Index of `name` in `headers`, or [`IoError::MissingColumn`].
pub(crate) fn column(headers: &StringRecord, name: &str, path: &Path) -> Result<usize, IoError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

/// Opens a CSV reader with headers, checking that the file exists first.
pub(crate) fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)?)
}

/// Line number of a record for error messages.
pub(crate) fn line_of(record: &StringRecord, fallback: u64) -> u64 {
    record.position().map_or(fallback, |p| p.line())
}
