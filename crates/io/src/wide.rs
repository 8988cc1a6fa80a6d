//! Wide tables: name/code columns plus one column per year.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cell;
use crate::error::IoError;

/// Column layout of a wide emissions table.
///
/// Defaults follow the EDGAR country exports: `Country`,
/// `EDGAR Country Code`, and no sector column. Year columns are detected
/// from headers made of exactly four digits.
#[derive(Debug, Clone)]
pub struct WideTableConfig {
    name_column: String,
    code_column: String,
    sector_column: Option<String>,
}

impl Default for WideTableConfig {
    fn default() -> Self {
        Self {
            name_column: "Country".into(),
            code_column: "EDGAR Country Code".into(),
            sector_column: None,
        }
    }
}

impl WideTableConfig {
    /// Set the display-name column.
    pub fn with_name_column(mut self, name: impl Into<String>) -> Self {
        self.name_column = name.into();
        self
    }

    /// Set the country-code column.
    pub fn with_code_column(mut self, name: impl Into<String>) -> Self {
        self.code_column = name.into();
        self
    }

    /// Set the sector column for per-sector tables.
    pub fn with_sector_column(mut self, name: Option<String>) -> Self {
        self.sector_column = name;
        self
    }

    /// Returns the display-name column.
    pub fn name_column(&self) -> &str {
        &self.name_column
    }

    /// Returns the country-code column.
    pub fn code_column(&self) -> &str {
        &self.code_column
    }

    /// Returns the sector column, if any.
    pub fn sector_column(&self) -> Option<&str> {
        self.sector_column.as_deref()
    }
}

/// One row of a wide table.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    /// Display name.
    pub name: String,
    /// Country code.
    pub code: String,
    /// Sector label, when the table has a sector column.
    pub sector: Option<String>,
    /// Value per year column; `None` for empty or non-numeric cells.
    pub values: BTreeMap<i32, Option<f64>>,
}

/// Reads a wide table from `path`.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if the file does not exist.
/// - [`IoError::MissingColumn`] if a configured column is absent.
/// - [`IoError::Validation`] if the header has no four-digit year column.
/// - [`IoError::Csv`] on a malformed CSV record.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_wide(path: &Path, config: &WideTableConfig) -> Result<Vec<WideRow>, IoError> {
    let mut reader = cell::open(path)?;
    let headers = reader.headers()?.clone();

    let name_idx = cell::column(&headers, config.name_column(), path)?;
    let code_idx = cell::column(&headers, config.code_column(), path)?;
    let sector_idx = config
        .sector_column()
        .map(|s| cell::column(&headers, s, path))
        .transpose()?;

    let year_cols: Vec<(i32, usize)> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| cell::is_year_header(h.trim()))
        .filter_map(|(i, h)| h.trim().parse::<i32>().ok().map(|y| (y, i)))
        .collect();
    if year_cols.is_empty() {
        return Err(IoError::Validation {
            count: 1,
            details: format!("no year columns in {}", path.display()),
        });
    }
    debug!(
        first_year = year_cols.iter().map(|(y, _)| *y).min(),
        last_year = year_cols.iter().map(|(y, _)| *y).max(),
        "detected year columns"
    );

    let mut rows = Vec::new();
    let mut n_unnamed = 0usize;
    for record in reader.records() {
        let record = record?;
        let get = |i: usize| record.get(i).unwrap_or("").trim();
        let name = get(name_idx);
        if name.is_empty() && get(code_idx).is_empty() {
            n_unnamed += 1;
            continue;
        }
        rows.push(WideRow {
            name: name.to_string(),
            code: get(code_idx).to_string(),
            sector: sector_idx.map(|i| get(i).to_string()),
            values: year_cols
                .iter()
                .map(|&(y, i)| (y, cell::parse_value(get(i))))
                .collect(),
        });
    }
    if n_unnamed > 0 {
        warn!(n_unnamed, "skipped rows with neither name nor code");
    }

    info!(n_rows = rows.len(), n_years = year_cols.len(), "loaded wide table");
    Ok(rows)
}
