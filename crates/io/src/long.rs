//! Long measurement tables: one row per group and period.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use ember_aggregate::Observation;
use tracing::{debug, info};

use crate::cell;
use crate::error::IoError;
use crate::validate::{self, ValidationCollector};

/// Column layout of a long measurement table.
///
/// The [`Default`] implementation matches the monthly state-level MODIS
/// export (`NAME`, `year`, `month`) and reads every other column as a
/// measure.
#[derive(Debug, Clone)]
pub struct LongTableConfig {
    group_column: String,
    year_column: String,
    month_column: Option<String>,
    measures: Vec<String>,
}

impl Default for LongTableConfig {
    fn default() -> Self {
        Self {
            group_column: "NAME".into(),
            year_column: "year".into(),
            month_column: Some("month".into()),
            measures: Vec::new(),
        }
    }
}

impl LongTableConfig {
    /// Set the group key column.
    pub fn with_group_column(mut self, name: impl Into<String>) -> Self {
        self.group_column = name.into();
        self
    }

    /// Set the year column.
    pub fn with_year_column(mut self, name: impl Into<String>) -> Self {
        self.year_column = name.into();
        self
    }

    /// Set the month column, or `None` for yearly tables.
    pub fn with_month_column(mut self, name: Option<String>) -> Self {
        self.month_column = name;
        self
    }

    /// Restrict loading to the named measure columns. An empty list loads
    /// every non-key column.
    pub fn with_measures<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.measures = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the group key column.
    pub fn group_column(&self) -> &str {
        &self.group_column
    }

    /// Returns the year column.
    pub fn year_column(&self) -> &str {
        &self.year_column
    }

    /// Returns the month column, if the table is monthly.
    pub fn month_column(&self) -> Option<&str> {
        self.month_column.as_deref()
    }

    /// Returns the requested measure columns; empty means all.
    pub fn measures(&self) -> &[String] {
        &self.measures
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if any column name is empty, the
    /// key columns are not distinct, or a measure is listed twice.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if self.group_column.is_empty() {
            c.push("group_column must not be empty");
        }
        if self.year_column.is_empty() {
            c.push("year_column must not be empty");
        }
        if self.group_column == self.year_column {
            c.push("group_column and year_column must differ");
        }
        if let Some(m) = &self.month_column
            && (m.is_empty() || *m == self.group_column || *m == self.year_column)
        {
            c.push("month_column must be non-empty and distinct from the key columns");
        }
        let mut seen = BTreeSet::new();
        for m in &self.measures {
            if self.is_key(m) {
                c.push(format!("measure '{m}' is also a key column"));
            }
            if !seen.insert(m.as_str()) {
                c.push(format!("measure '{m}' is listed twice"));
            }
        }
        c.finish()
    }

    fn is_key(&self, name: &str) -> bool {
        name == self.group_column
            || name == self.year_column
            || self.month_column.as_deref() == Some(name)
    }
}

/// A loaded long table: key columns plus one value vector per measure.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    groups: Vec<String>,
    years: Vec<i32>,
    months: Vec<Option<u8>>,
    measures: BTreeMap<String, Vec<Option<f64>>>,
}

impl MeasurementTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Names of the loaded measures, sorted.
    pub fn measure_names(&self) -> impl Iterator<Item = &str> {
        self.measures.keys().map(String::as_str)
    }

    /// Builds one [`Observation`] per row for `measure`, or `None` if the
    /// measure was not loaded.
    pub fn observations(&self, measure: &str) -> Option<Vec<Observation>> {
        let values = self.measures.get(measure)?;
        Some(
            self.groups
                .iter()
                .zip(&self.years)
                .zip(&self.months)
                .zip(values)
                .map(|(((g, &y), &m), &v)| Observation::new(g.as_str(), y, m, v))
                .collect(),
        )
    }
}

/// Reads a long measurement table from `path`.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if the file does not exist.
/// - [`IoError::MissingColumn`] if a key column or requested measure is
///   absent.
/// - [`IoError::Validation`] if the configuration is invalid, if a measure
///   column name appears more than once in the header, or listing every row
///   whose year or month cell is malformed.
/// - [`IoError::Csv`] on a malformed CSV record.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_long(path: &Path, config: &LongTableConfig) -> Result<MeasurementTable, IoError> {
    config.validate()?;
    let mut reader = cell::open(path)?;
    let headers = reader.headers()?.clone();

    let group_idx = cell::column(&headers, config.group_column(), path)?;
    let year_idx = cell::column(&headers, config.year_column(), path)?;
    let month_idx = config
        .month_column()
        .map(|m| cell::column(&headers, m, path))
        .transpose()?;

    let measure_cols: Vec<(String, usize)> = if config.measures().is_empty() {
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .filter(|(h, _)| !config.is_key(h))
            .collect()
    } else {
        config
            .measures()
            .iter()
            .map(|m| cell::column(&headers, m, path).map(|i| (m.clone(), i)))
            .collect::<Result<_, _>>()?
    };
    let mut seen = BTreeSet::new();
    let mut duplicates = ValidationCollector::new();
    for (name, _) in &measure_cols {
        if !seen.insert(name.as_str()) {
            duplicates.push(format!("duplicate measure column '{name}'"));
        }
    }
    duplicates.finish()?;
    debug!(n_measures = measure_cols.len(), "resolved columns");

    let mut groups = Vec::new();
    let mut years = Vec::new();
    let mut months = Vec::new();
    let mut measures: BTreeMap<String, Vec<Option<f64>>> = measure_cols
        .iter()
        .map(|(name, _)| (name.clone(), Vec::new()))
        .collect();
    let mut collector = ValidationCollector::new();

    for (n, record) in reader.records().enumerate() {
        let record = record?;
        let line = cell::line_of(&record, n as u64 + 2);
        let get = |i: usize| record.get(i).unwrap_or("");

        let Some(year) = validate::require_year(&mut collector, line, get(year_idx)) else {
            continue;
        };
        let month = month_idx.and_then(|i| validate::optional_month(&mut collector, line, get(i)));

        groups.push(get(group_idx).trim().to_string());
        years.push(year);
        months.push(month);
        for (name, idx) in &measure_cols {
            if let Some(col) = measures.get_mut(name) {
                col.push(cell::parse_value(get(*idx)));
            }
        }
    }
    collector.finish()?;

    info!(n_rows = groups.len(), "loaded long table");
    Ok(MeasurementTable {
        groups,
        years,
        months,
        measures,
    })
}
