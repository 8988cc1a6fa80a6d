//! Loading configuration and input tables for the subcommands.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::info;

use ember_aggregate::Observation;
use ember_io::{read_long, read_series, read_wide};
use ember_race::{CountryTotals, SectorRow};
use ember_trend::EmissionsHistory;

use crate::config::EmberConfig;
use crate::convert;

/// Reads and parses the TOML configuration file.
pub fn config(path: &Path) -> Result<EmberConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Loads observations of one measure from `[data].measurements`.
///
/// The measure is `requested`, else `[change].measure`, else the table's
/// only measure column.
pub fn observations(config: &EmberConfig, requested: Option<&str>) -> Result<Vec<Observation>> {
    let path = config
        .data
        .measurements
        .as_ref()
        .ok_or_else(|| anyhow!("no measurements table: set [data].measurements in config"))?;
    let wanted = requested.or(config.change.measure.as_deref());
    let long_cfg = convert::build_long_config(&config.data, wanted);

    let table = read_long(path, &long_cfg)
        .with_context(|| format!("failed to read measurements: {}", path.display()))?;
    let measure = match wanted {
        Some(m) => m.to_string(),
        None => {
            let names: Vec<&str> = table.measure_names().collect();
            match names.as_slice() {
                [only] => only.to_string(),
                _ => bail!("choose a measure with --measure or [change].measure (available: {names:?})"),
            }
        }
    };
    info!(measure = %measure, n_rows = table.len(), "measurements loaded");
    table
        .observations(&measure)
        .ok_or_else(|| anyhow!("measure '{measure}' not loaded from {}", path.display()))
}

/// Loads the per-country totals table from `[data].totals`.
pub fn totals(config: &EmberConfig) -> Result<Vec<CountryTotals>> {
    let path = config
        .data
        .totals
        .as_ref()
        .ok_or_else(|| anyhow!("no totals table: set [data].totals in config"))?;
    let rows = read_wide(path, &convert::build_wide_config(&config.data, false))
        .with_context(|| format!("failed to read totals: {}", path.display()))?;
    Ok(rows
        .into_iter()
        .map(|r| CountryTotals::new(r.name, r.code, r.values))
        .collect())
}

/// Loads the per-sector table from `[data].sectors`.
pub fn sectors(config: &EmberConfig) -> Result<Vec<SectorRow>> {
    let path = config
        .data
        .sectors
        .as_ref()
        .ok_or_else(|| anyhow!("no sector table: set [data].sectors in config"))?;
    let rows = read_wide(path, &convert::build_wide_config(&config.data, true))
        .with_context(|| format!("failed to read sectors: {}", path.display()))?;
    Ok(rows
        .into_iter()
        .map(|r| SectorRow::new(r.code, r.name, r.sector.unwrap_or_default(), r.values))
        .collect())
}

/// Loads the projection history from `[data].history`, falling back to the
/// inline `[projection].history`.
pub fn history(config: &EmberConfig) -> Result<EmissionsHistory> {
    let points = match &config.data.history {
        Some(path) => read_series(
            path,
            &config.data.history_year_column,
            &config.data.history_value_column,
        )
        .with_context(|| format!("failed to read history: {}", path.display()))?,
        None if !config.projection.history.is_empty() => config.projection.history.clone(),
        None => bail!("no history: set [data].history or [projection].history in config"),
    };
    EmissionsHistory::new(points).context("invalid emissions history")
}
