//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use ember_aggregate::Period;
use ember_change::ChangeConfig;
use ember_io::{LongTableConfig, WideTableConfig};
use ember_race::RaceConfig;
use ember_trend::{MAX_PATH_SPAN_YEARS, ProjectionModel, TargetPathConfig};

/// Parses a projection model name into the corresponding enum variant.
pub fn parse_model(s: &str) -> Result<ProjectionModel> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "linear" | "bau" => Ok(ProjectionModel::Linear),
        "faster-cut" => Ok(ProjectionModel::FasterCut),
        other => bail!("unknown projection model: {other:?}"),
    }
}

/// Converts a TOML period into a [`Period`].
pub fn parse_period(p: &PeriodToml) -> Result<Period> {
    match p.month {
        None => Ok(Period::Year(p.year)),
        Some(m @ 1..=12) => Ok(Period::YearMonth(p.year, m)),
        Some(m) => bail!("month must be in 1..=12, got {m}"),
    }
}

/// Short label for a period: `2014` or `2014-07`.
pub fn period_label(p: Period) -> String {
    match p {
        Period::Year(y) => y.to_string(),
        Period::YearMonth(y, m) => format!("{y}-{m:02}"),
    }
}

/// Builds a [`LongTableConfig`] from the `[data]` section. An empty month
/// column name means the table is yearly.
pub fn build_long_config(data: &DataToml, measure: Option<&str>) -> LongTableConfig {
    let month = (!data.month_column.is_empty()).then(|| data.month_column.clone());
    let cfg = LongTableConfig::default()
        .with_group_column(&data.group_column)
        .with_year_column(&data.year_column)
        .with_month_column(month);
    match measure {
        Some(m) => cfg.with_measures([m]),
        None => cfg,
    }
}

/// Builds a [`WideTableConfig`] for the totals table, or for the sector
/// table when `sectors` is set.
pub fn build_wide_config(data: &DataToml, sectors: bool) -> WideTableConfig {
    let cfg = WideTableConfig::default()
        .with_name_column(&data.name_column)
        .with_code_column(&data.code_column);
    if sectors {
        cfg.with_sector_column(Some(data.sector_column.clone()))
    } else {
        cfg
    }
}

/// Builds a [`ChangeConfig`] from the `[change]` section.
pub fn build_change_config(change: &ChangeToml) -> Result<ChangeConfig> {
    let cfg = ChangeConfig::default().with_epsilon(change.epsilon);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`TargetPathConfig`] from the `[projection]` section, with the
/// reference value taken from the history.
pub fn build_target_config(
    projection: &ProjectionToml,
    reference_value: f64,
) -> Result<TargetPathConfig> {
    if projection.end_year < projection.reference_year {
        bail!(
            "end_year ({}) must not precede reference_year ({})",
            projection.end_year,
            projection.reference_year
        );
    }
    let series_span = i64::from(projection.end_year) - i64::from(projection.reference_year);
    if series_span > i64::from(MAX_PATH_SPAN_YEARS) {
        bail!(
            "end_year ({}) is more than {MAX_PATH_SPAN_YEARS} years after reference_year ({})",
            projection.end_year,
            projection.reference_year
        );
    }
    let cfg = TargetPathConfig::new(
        reference_value,
        projection.reference_year,
        projection.plateau_end_year,
        projection.target_year,
        projection.target_fraction,
    );
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`RaceConfig`] from the `[race]` section.
pub fn build_race_config(race: &RaceToml) -> Result<RaceConfig> {
    let cfg = RaceConfig::default()
        .with_top_n(race.top_n)
        .with_excluded(race.excluded.iter().cloned())
        .with_global_total_label(&race.global_total_label);
    cfg.validate()?;
    Ok(cfg)
}
