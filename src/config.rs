use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Ember configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EmberConfig {
    /// Input files and column layout.
    #[serde(default)]
    pub data: DataToml,

    /// Baseline/latest comparison settings.
    #[serde(default)]
    pub change: ChangeToml,

    /// Projection and target-path settings.
    #[serde(default)]
    pub projection: ProjectionToml,

    /// Bar-race settings.
    #[serde(default)]
    pub race: RaceToml,

    /// Autoplay settings.
    #[serde(default)]
    pub playback: PlaybackToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    /// Long measurement table (one row per group and period).
    pub measurements: Option<PathBuf>,
    #[serde(default = "default_group_column")]
    pub group_column: String,
    #[serde(default = "default_year_column")]
    pub year_column: String,
    /// Month column; set to `""` for yearly tables.
    #[serde(default = "default_month_column")]
    pub month_column: String,

    /// Wide table of yearly totals per country.
    pub totals: Option<PathBuf>,
    /// Wide table of yearly values per country and sector.
    pub sectors: Option<PathBuf>,
    #[serde(default = "default_name_column")]
    pub name_column: String,
    #[serde(default = "default_code_column")]
    pub code_column: String,
    #[serde(default = "default_sector_column")]
    pub sector_column: String,

    /// Year/value series used for projections.
    pub history: Option<PathBuf>,
    #[serde(default = "default_year_column")]
    pub history_year_column: String,
    #[serde(default = "default_history_value_column")]
    pub history_value_column: String,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            measurements: None,
            group_column: default_group_column(),
            year_column: default_year_column(),
            month_column: default_month_column(),
            totals: None,
            sectors: None,
            name_column: default_name_column(),
            code_column: default_code_column(),
            sector_column: default_sector_column(),
            history: None,
            history_year_column: default_year_column(),
            history_value_column: default_history_value_column(),
        }
    }
}

fn default_group_column() -> String {
    "NAME".to_string()
}
fn default_year_column() -> String {
    "year".to_string()
}
fn default_month_column() -> String {
    "month".to_string()
}
fn default_name_column() -> String {
    "Country".to_string()
}
fn default_code_column() -> String {
    "EDGAR Country Code".to_string()
}
fn default_sector_column() -> String {
    "Sector".to_string()
}
fn default_history_value_column() -> String {
    "value".to_string()
}

/// One side of a baseline/latest comparison.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    pub year: i32,
    #[serde(default)]
    pub month: Option<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeToml {
    /// Measure column compared between the two periods.
    pub measure: Option<String>,
    pub baseline: Option<PeriodToml>,
    pub latest: Option<PeriodToml>,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for ChangeToml {
    fn default() -> Self {
        Self {
            measure: None,
            baseline: None,
            latest: None,
            epsilon: default_epsilon(),
        }
    }
}

fn default_epsilon() -> f64 {
    ember_stats::DEFAULT_EPSILON
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionToml {
    /// Inline `[year, value]` history; used when `[data].history` is unset.
    #[serde(default)]
    pub history: Vec<(i32, f64)>,
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
    #[serde(default = "default_plateau_end_year")]
    pub plateau_end_year: i32,
    #[serde(default = "default_target_year")]
    pub target_year: i32,
    #[serde(default = "default_target_fraction")]
    pub target_fraction: f64,
    /// `"linear"` or `"faster-cut"`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Last year of the projection series.
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

impl Default for ProjectionToml {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            reference_year: default_reference_year(),
            plateau_end_year: default_plateau_end_year(),
            target_year: default_target_year(),
            target_fraction: default_target_fraction(),
            model: default_model(),
            end_year: default_end_year(),
        }
    }
}

fn default_reference_year() -> i32 {
    2019
}
fn default_plateau_end_year() -> i32 {
    2025
}
fn default_target_year() -> i32 {
    2030
}
fn default_target_fraction() -> f64 {
    0.57
}
fn default_model() -> String {
    "linear".to_string()
}
fn default_end_year() -> i32 {
    2030
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RaceToml {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
    #[serde(default = "default_global_total_label")]
    pub global_total_label: String,
    #[serde(default = "default_sector_order")]
    pub sector_order: Vec<String>,
}

impl Default for RaceToml {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            excluded: default_excluded(),
            global_total_label: default_global_total_label(),
            sector_order: default_sector_order(),
        }
    }
}

fn default_top_n() -> usize {
    18
}
fn default_excluded() -> Vec<String> {
    vec!["EU27".to_string(), "International Shipping".to_string()]
}
fn default_global_total_label() -> String {
    "GLOBAL TOTAL".to_string()
}
fn default_sector_order() -> Vec<String> {
    ember_race::DEFAULT_SECTOR_ORDER
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybackToml {
    /// Autoplay step in milliseconds.
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

impl Default for PlaybackToml {
    fn default() -> Self {
        Self {
            period_ms: default_period_ms(),
        }
    }
}

fn default_period_ms() -> u64 {
    400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: EmberConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.data.group_column, "NAME");
        assert_eq!(cfg.data.month_column, "month");
        assert!(cfg.data.measurements.is_none());
        assert_eq!(cfg.change.epsilon, 1e-6);
        assert_eq!(cfg.projection.reference_year, 2019);
        assert_eq!(cfg.projection.target_fraction, 0.57);
        assert_eq!(cfg.race.top_n, 18);
        assert_eq!(cfg.race.sector_order.len(), 8);
        assert_eq!(cfg.playback.period_ms, 400);
    }

    #[test]
    fn parses_full_file() {
        let src = r#"
            [data]
            measurements = "data/modis_all_years.csv"
            month_column = ""
            history = "data/global.csv"
            history_value_column = "total"

            [change]
            measure = "NDVI"
            baseline = { year = 2014 }
            latest = { year = 2024, month = 7 }

            [projection]
            history = [[2019, 55.9], [2024, 57.8]]
            model = "faster-cut"
            end_year = 2035

            [race]
            top_n = 10
            excluded = []

            [playback]
            period_ms = 350
        "#;
        let cfg: EmberConfig = toml::from_str(src).unwrap();
        assert_eq!(cfg.data.month_column, "");
        assert_eq!(cfg.data.history_value_column, "total");
        assert_eq!(cfg.change.measure.as_deref(), Some("NDVI"));
        assert_eq!(
            cfg.change.latest,
            Some(PeriodToml {
                year: 2024,
                month: Some(7)
            })
        );
        assert_eq!(cfg.projection.history, vec![(2019, 55.9), (2024, 57.8)]);
        assert_eq!(cfg.projection.model, "faster-cut");
        assert!(cfg.race.excluded.is_empty());
        assert_eq!(cfg.playback.period_ms, 350);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = toml::from_str::<EmberConfig>("[race]\ntop = 3\n").unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }
}
