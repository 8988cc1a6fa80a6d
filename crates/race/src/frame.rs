//! Ranked frames for the bar race.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::config::RaceConfig;
use crate::error::RaceError;
use crate::table::CountryTotals;

/// One ranked country in a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceEntry {
    /// 1-based rank.
    pub rank: usize,
    /// Country name.
    pub name: String,
    /// Country code.
    pub code: String,
    /// Emissions in the frame year.
    pub value: f64,
    /// Share of the frame total in percent; absent when the total is not
    /// positive.
    pub share_pct: Option<f64>,
}

/// The ranked top emitters of one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceFrame {
    year: i32,
    total: Option<f64>,
    entries: Vec<RaceEntry>,
}

impl RaceFrame {
    /// Returns the frame year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the total used for shares, if any.
    pub fn total(&self) -> Option<f64> {
        self.total
    }

    /// Returns the ranked entries, largest first.
    pub fn entries(&self) -> &[RaceEntry] {
        &self.entries
    }

    /// Returns the largest value in the frame, or 1.0 for an empty frame.
    pub fn max_value(&self) -> f64 {
        self.entries.first().map_or(1.0, |e| e.value)
    }
}

fn is_global_total(row: &CountryTotals, label: &str) -> bool {
    row.name() == label || row.code() == label
}

/// Builds the ranked frame for `year`.
///
/// Rows with a missing or non-positive value for the year are skipped, as are
/// the configured aggregate names. The global-total row, when present with a
/// positive value, supplies the share denominator; otherwise the sum of all
/// included countries is used.
///
/// # Errors
///
/// Returns [`RaceError::InvalidConfig`] if `config` fails validation.
pub fn race_frame(
    rows: &[CountryTotals],
    year: i32,
    config: &RaceConfig,
) -> Result<RaceFrame, RaceError> {
    config.validate()?;
    let label = config.global_total_label();

    let mut global = None;
    let mut entries = Vec::new();
    for row in rows {
        let Some(value) = row.value(year).filter(|v| *v > 0.0) else {
            continue;
        };
        if is_global_total(row, label) {
            global = Some(value);
            continue;
        }
        if config.is_excluded(row.name()) {
            continue;
        }
        entries.push(RaceEntry {
            rank: 0,
            name: row.name().to_string(),
            code: row.code().to_string(),
            value,
            share_pct: None,
        });
    }

    let total = global.or_else(|| ember_stats::sum(entries.iter().map(|e| e.value)));

    entries.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(config.top_n());
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
        entry.share_pct = total
            .filter(|t| *t > 0.0)
            .map(|t| entry.value / t * 100.0);
    }

    debug!(
        year,
        n_entries = entries.len(),
        from_global_row = global.is_some(),
        "built race frame"
    );
    Ok(RaceFrame {
        year,
        total,
        entries,
    })
}

/// Sorted distinct years for which any row has a value.
pub fn race_years(rows: &[CountryTotals]) -> Vec<i32> {
    let years: BTreeSet<i32> = rows
        .iter()
        .flat_map(|row| row.years().filter(|y| row.value(*y).is_some()))
        .collect();
    years.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::BTreeMap;

    fn row(name: &str, code: &str, values: &[(i32, Option<f64>)]) -> CountryTotals {
        CountryTotals::new(name, code, values.iter().copied().collect::<BTreeMap<_, _>>())
    }

    #[test]
    fn ranks_descending_with_name_ties() {
        let rows = vec![
            row("Brazil", "BRA", &[(2020, Some(5.0))]),
            row("Austria", "AUT", &[(2020, Some(5.0))]),
            row("China", "CHN", &[(2020, Some(12.0))]),
        ];
        let frame = race_frame(&rows, 2020, &RaceConfig::default()).unwrap();
        let names: Vec<_> = frame.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["China", "Austria", "Brazil"]);
        let ranks: Vec<_> = frame.entries().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
        assert_relative_eq!(frame.max_value(), 12.0);
    }

    #[test]
    fn skips_missing_and_non_positive() {
        let rows = vec![
            row("A", "A", &[(2020, None)]),
            row("B", "B", &[(2020, Some(0.0))]),
            row("C", "C", &[(2020, Some(-1.0))]),
            row("D", "D", &[(2020, Some(2.0))]),
        ];
        let frame = race_frame(&rows, 2020, &RaceConfig::default()).unwrap();
        assert_eq!(frame.entries().len(), 1);
        assert_eq!(frame.entries()[0].name, "D");
    }

    #[test]
    fn global_total_row_supplies_share() {
        let rows = vec![
            row("GLOBAL TOTAL", "GLOBAL TOTAL", &[(2020, Some(50.0))]),
            row("China", "CHN", &[(2020, Some(10.0))]),
        ];
        let frame = race_frame(&rows, 2020, &RaceConfig::default()).unwrap();
        assert_eq!(frame.entries().len(), 1);
        assert_eq!(frame.total(), Some(50.0));
        assert_relative_eq!(frame.entries()[0].share_pct.unwrap(), 20.0);
    }

    #[test]
    fn falls_back_to_sum_of_included() {
        let rows = vec![
            row("EU27", "EU27", &[(2020, Some(100.0))]),
            row("X", "X", &[(2020, Some(3.0))]),
            row("Y", "Y", &[(2020, Some(1.0))]),
        ];
        let frame = race_frame(&rows, 2020, &RaceConfig::default()).unwrap();
        assert_eq!(frame.total(), Some(4.0));
        assert_relative_eq!(frame.entries()[0].share_pct.unwrap(), 75.0);
    }

    #[test]
    fn truncates_to_top_n() {
        let rows: Vec<_> = (1..=5)
            .map(|i| row(&format!("C{i}"), "X", &[(2020, Some(i as f64))]))
            .collect();
        let cfg = RaceConfig::default().with_top_n(2);
        let frame = race_frame(&rows, 2020, &cfg).unwrap();
        assert_eq!(frame.entries().len(), 2);
        assert_eq!(frame.entries()[0].name, "C5");
        // share still uses the full total
        assert_relative_eq!(frame.entries()[0].share_pct.unwrap(), 5.0 / 15.0 * 100.0);
    }

    #[test]
    fn empty_year() {
        let rows = vec![row("A", "A", &[(2020, Some(1.0))])];
        let frame = race_frame(&rows, 1990, &RaceConfig::default()).unwrap();
        assert!(frame.entries().is_empty());
        assert_eq!(frame.total(), None);
        assert_relative_eq!(frame.max_value(), 1.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = RaceConfig::default().with_top_n(0);
        assert!(race_frame(&[], 2020, &cfg).is_err());
    }

    #[test]
    fn years_with_data() {
        let rows = vec![
            row("A", "A", &[(1990, None), (2000, Some(1.0))]),
            row("B", "B", &[(1995, Some(f64::NAN)), (2010, Some(2.0))]),
        ];
        assert_eq!(race_years(&rows), vec![2000, 2010]);
    }
}
