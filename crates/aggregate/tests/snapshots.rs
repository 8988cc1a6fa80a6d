//! Integration tests for period snapshots and grouped means.

use approx::assert_relative_eq;
use ember_aggregate::{Observation, Period, filter_period, group_mean, yearly_series};

/// Two states, two years, three months each, with a few gaps.
fn modis_like() -> Vec<Observation> {
    let mut rows = Vec::new();
    for (state, base) in [("Ohio", 0.40), ("Utah", 0.20)] {
        for year in [2014, 2024] {
            for month in 1u8..=3 {
                let value = if state == "Utah" && month == 2 {
                    None
                } else {
                    Some(base + (year - 2014) as f64 * 0.01 + month as f64 * 0.001)
                };
                rows.push(Observation::new(state, year, Some(month), value));
            }
        }
    }
    rows
}

#[test]
fn missing_values_are_excluded_not_zeroed() {
    let rows = vec![
        Observation::new("A", 2020, None, None),
        Observation::new("A", 2020, None, Some(10.0)),
    ];
    let g = group_mean(&rows, |o| o.group().to_string());
    assert_eq!(g.len(), 1);
    assert_eq!(g.get(&"A".to_string()), Some(10.0));
}

#[test]
fn yearly_snapshot_averages_all_months() {
    let rows = modis_like();
    let g = group_mean(filter_period(&rows, Period::Year(2014)), |o| {
        o.group().to_string()
    });
    assert_relative_eq!(g.get(&"Ohio".to_string()).unwrap(), 0.402, epsilon = 1e-12);
    // Utah month 2 is missing: mean of months 1 and 3
    assert_relative_eq!(g.get(&"Utah".to_string()).unwrap(), 0.202, epsilon = 1e-12);
}

#[test]
fn monthly_snapshot_selects_one_month() {
    let rows = modis_like();
    let g = group_mean(filter_period(&rows, Period::YearMonth(2024, 2)), |o| {
        o.group().to_string()
    });
    assert_relative_eq!(g.get(&"Ohio".to_string()).unwrap(), 0.502, epsilon = 1e-12);
    assert!(g.contains_key(&"Utah".to_string()));
    assert_eq!(g.get(&"Utah".to_string()), None);
}

#[test]
fn series_tracks_state_and_pool() {
    let rows = modis_like();
    let s = yearly_series(&rows, [2014, 2024], Some("Ohio"));
    assert_eq!(s.len(), 2);
    assert_relative_eq!(s[1].group.unwrap(), 0.502, epsilon = 1e-12);
    // pooled: Ohio 3 values + Utah 2 values
    let expected = (0.501 + 0.502 + 0.503 + 0.301 + 0.303) / 5.0;
    assert_relative_eq!(s[1].overall, expected, epsilon = 1e-12);
}
