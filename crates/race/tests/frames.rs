use std::collections::BTreeMap;

use approx::assert_relative_eq;
use ember_race::{CountryTotals, RaceConfig, race_frame, race_years};

fn totals(name: &str, code: &str, series: &[(i32, f64)]) -> CountryTotals {
    let values: BTreeMap<i32, Option<f64>> = series.iter().map(|&(y, v)| (y, Some(v))).collect();
    CountryTotals::new(name, code, values)
}

fn table() -> Vec<CountryTotals> {
    vec![
        totals("GLOBAL TOTAL", "GLOBAL TOTAL", &[(1970, 24.0), (2020, 50.0)]),
        totals("EU27", "EU27", &[(1970, 6.0), (2020, 3.0)]),
        totals("International Shipping", "SEA", &[(1970, 0.4), (2020, 0.7)]),
        totals("United States", "USA", &[(1970, 6.0), (2020, 5.5)]),
        totals("China", "CHN", &[(1970, 1.2), (2020, 14.0)]),
        totals("India", "IND", &[(2020, 3.6)]),
    ]
}

#[test]
fn every_year_is_a_consistent_frame() {
    let rows = table();
    let cfg = RaceConfig::default();
    for year in race_years(&rows) {
        let frame = race_frame(&rows, year, &cfg).unwrap();
        assert!(frame.entries().len() <= cfg.top_n());
        for pair in frame.entries().windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
        for (i, e) in frame.entries().iter().enumerate() {
            assert_eq!(e.rank, i + 1);
            assert_ne!(e.name, "EU27");
            assert_ne!(e.name, "International Shipping");
        }
    }
}

#[test]
fn leader_changes_between_years() {
    let rows = table();
    let cfg = RaceConfig::default();
    let early = race_frame(&rows, 1970, &cfg).unwrap();
    let late = race_frame(&rows, 2020, &cfg).unwrap();
    assert_eq!(early.entries()[0].code, "USA");
    assert_eq!(late.entries()[0].code, "CHN");
    assert_relative_eq!(late.entries()[0].share_pct.unwrap(), 28.0, epsilon = 1e-12);
    assert_eq!(early.entries().len(), 2);
}
