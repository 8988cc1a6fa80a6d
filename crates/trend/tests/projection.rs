//! Integration tests for regression, target paths and projections.

use approx::assert_relative_eq;
use ember_trend::{
    EmissionsHistory, LinearModel, ProjectionModel, TargetPathConfig, build_target_path,
    fit_model, gap_at, projection_series, summarize,
};

/// Stylised global GHG emissions (GtCO2e), 2010-2024.
fn global_history() -> EmissionsHistory {
    EmissionsHistory::new(vec![
        (2010, 49.2),
        (2011, 50.1),
        (2012, 51.0),
        (2013, 51.7),
        (2014, 52.1),
        (2015, 52.7),
        (2016, 53.4),
        (2017, 54.3),
        (2018, 55.1),
        (2019, 55.9),
        (2020, 54.7),
        (2021, 56.0),
        (2022, 57.0),
        (2023, 57.5),
        (2024, 57.8),
    ])
    .unwrap()
}

fn paris(history: &EmissionsHistory) -> TargetPathConfig {
    TargetPathConfig::new(history.require(2019).unwrap(), 2019, 2025, 2030, 0.57)
}

#[test]
fn regression_recovers_exact_line() {
    let m = LinearModel::fit(&[(2020.0, 10.0), (2021.0, 12.0), (2022.0, 14.0)]).unwrap();
    assert_relative_eq!(m.slope(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(m.intercept(), -4030.0, epsilon = 1e-6);
    assert_relative_eq!(m.predict(2023.0), 16.0, epsilon = 1e-6);
    for (x, y) in [(2020.0, 10.0), (2021.0, 12.0), (2022.0, 14.0)] {
        assert_relative_eq!(m.predict(x), y, epsilon = 1e-6);
    }
}

#[test]
fn regression_degenerates_on_identical_x() {
    let m = LinearModel::fit(&[(2020.0, 5.0), (2020.0, 7.0)]).unwrap();
    assert_eq!(m.slope(), 0.0);
    assert_relative_eq!(m.intercept(), 6.0, epsilon = 1e-12);
}

#[test]
fn target_path_boundaries_and_monotonicity() {
    let path = build_target_path(&TargetPathConfig::new(55.9, 2019, 2025, 2030, 0.57)).unwrap();
    assert_relative_eq!(path.value_at(2019).unwrap(), 55.9, epsilon = 1e-12);
    assert_relative_eq!(path.value_at(2025).unwrap(), 55.9, epsilon = 1e-12);
    assert_relative_eq!(path.value_at(2030).unwrap(), 31.863, epsilon = 1e-9);

    let mid = path.value_at(2027).unwrap();
    assert!(mid < 55.9 && mid > 31.863);

    let descent: Vec<f64> = (2025..=2030).map(|y| path.value_at(y).unwrap()).collect();
    for w in descent.windows(2) {
        assert!(w[1] < w[0], "path must decrease: {} -> {}", w[0], w[1]);
    }
}

#[test]
fn business_as_usual_overshoots_target() {
    let history = global_history();
    let cfg = paris(&history);
    let path = build_target_path(&cfg).unwrap();
    let model = fit_model(&history, ProjectionModel::Linear, &cfg).unwrap();

    assert!(model.slope() > 0.0);
    let summary = summarize(&history, &model, &path);
    assert_eq!(summary.latest_year, 2024);
    assert_relative_eq!(
        summary.change_since_reference_pct.unwrap(),
        (57.8 - 55.9) / 55.9 * 100.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        summary.needed_change_pct.unwrap(),
        (31.863 - 57.8) / 57.8 * 100.0,
        epsilon = 1e-9
    );
    assert!(summary.overshoot_pct.unwrap() > 80.0);
    assert!(gap_at(&model, &path, 2030).unwrap() > 0.0);
}

#[test]
fn faster_cut_meets_target_exactly() {
    let history = global_history();
    let cfg = paris(&history);
    let path = build_target_path(&cfg).unwrap();
    let model = fit_model(&history, ProjectionModel::FasterCut, &cfg).unwrap();

    let summary = summarize(&history, &model, &path);
    assert_relative_eq!(summary.overshoot_pct.unwrap(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(gap_at(&model, &path, 2030).unwrap(), 0.0, epsilon = 1e-9);
}

#[test]
fn projection_series_switches_after_history() {
    let history = global_history();
    let cfg = paris(&history);
    let model = fit_model(&history, ProjectionModel::Linear, &cfg).unwrap();
    let series = projection_series(&history, &model, 2014..=2030);

    assert_eq!(series.len(), 17);
    assert!(series.iter().take(11).all(|p| p.is_actual));
    assert!(series.iter().skip(11).all(|p| !p.is_actual));
    assert_relative_eq!(series[0].value, 52.1);
    assert_relative_eq!(series[16].value, model.predict(2030.0), epsilon = 1e-12);
}
