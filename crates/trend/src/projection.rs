//! Business-as-usual and faster-cut projections against a target path.

use std::ops::RangeInclusive;

use ember_stats::{DEFAULT_EPSILON, pct_change};
use serde::Serialize;
use tracing::debug;

use crate::error::TrendError;
use crate::history::EmissionsHistory;
use crate::regression::LinearModel;
use crate::target::{TargetPath, TargetPathConfig};

/// Which line is used to project beyond the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionModel {
    /// Least squares fit over the whole history ("business as usual").
    Linear,
    /// Straight line from the latest actual value to the target value at
    /// the target year.
    FasterCut,
}

/// One point of a projection series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    /// Calendar year.
    pub year: i32,
    /// Actual value if recorded, otherwise the model prediction.
    pub value: f64,
    /// Whether `value` comes from the history.
    pub is_actual: bool,
}

/// Headline percentages comparing history, model and target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSummary {
    /// Year of the latest actual value.
    pub latest_year: i32,
    /// Latest actual value.
    pub latest_value: f64,
    /// Value at the reference year.
    pub reference_value: f64,
    /// Target value at the target year.
    pub target_value: f64,
    /// Model prediction at the target year.
    pub model_at_target_year: f64,
    /// Change of the latest actual relative to the reference value.
    pub change_since_reference_pct: Option<f64>,
    /// Change needed from the latest actual to reach the target.
    pub needed_change_pct: Option<f64>,
    /// Model prediction relative to the target at the target year.
    pub overshoot_pct: Option<f64>,
}

/// Builds the projection line for `model`.
///
/// # Errors
///
/// Returns [`TrendError::InvalidConfig`] if the target configuration is
/// invalid, and [`TrendError::CoincidentPoints`] for a faster-cut model
/// whose latest actual year equals the target year.
pub fn fit_model(
    history: &EmissionsHistory,
    model: ProjectionModel,
    target: &TargetPathConfig,
) -> Result<LinearModel, TrendError> {
    target.validate()?;
    let line = match model {
        ProjectionModel::Linear => LinearModel::fit(&history.as_xy())?,
        ProjectionModel::FasterCut => {
            let (year, value) = history.latest();
            LinearModel::through(
                (year as f64, value),
                (target.target_year() as f64, target.target_value()),
            )?
        }
    };
    debug!(
        ?model,
        intercept = line.intercept(),
        slope = line.slope(),
        "fitted projection model"
    );
    Ok(line)
}

/// Projection over `years`: the recorded value for years up to the latest
/// actual year when one exists, the model prediction otherwise.
pub fn projection_series(
    history: &EmissionsHistory,
    model: &LinearModel,
    years: RangeInclusive<i32>,
) -> Vec<ProjectionPoint> {
    let (latest_year, _) = history.latest();
    years
        .map(|year| {
            let actual = if year <= latest_year {
                history.value_at(year)
            } else {
                None
            };
            match actual {
                Some(value) => ProjectionPoint {
                    year,
                    value,
                    is_actual: true,
                },
                None => ProjectionPoint {
                    year,
                    value: model.predict(year as f64),
                    is_actual: false,
                },
            }
        })
        .collect()
}

/// Summarises how the latest actual and the model compare with the target.
pub fn summarize(
    history: &EmissionsHistory,
    model: &LinearModel,
    path: &TargetPath,
) -> ProjectionSummary {
    let cfg = path.config();
    let (latest_year, latest_value) = history.latest();
    let target_value = cfg.target_value();
    let model_at_target_year = model.predict(cfg.target_year() as f64);

    ProjectionSummary {
        latest_year,
        latest_value,
        reference_value: cfg.reference_value(),
        target_value,
        model_at_target_year,
        change_since_reference_pct: pct_change(
            cfg.reference_value(),
            latest_value,
            DEFAULT_EPSILON,
        ),
        needed_change_pct: pct_change(latest_value, target_value, DEFAULT_EPSILON),
        overshoot_pct: pct_change(target_value, model_at_target_year, DEFAULT_EPSILON),
    }
}

/// Percent gap between the model and the target path at `year`.
///
/// Only defined once the plateau has ended (`year >= plateau_end_year`) and
/// while `year` is on the path.
pub fn gap_at(model: &LinearModel, path: &TargetPath, year: i32) -> Option<f64> {
    if year < path.config().plateau_end_year() {
        return None;
    }
    let target = path.value_at(year)?;
    pct_change(target, model.predict(year as f64), DEFAULT_EPSILON)
}
