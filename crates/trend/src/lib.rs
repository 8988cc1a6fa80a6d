//! Linear trend fitting, target paths and emissions projections.
//!
//! # Pipeline
//!
//! 1. **History**: validated `(year, value)` series ([`EmissionsHistory`])
//! 2. **Model**: ordinary least squares over the history, or the
//!    faster-cut line from the latest actual to the target ([`fit_model`])
//! 3. **Target path**: flat plateau then linear descent
//!    ([`build_target_path`])
//! 4. **Projection**: actuals where known, model predictions elsewhere
//!    ([`projection_series`]), plus a percent-change summary ([`summarize`])

mod error;
mod history;
mod projection;
mod regression;
mod target;

pub use error::TrendError;
pub use history::EmissionsHistory;
pub use projection::{
    ProjectionModel, ProjectionPoint, ProjectionSummary, fit_model, gap_at, projection_series,
    summarize,
};
pub use regression::LinearModel;
pub use target::{
    MAX_PATH_SPAN_YEARS, TargetPath, TargetPathConfig, TargetPathPoint, build_target_path,
};
