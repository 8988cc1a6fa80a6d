//! # ember-aggregate
//!
//! Groups per-period observations by a key and reduces each group to a mean
//! or a sum over its valid values.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ember_aggregate::{Observation, Period, filter_period, group_mean};
//!
//! let rows = vec![
//!     Observation::new("Texas", 2014, Some(3), Some(0.41)),
//!     Observation::new("Texas", 2014, Some(4), None),
//! ];
//! let snapshot = filter_period(&rows, Period::Year(2014));
//! let means = group_mean(snapshot, |o| o.group().to_string());
//! assert_eq!(means.get(&"Texas".to_string()), Some(0.41));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `observation` | Observation record and period filters |
//! | `grouped` | Grouped mean/sum reductions |
//! | `series` | Yearly overall and per-group average series |

mod grouped;
mod observation;
mod series;

pub use grouped::{Grouped, group_by, group_mean, group_sum};
pub use observation::{Observation, Period, filter_period};
pub use series::{YearlyPoint, yearly_series, years_present};
