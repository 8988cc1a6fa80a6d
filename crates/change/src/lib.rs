//! Percent-change statistics between a baseline and a latest snapshot.
//!
//! Two population-level figures are reported separately and must not be
//! confused:
//!
//! - [`ChangeStats::population`]: percent change between the mean of all
//!   baseline values and the mean of all latest values;
//! - [`ChangeStats::mean_of_changes`]: arithmetic mean of the per-group
//!   percent changes.
//!
//! They differ whenever groups have different magnitudes.

mod change;
mod config;
mod error;
mod result;

pub use change::change_stats;
pub use config::ChangeConfig;
pub use error::ChangeError;
pub use result::ChangeStats;
