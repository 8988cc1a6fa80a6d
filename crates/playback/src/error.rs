//! Error types for the ember-playback crate.

use std::time::Duration;

/// Error type for all fallible operations in the ember-playback crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    /// Returned when a task is created with a zero period.
    #[error("period must be > 0, got {period:?}")]
    ZeroPeriod {
        /// The rejected period.
        period: Duration,
    },

    /// Returned when a cursor is created without any year.
    #[error("no years to play")]
    EmptyYears,

    /// Returned when seeking to a year the cursor does not contain.
    #[error("year {year} is not available")]
    UnknownYear {
        /// The requested year.
        year: i32,
    },
}
