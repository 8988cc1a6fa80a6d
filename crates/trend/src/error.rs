//! Error types for the ember-trend crate.

/// Error type for all fallible operations in the ember-trend crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrendError {
    /// Returned when a fit is requested on zero points.
    #[error("input data is empty")]
    EmptyInput,

    /// Returned when an input coordinate is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFinite {
        /// Position of the offending point.
        index: usize,
    },

    /// Returned when two points needed to define a line share the same x.
    #[error("cannot draw a line through two points at x = {x}")]
    CoincidentPoints {
        /// The shared x coordinate.
        x: f64,
    },

    /// Returned when a year appears more than once in a history.
    #[error("duplicate year {year} in history")]
    DuplicateYear {
        /// The repeated year.
        year: i32,
    },

    /// Returned when a required year is absent from a history.
    #[error("year {year} not found in history")]
    MissingYear {
        /// The missing year.
        year: i32,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
