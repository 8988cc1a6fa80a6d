//! Error types for the ember-race crate.

/// Error type for all fallible operations in the ember-race crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RaceError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
