//! Change-statistics configuration.

use crate::error::ChangeError;

/// Configuration for [`change_stats`](crate::change_stats).
#[derive(Debug, Clone)]
pub struct ChangeConfig {
    epsilon: f64,
}

impl Default for ChangeConfig {
    fn default() -> Self {
        Self {
            epsilon: ember_stats::DEFAULT_EPSILON,
        }
    }
}

impl ChangeConfig {
    /// Set the baseline magnitude at or below which a change is undefined.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the degenerate-baseline threshold.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChangeError::InvalidConfig`] if epsilon is negative or not
    /// finite.
    pub fn validate(&self) -> Result<(), ChangeError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ChangeError::InvalidConfig {
                reason: format!("epsilon must be finite and >= 0, got {}", self.epsilon),
            });
        }
        Ok(())
    }
}
