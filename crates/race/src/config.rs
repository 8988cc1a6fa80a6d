//! Bar-race configuration.

use crate::error::RaceError;

/// Configuration for [`race_frame`](crate::race_frame).
#[derive(Debug, Clone)]
pub struct RaceConfig {
    top_n: usize,
    excluded: Vec<String>,
    global_total_label: String,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            top_n: 18,
            excluded: vec!["EU27".to_string(), "International Shipping".to_string()],
            global_total_label: "GLOBAL TOTAL".to_string(),
        }
    }
}

impl RaceConfig {
    /// Set the number of entries kept per frame.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the names of aggregate rows that are never ranked.
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the name (or code) of the row holding the global total.
    pub fn with_global_total_label(mut self, label: impl Into<String>) -> Self {
        self.global_total_label = label.into();
        self
    }

    /// Returns the number of entries kept per frame.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Returns the excluded aggregate names.
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Returns the global-total label.
    pub fn global_total_label(&self) -> &str {
        &self.global_total_label
    }

    pub(crate) fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|e| e == name)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RaceError::InvalidConfig`] if `top_n` is zero or the
    /// global-total label is empty.
    pub fn validate(&self) -> Result<(), RaceError> {
        if self.top_n == 0 {
            return Err(RaceError::InvalidConfig {
                reason: "top_n must be > 0".to_string(),
            });
        }
        if self.global_total_label.is_empty() {
            return Err(RaceError::InvalidConfig {
                reason: "global_total_label must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = RaceConfig::default();
        assert_eq!(cfg.top_n(), 18);
        assert!(cfg.is_excluded("EU27"));
        assert!(!cfg.is_excluded("China"));
        assert_eq!(cfg.global_total_label(), "GLOBAL TOTAL");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder() {
        let cfg = RaceConfig::default()
            .with_top_n(10)
            .with_excluded(["World"])
            .with_global_total_label("WORLD");
        assert_eq!(cfg.top_n(), 10);
        assert_eq!(cfg.excluded(), &["World".to_string()]);
        assert_eq!(cfg.global_total_label(), "WORLD");
    }

    #[test]
    fn rejects_zero_top_n() {
        assert!(RaceConfig::default().with_top_n(0).validate().is_err());
    }

    #[test]
    fn rejects_empty_label() {
        assert!(RaceConfig::default().with_global_total_label("").validate().is_err());
    }
}
