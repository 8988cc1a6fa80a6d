//! Plateau-then-descent reference trajectories.

use serde::Serialize;
use tracing::debug;

use crate::error::TrendError;

/// Parameters of a target path.
///
/// The path holds `reference_value` from `reference_year` through
/// `plateau_end_year`, then descends linearly to
/// `target_fraction * reference_value` at `target_year`.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPathConfig {
    reference_value: f64,
    reference_year: i32,
    plateau_end_year: i32,
    target_year: i32,
    target_fraction: f64,
}

impl TargetPathConfig {
    /// Creates a new target path configuration.
    ///
    /// # Arguments
    ///
    /// * `reference_value`: Level held during the plateau (`R`).
    /// * `reference_year`: First year of the path (`Y0`).
    /// * `plateau_end_year`: Last year at the reference level (`Yp`).
    /// * `target_year`: Year the target is reached (`Yt`).
    /// * `target_fraction`: Target as a fraction of `R`; 0.57 means 43% below.
    pub fn new(
        reference_value: f64,
        reference_year: i32,
        plateau_end_year: i32,
        target_year: i32,
        target_fraction: f64,
    ) -> Self {
        Self {
            reference_value,
            reference_year,
            plateau_end_year,
            target_year,
            target_fraction,
        }
    }

    /// Returns the reference value.
    pub fn reference_value(&self) -> f64 {
        self.reference_value
    }

    /// Returns the reference year.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Returns the last plateau year.
    pub fn plateau_end_year(&self) -> i32 {
        self.plateau_end_year
    }

    /// Returns the target year.
    pub fn target_year(&self) -> i32 {
        self.target_year
    }

    /// Returns the target fraction.
    pub fn target_fraction(&self) -> f64 {
        self.target_fraction
    }

    /// Returns the value reached at the target year.
    pub fn target_value(&self) -> f64 {
        self.reference_value * self.target_fraction
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::InvalidConfig`] unless
    /// `reference_year <= plateau_end_year < target_year`, the path spans at
    /// most [`MAX_PATH_SPAN_YEARS`] years, and both the reference value and
    /// the fraction are finite.
    pub fn validate(&self) -> Result<(), TrendError> {
        if !self.reference_value.is_finite() {
            return Err(TrendError::InvalidConfig {
                reason: format!("reference_value must be finite, got {}", self.reference_value),
            });
        }
        if !self.target_fraction.is_finite() {
            return Err(TrendError::InvalidConfig {
                reason: format!("target_fraction must be finite, got {}", self.target_fraction),
            });
        }
        if self.plateau_end_year < self.reference_year {
            return Err(TrendError::InvalidConfig {
                reason: format!(
                    "plateau_end_year {} is before reference_year {}",
                    self.plateau_end_year, self.reference_year
                ),
            });
        }
        if self.target_year <= self.plateau_end_year {
            return Err(TrendError::InvalidConfig {
                reason: format!(
                    "target_year {} must be after plateau_end_year {}",
                    self.target_year, self.plateau_end_year
                ),
            });
        }
        let span = i64::from(self.target_year) - i64::from(self.reference_year);
        if span > i64::from(MAX_PATH_SPAN_YEARS) {
            return Err(TrendError::InvalidConfig {
                reason: format!(
                    "path spans {span} years ({} to {}), at most {MAX_PATH_SPAN_YEARS} allowed",
                    self.reference_year, self.target_year
                ),
            });
        }
        Ok(())
    }

    /// Value of the path at `year`, assuming `year` lies in the path range.
    fn value_at(&self, year: i32) -> f64 {
        let r = self.reference_value;
        if year <= self.plateau_end_year {
            return r;
        }
        let t = (year - self.plateau_end_year) as f64
            / (self.target_year - self.plateau_end_year) as f64;
        r + t * (self.target_value() - r)
    }
}

/// Longest allowed distance from the reference year to the target year.
pub const MAX_PATH_SPAN_YEARS: i32 = 1000;

/// One yearly point of a target path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetPathPoint {
    /// Calendar year.
    pub year: i32,
    /// Path value for the year.
    pub value: f64,
}

/// A built target path: one point per year from the reference year to the
/// target year inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPath {
    config: TargetPathConfig,
    points: Vec<TargetPathPoint>,
}

impl TargetPath {
    /// Returns the configuration the path was built from.
    pub fn config(&self) -> &TargetPathConfig {
        &self.config
    }

    /// Returns the yearly points.
    pub fn points(&self) -> &[TargetPathPoint] {
        &self.points
    }

    /// Returns the path value at `year`, or `None` outside the path range.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        let offset = year.checked_sub(self.config.reference_year)?;
        let idx = usize::try_from(offset).ok()?;
        self.points.get(idx).map(|p| p.value)
    }
}

/// Builds the plateau-then-descent path described by `config`.
///
/// For `year` in `[Y0, Yp]` the value is `R`; for `year` in `(Yp, Yt]` it is
/// `R + t * (f*R - R)` with `t = (year - Yp) / (Yt - Yp)`.
///
/// # Errors
///
/// Returns [`TrendError::InvalidConfig`] if the configuration is invalid.
pub fn build_target_path(config: &TargetPathConfig) -> Result<TargetPath, TrendError> {
    config.validate()?;

    let points: Vec<TargetPathPoint> = (config.reference_year..=config.target_year)
        .map(|year| TargetPathPoint {
            year,
            value: config.value_at(year),
        })
        .collect();

    debug!(
        n_points = points.len(),
        target_value = config.target_value(),
        "built target path"
    );

    Ok(TargetPath {
        config: config.clone(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn paris() -> TargetPathConfig {
        TargetPathConfig::new(55.9, 2019, 2025, 2030, 0.57)
    }

    #[test]
    fn one_point_per_year() {
        let path = build_target_path(&paris()).unwrap();
        let years: Vec<i32> = path.points().iter().map(|p| p.year).collect();
        assert_eq!(years, (2019..=2030).collect::<Vec<_>>());
    }

    #[test]
    fn plateau_is_flat() {
        let path = build_target_path(&paris()).unwrap();
        for year in 2019..=2025 {
            assert_eq!(path.value_at(year), Some(55.9));
        }
    }

    #[test]
    fn midpoint_of_descent() {
        let cfg = TargetPathConfig::new(100.0, 2000, 2000, 2010, 0.5);
        let path = build_target_path(&cfg).unwrap();
        assert_relative_eq!(path.value_at(2005).unwrap(), 75.0, epsilon = 1e-12);
        assert_relative_eq!(path.value_at(2010).unwrap(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn outside_range_is_none() {
        let path = build_target_path(&paris()).unwrap();
        assert_eq!(path.value_at(2018), None);
        assert_eq!(path.value_at(2031), None);
        assert_eq!(path.value_at(i32::MIN), None);
    }

    #[test]
    fn rejects_plateau_before_reference() {
        let cfg = TargetPathConfig::new(1.0, 2019, 2018, 2030, 0.5);
        assert!(matches!(
            build_target_path(&cfg),
            Err(TrendError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_target_not_after_plateau() {
        let cfg = TargetPathConfig::new(1.0, 2019, 2025, 2025, 0.5);
        assert!(build_target_path(&cfg).is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(TargetPathConfig::new(f64::NAN, 2019, 2025, 2030, 0.5).validate().is_err());
        assert!(TargetPathConfig::new(1.0, 2019, 2025, 2030, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn rejects_unbounded_span() {
        let cfg = TargetPathConfig::new(55.9, -2_000_000_000, 2025, 2030, 0.57);
        assert!(matches!(
            cfg.validate(),
            Err(TrendError::InvalidConfig { .. })
        ));
        assert!(build_target_path(&cfg).is_err());

        let extreme = TargetPathConfig::new(55.9, i32::MIN, i32::MIN, i32::MAX, 0.57);
        assert!(extreme.validate().is_err());
    }

    #[test]
    fn accepts_longest_span() {
        let cfg = TargetPathConfig::new(1.0, 1030, 2025, 2030, 0.5);
        let path = build_target_path(&cfg).unwrap();
        assert_eq!(path.points().len(), MAX_PATH_SPAN_YEARS as usize + 1);
    }

    #[test]
    fn target_above_reference_ascends() {
        let cfg = TargetPathConfig::new(10.0, 2020, 2021, 2023, 1.3);
        let path = build_target_path(&cfg).unwrap();
        assert_relative_eq!(path.value_at(2023).unwrap(), 13.0, epsilon = 1e-12);
    }
}
