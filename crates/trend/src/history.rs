//! Validated yearly emissions history.

use crate::error::TrendError;

/// A yearly series of observed values, sorted by year with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionsHistory {
    points: Vec<(i32, f64)>,
}

impl EmissionsHistory {
    /// Creates a history from `(year, value)` pairs in any order.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::EmptyInput`] for an empty series,
    /// [`TrendError::NonFinite`] for a NaN or infinite value and
    /// [`TrendError::DuplicateYear`] if a year repeats.
    pub fn new(mut points: Vec<(i32, f64)>) -> Result<Self, TrendError> {
        if points.is_empty() {
            return Err(TrendError::EmptyInput);
        }
        if let Some(index) = points.iter().position(|(_, v)| !v.is_finite()) {
            return Err(TrendError::NonFinite { index });
        }
        points.sort_by_key(|&(year, _)| year);
        if let Some(w) = points.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(TrendError::DuplicateYear { year: w[0].0 });
        }
        Ok(Self { points })
    }

    /// Returns the value recorded for `year`.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points
            .binary_search_by_key(&year, |&(y, _)| y)
            .ok()
            .map(|i| self.points[i].1)
    }

    /// Returns the value for `year` or a [`TrendError::MissingYear`].
    pub fn require(&self, year: i32) -> Result<f64, TrendError> {
        self.value_at(year).ok_or(TrendError::MissingYear { year })
    }

    /// Returns the most recent `(year, value)`.
    pub fn latest(&self) -> (i32, f64) {
        // non-empty by construction
        self.points[self.points.len() - 1]
    }

    /// Returns the points sorted by year.
    pub fn points(&self) -> &[(i32, f64)] {
        &self.points
    }

    /// Returns the points as `f64` pairs for fitting.
    pub fn as_xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&(y, v)| (y as f64, v)).collect()
    }

    /// Number of recorded years.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
