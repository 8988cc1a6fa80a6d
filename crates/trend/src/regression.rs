//! Ordinary least squares line fitting.

use serde::Serialize;

use crate::error::TrendError;

/// A straight line `y = intercept + slope * x`.
///
/// Immutable once built; refitting produces a new model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearModel {
    intercept: f64,
    slope: f64,
}

impl LinearModel {
    /// Creates a model from explicit coefficients.
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Fits `y` on `x` by ordinary least squares.
    ///
    /// Two-pass: means first, then centred cross products.
    /// `slope = Σ(x-x̄)(y-ȳ) / Σ(x-x̄)²` and `intercept = ȳ - slope·x̄`.
    /// When every `x` is identical the denominator is zero and the model
    /// degenerates to `slope = 0`, `intercept = ȳ`.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::EmptyInput`] if `points` is empty and
    /// [`TrendError::NonFinite`] if any coordinate is NaN or infinite.
    pub fn fit(points: &[(f64, f64)]) -> Result<Self, TrendError> {
        if points.is_empty() {
            return Err(TrendError::EmptyInput);
        }
        if let Some(index) = points
            .iter()
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(TrendError::NonFinite { index });
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let mut num = 0.0;
        let mut den = 0.0;
        for &(x, y) in points {
            let dx = x - mean_x;
            num += dx * (y - mean_y);
            den += dx * dx;
        }

        let slope = if den == 0.0 { 0.0 } else { num / den };
        let intercept = mean_y - slope * mean_x;
        Ok(Self { intercept, slope })
    }

    /// Builds the line through two points.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::CoincidentPoints`] if both points share the
    /// same `x`, and [`TrendError::NonFinite`] for NaN or infinite input.
    pub fn through(a: (f64, f64), b: (f64, f64)) -> Result<Self, TrendError> {
        for (index, (x, y)) in [a, b].into_iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(TrendError::NonFinite { index });
            }
        }
        if a.0 == b.0 {
            return Err(TrendError::CoincidentPoints { x: a.0 });
        }
        let slope = (b.1 - a.1) / (b.0 - a.0);
        let intercept = a.1 - slope * a.0;
        Ok(Self { intercept, slope })
    }

    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Returns the intercept (value at `x = 0`).
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the slope.
    pub fn slope(&self) -> f64 {
        self.slope
    }
}
