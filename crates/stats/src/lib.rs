//! Numeric helpers shared by the Ember crates.
//!
//! Every helper here treats `NaN` and infinities as missing values, matching
//! how the loaders represent empty or unparseable cells.

/// Default threshold below which a baseline magnitude is treated as zero.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Returns the value if it is present and finite.
pub fn valid(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Arithmetic mean of the finite values. Returns `None` if there are none.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        sum += v;
        n += 1;
    }
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Sum of the finite values. Returns `None` if there are none, so that an
/// all-missing group is not reported as zero.
pub fn sum<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    let mut any = false;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        total += v;
        any = true;
    }
    any.then_some(total)
}

/// Percent change from `base` to `value`, relative to `|base|`.
///
/// Returns `None` when either input is non-finite or `|base| <= epsilon`.
pub fn pct_change(base: f64, value: f64, epsilon: f64) -> Option<f64> {
    if !base.is_finite() || !value.is_finite() || base.abs() <= epsilon {
        return None;
    }
    Some((value - base) / base.abs() * 100.0)
}

/// Largest absolute value among the finite inputs.
///
/// Falls back to 1.0 when there are no inputs or the maximum is zero, so the
/// result can always be used as a divisor for symmetric scaling.
pub fn max_abs_or_one<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let m = values
        .into_iter()
        .filter(|v| v.is_finite())
        .map(f64::abs)
        .fold(0.0, f64::max);
    if m > 0.0 { m } else { 1.0 }
}
