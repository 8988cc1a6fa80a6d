//! Observation records and period filters.

/// One measurement for a group at a year (and optionally a month).
///
/// `value` is `None` when the source cell was empty or unparseable. Values
/// that are present but non-finite are also treated as missing by every
/// reduction in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    group: String,
    year: i32,
    month: Option<u8>,
    value: Option<f64>,
}

impl Observation {
    /// Creates a new observation.
    pub fn new(group: impl Into<String>, year: i32, month: Option<u8>, value: Option<f64>) -> Self {
        Self {
            group: group.into(),
            year,
            month,
            value,
        }
    }

    /// Returns the group key (state, country, sector, ...).
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12), if the source has monthly resolution.
    pub fn month(&self) -> Option<u8> {
        self.month
    }

    /// Returns the raw value as loaded.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Returns the value only if it is present and finite.
    pub fn valid_value(&self) -> Option<f64> {
        ember_stats::valid(self.value)
    }
}

/// A time slice used to select observations for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Every observation of the year, whatever its month.
    Year(i32),
    /// Only observations of the given year and month.
    YearMonth(i32, u8),
}

impl Period {
    /// Returns `true` if the observation falls inside this period.
    ///
    /// An observation without a month never matches a `YearMonth` period.
    pub fn contains(&self, obs: &Observation) -> bool {
        match *self {
            Period::Year(y) => obs.year == y,
            Period::YearMonth(y, m) => obs.year == y && obs.month == Some(m),
        }
    }

    /// Returns the year of the period.
    pub fn year(&self) -> i32 {
        match *self {
            Period::Year(y) | Period::YearMonth(y, _) => y,
        }
    }
}

/// Iterates over the observations that fall inside `period`.
pub fn filter_period(
    rows: &[Observation],
    period: Period,
) -> impl Iterator<Item = &Observation> + '_ {
    rows.iter().filter(move |o| period.contains(o))
}
