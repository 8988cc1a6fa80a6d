//! Input rows: yearly totals per country and yearly values per sector.

use std::collections::BTreeMap;

/// Yearly emission totals for one country (or aggregate row).
#[derive(Debug, Clone, PartialEq)]
pub struct CountryTotals {
    name: String,
    code: String,
    values: BTreeMap<i32, Option<f64>>,
}

impl CountryTotals {
    /// Creates a totals row.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        values: BTreeMap<i32, Option<f64>>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            values,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the country code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the value for `year` if present and finite.
    pub fn value(&self, year: i32) -> Option<f64> {
        self.values
            .get(&year)
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }

    /// Returns every year column of the row.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.keys().copied()
    }
}

/// Yearly emissions of one sector of one country.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRow {
    code: String,
    name: String,
    sector: String,
    values: BTreeMap<i32, Option<f64>>,
}

impl SectorRow {
    /// Creates a sector row.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        values: BTreeMap<i32, Option<f64>>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            sector: sector.into(),
            values,
        }
    }

    /// Returns the country code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the country name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sector name.
    pub fn sector(&self) -> &str {
        &self.sector
    }

    /// Returns the raw value for `year`.
    pub fn value(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied().flatten()
    }
}
