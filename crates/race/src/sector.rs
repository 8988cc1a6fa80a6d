//! Per-country sector breakdown.

use serde::Serialize;
use tracing::debug;

use ember_aggregate::{Observation, group_sum};

use crate::table::SectorRow;

/// Sector display order used when none is configured.
pub const DEFAULT_SECTOR_ORDER: [&str; 8] = [
    "Power Industry",
    "Industrial Combustion",
    "Buildings",
    "Transport",
    "Fuel Exploitation",
    "Agriculture",
    "Processes",
    "Waste",
];

/// Emissions of one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorValue {
    /// Sector name.
    pub sector: String,
    /// Summed positive emissions; 0.0 when the sector has no data.
    pub value: f64,
}

/// Sector values of one country in one year, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorBreakdown {
    code: String,
    name: String,
    year: i32,
    sectors: Vec<SectorValue>,
    max_value: f64,
}

impl SectorBreakdown {
    /// Returns the country code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the country name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the breakdown year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the sector values in display order.
    pub fn sectors(&self) -> &[SectorValue] {
        &self.sectors
    }

    /// Largest sector value, or 1.0 when every sector is zero.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }
}

/// Sums the positive sector values of `code` in `year` and lays them out in
/// `order`, with zero for sectors that have no data.
///
/// Sectors outside `order` are ignored. Returns `None` when the country has
/// no positive sector value for the year.
pub fn sector_breakdown<S: AsRef<str>>(
    rows: &[SectorRow],
    code: &str,
    year: i32,
    order: &[S],
) -> Option<SectorBreakdown> {
    let matching: Vec<&SectorRow> = rows.iter().filter(|r| r.code() == code).collect();
    let observations: Vec<Observation> = matching
        .iter()
        .filter_map(|r| {
            let value = r.value(year).filter(|v| v.is_finite() && *v > 0.0)?;
            Some(Observation::new(r.sector(), year, None, Some(value)))
        })
        .collect();
    if observations.is_empty() {
        return None;
    }

    let sums = group_sum(&observations, |o| o.group().to_string());
    let sectors: Vec<SectorValue> = order
        .iter()
        .map(|s| SectorValue {
            sector: s.as_ref().to_string(),
            value: sums.get(&s.as_ref().to_string()).unwrap_or(0.0),
        })
        .collect();
    let max_value = ember_stats::max_abs_or_one(sectors.iter().map(|s| s.value));

    debug!(code, year, n_sectors = sums.len(), "built sector breakdown");
    Some(SectorBreakdown {
        code: code.to_string(),
        name: matching
            .first()
            .map(|r| r.name().to_string())
            .unwrap_or_default(),
        year,
        sectors,
        max_value,
    })
}
