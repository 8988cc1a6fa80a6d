//! Yearly average series, overall and for one selected group.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::grouped::group_mean;
use crate::observation::Observation;

/// One point of a yearly series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyPoint {
    /// Calendar year.
    pub year: i32,
    /// Mean over every valid value of the year, all groups pooled.
    pub overall: f64,
    /// Mean over the selected group's valid values, if a group was selected
    /// and it has data for the year.
    pub group: Option<f64>,
}

/// Builds a per-year series of pooled means, optionally alongside the means
/// of one group.
///
/// The pooled mean weights every valid observation equally, so groups with
/// more rows pull it further. Years without any valid pooled value are
/// dropped.
pub fn yearly_series<Y>(rows: &[Observation], years: Y, group: Option<&str>) -> Vec<YearlyPoint>
where
    Y: IntoIterator<Item = i32>,
{
    let overall = group_mean(rows, |o| o.year());
    let selected = group.map(|g| group_mean(rows.iter().filter(|o| o.group() == g), |o| o.year()));

    years
        .into_iter()
        .filter_map(|year| {
            let mean = overall.get(&year)?;
            Some(YearlyPoint {
                year,
                overall: mean,
                group: selected.as_ref().and_then(|s| s.get(&year)),
            })
        })
        .collect()
}

/// Sorted distinct years present in `rows`.
pub fn years_present(rows: &[Observation]) -> Vec<i32> {
    rows.iter()
        .map(|o| o.year())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
