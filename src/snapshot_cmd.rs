//! Snapshot and series commands: grouped means over the measurements table.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use ember_aggregate::{Grouped, YearlyPoint, filter_period, group_mean, yearly_series, years_present};

use crate::cli::{SeriesArgs, SnapshotArgs};
use crate::config::PeriodToml;
use crate::{convert, load, output};

#[derive(Serialize)]
struct SnapshotOutput<'a> {
    measure: Option<&'a str>,
    year: i32,
    month: Option<u8>,
    /// Group mean, `null` for groups with no valid value in the period.
    groups: Grouped<String>,
}

#[derive(Serialize)]
struct SeriesOutput<'a> {
    measure: Option<&'a str>,
    group: Option<&'a str>,
    points: Vec<YearlyPoint>,
}

/// Per-group means for one year or month.
pub fn run_snapshot(args: SnapshotArgs) -> Result<()> {
    let _cmd = info_span!("snapshot").entered();
    let config = load::config(&args.common.config)?;
    let rows = load::observations(&config, args.measure.as_deref())?;

    let period = convert::parse_period(&PeriodToml {
        year: args.year,
        month: args.month,
    })?;
    let groups = group_mean(filter_period(&rows, period), |o| o.group().to_string());
    if groups.is_empty() {
        bail!("no observations for {}", convert::period_label(period));
    }
    info!(n_groups = groups.len(), "snapshot computed");

    let measure = args.measure.as_deref().or(config.change.measure.as_deref());
    output::write_json(
        &SnapshotOutput {
            measure,
            year: args.year,
            month: args.month,
            groups,
        },
        args.common.output.as_deref(),
    )
}

/// Yearly overall and per-group average series over every year present.
pub fn run_series(args: SeriesArgs) -> Result<()> {
    let _cmd = info_span!("series").entered();
    let config = load::config(&args.common.config)?;
    let rows = load::observations(&config, args.measure.as_deref())?;

    let years = years_present(&rows);
    let points = yearly_series(&rows, years, args.group.as_deref());
    if let Some(g) = &args.group
        && points.iter().all(|p| p.group.is_none())
    {
        bail!("group '{g}' has no valid values");
    }
    info!(n_points = points.len(), "series computed");

    let measure = args.measure.as_deref().or(config.change.measure.as_deref());
    output::write_json(
        &SeriesOutput {
            measure,
            group: args.group.as_deref(),
            points,
        },
        args.common.output.as_deref(),
    )
}
