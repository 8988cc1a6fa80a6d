//! Change command: percent change between the baseline and latest periods.

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::{info, info_span};

use ember_aggregate::{filter_period, group_mean};
use ember_change::{ChangeStats, change_stats};

use crate::cli::ChangeArgs;
use crate::{convert, load, output};

#[derive(Serialize)]
struct ChangeOutput<'a> {
    measure: Option<&'a str>,
    baseline: String,
    latest: String,
    #[serde(flatten)]
    stats: ChangeStats<String>,
    mean_of_changes: Option<f64>,
}

/// Run the baseline/latest comparison configured in `[change]`.
pub fn run(args: ChangeArgs) -> Result<()> {
    let _cmd = info_span!("change").entered();
    let config = load::config(&args.common.config)?;

    let baseline = config
        .change
        .baseline
        .as_ref()
        .ok_or_else(|| anyhow!("no baseline period: set [change].baseline in config"))?;
    let latest = config
        .change
        .latest
        .as_ref()
        .ok_or_else(|| anyhow!("no latest period: set [change].latest in config"))?;
    let baseline = convert::parse_period(baseline).context("invalid [change].baseline")?;
    let latest = convert::parse_period(latest).context("invalid [change].latest")?;
    let change_cfg = convert::build_change_config(&config.change)?;

    let rows = load::observations(&config, args.measure.as_deref())?;
    let by_group = |o: &ember_aggregate::Observation| o.group().to_string();
    let base = group_mean(filter_period(&rows, baseline), by_group);
    let last = group_mean(filter_period(&rows, latest), by_group);
    if base.is_empty() || last.is_empty() {
        bail!(
            "no observations for {} or {}",
            convert::period_label(baseline),
            convert::period_label(latest)
        );
    }

    let stats = change_stats(&base, &last, &change_cfg).context("change statistics failed")?;
    info!(
        n_groups = stats.len(),
        population = ?stats.population(),
        "change statistics computed"
    );

    let measure = args.measure.as_deref().or(config.change.measure.as_deref());
    let mean_of_changes = stats.mean_of_changes();
    output::write_json(
        &ChangeOutput {
            measure,
            baseline: convert::period_label(baseline),
            latest: convert::period_label(latest),
            stats,
            mean_of_changes,
        },
        args.common.output.as_deref(),
    )
}
