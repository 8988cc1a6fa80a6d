//! Race command: ranked top emitters and optional sector breakdown.

use anyhow::{Context, Result, anyhow, bail};
use serde::Serialize;
use tracing::{info, info_span, warn};

use ember_race::{RaceFrame, SectorBreakdown, race_frame, race_years, sector_breakdown};

use crate::cli::RaceArgs;
use crate::{convert, load, output};

#[derive(Serialize)]
struct RaceOutput {
    frames: Vec<RaceFrame>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sectors: Vec<SectorBreakdown>,
}

/// Build race frames for the requested year or every year with data.
pub fn run(args: RaceArgs) -> Result<()> {
    let _cmd = info_span!("race").entered();
    let config = load::config(&args.common.config)?;
    let race_cfg = convert::build_race_config(&config.race)?;

    let rows = load::totals(&config)?;
    let years = match args.year {
        Some(y) => vec![y],
        None => race_years(&rows),
    };
    if years.is_empty() {
        bail!("totals table has no values");
    }

    let frames = years
        .iter()
        .map(|&y| race_frame(&rows, y, &race_cfg))
        .collect::<Result<Vec<_>, _>>()
        .context("failed to build race frames")?;
    info!(n_frames = frames.len(), "race frames built");

    let sectors = match &args.sectors_for {
        None => Vec::new(),
        Some(code) => {
            let sector_rows = load::sectors(&config)?;
            let order = config.race.sector_order.as_slice();
            let breakdowns: Vec<_> = years
                .iter()
                .filter_map(|&y| sector_breakdown(&sector_rows, code, y, order))
                .collect();
            if breakdowns.is_empty() {
                return Err(anyhow!("no sector data for '{code}'"));
            }
            if breakdowns.len() < years.len() {
                warn!(
                    code = %code,
                    missing = years.len() - breakdowns.len(),
                    "sector data missing for some years"
                );
            }
            breakdowns
        }
    };

    output::write_json(&RaceOutput { frames, sectors }, args.common.output.as_deref())
}
