//! Play command: autoplay the bar race, one JSON line per frame.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info, info_span};

use ember_playback::{Session, SystemClock};
use ember_race::{CountryTotals, RaceConfig, race_frame, race_years};

use crate::cli::PlayArgs;
use crate::{convert, load};

#[derive(Serialize)]
struct FrameLine<'a> {
    year: i32,
    leader: Option<&'a str>,
    leader_value: Option<f64>,
    /// Rank of the followed country, if it is in the frame.
    selected_rank: Option<usize>,
}

fn emit(
    rows: &[CountryTotals],
    year: i32,
    cfg: &RaceConfig,
    selection: Option<&str>,
    out: &mut dyn std::io::Write,
) -> Result<()> {
    let frame = race_frame(rows, year, cfg)?;
    let leader = frame.entries().first();
    let line = FrameLine {
        year,
        leader: leader.map(|e| e.name.as_str()),
        leader_value: leader.map(|e| e.value),
        selected_rank: selection
            .and_then(|s| frame.entries().iter().find(|e| e.name == s))
            .map(|e| e.rank),
    };
    writeln!(out, "{}", serde_json::to_string(&line)?)?;
    Ok(())
}

/// Play the race with the configured period, starting from the first year.
pub fn run(args: PlayArgs) -> Result<()> {
    let _cmd = info_span!("play").entered();
    let config = load::config(&args.common.config)?;
    let race_cfg = convert::build_race_config(&config.race)?;
    let rows = load::totals(&config)?;
    let years = race_years(&rows);
    if years.is_empty() {
        bail!("totals table has no values");
    }
    let n_frames = args.frames.unwrap_or(years.len() as u64);

    let period = Duration::from_millis(config.playback.period_ms);
    let mut session =
        Session::new(SystemClock::new(), years, period).context("failed to start playback")?;
    if let Some(name) = &args.select {
        session.select(name);
    }

    let mut out: Box<dyn std::io::Write> = match &args.common.output {
        Some(p) => Box::new(
            std::fs::File::create(p)
                .with_context(|| format!("failed to create output: {}", p.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };

    info!(n_frames, period_ms = config.playback.period_ms, "playing");
    emit(&rows, session.year(), &race_cfg, session.selection(), &mut out)?;
    session.toggle_play();
    let mut shown = 1u64;
    while shown < n_frames {
        thread::sleep(period / 4);
        if let Some(year) = session.tick() {
            debug!(year, "frame");
            emit(&rows, year, &race_cfg, session.selection(), &mut out)?;
            shown += 1;
        }
    }
    out.flush()?;

    let last = session.teardown();
    info!(last_year = last, "playback finished");
    Ok(())
}
