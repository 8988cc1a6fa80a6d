//! Project command: fit a projection model and compare it with the target path.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use ember_trend::{
    LinearModel, ProjectionPoint, ProjectionSummary, TargetPathPoint, build_target_path,
    fit_model, gap_at, projection_series, summarize,
};

use crate::cli::ProjectArgs;
use crate::{convert, load, output};

#[derive(Serialize)]
struct GapPoint {
    year: i32,
    gap_pct: f64,
}

#[derive(Serialize)]
struct ProjectOutput<'a> {
    model: &'a str,
    line: LinearModel,
    summary: ProjectionSummary,
    series: Vec<ProjectionPoint>,
    target_path: &'a [TargetPathPoint],
    gaps: Vec<GapPoint>,
}

/// Run the projection configured in `[projection]`.
pub fn run(args: ProjectArgs) -> Result<()> {
    let _cmd = info_span!("project").entered();
    let config = load::config(&args.common.config)?;
    let projection = &config.projection;

    let model_name = args.model.as_deref().unwrap_or(&projection.model);
    let model = convert::parse_model(model_name)?;

    let history = load::history(&config)?;
    let reference_value = history
        .require(projection.reference_year)
        .context("reference year missing from history")?;
    let target_cfg = convert::build_target_config(projection, reference_value)?;
    let path = build_target_path(&target_cfg).context("failed to build target path")?;

    let line = fit_model(&history, model, &target_cfg).context("failed to fit projection")?;
    let first_year = history
        .points()
        .first()
        .map_or(projection.reference_year, |&(y, _)| y);
    let series = projection_series(&history, &line, first_year..=projection.end_year);
    let summary = summarize(&history, &line, &path);
    let gaps = (target_cfg.plateau_end_year()..=target_cfg.target_year())
        .filter_map(|year| gap_at(&line, &path, year).map(|gap_pct| GapPoint { year, gap_pct }))
        .collect();
    info!(
        ?model,
        overshoot_pct = ?summary.overshoot_pct,
        "projection computed"
    );

    output::write_json(
        &ProjectOutput {
            model: model_name,
            line,
            summary,
            series,
            target_path: path.points(),
            gaps,
        },
        args.common.output.as_deref(),
    )
}
