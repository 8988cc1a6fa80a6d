use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ember emissions trend, change and projection toolkit.
#[derive(Parser)]
#[command(
    name = "ember",
    version,
    about = "Emissions trend, change and projection toolkit"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Per-group means of one measure for a year or month.
    Snapshot(SnapshotArgs),
    /// Yearly overall (and optional per-group) average series.
    Series(SeriesArgs),
    /// Percent change of each group between the baseline and latest periods.
    Change(ChangeArgs),
    /// Project the emissions history against the target path.
    Project(ProjectArgs),
    /// Rank the top emitters for one or every year.
    Race(RaceArgs),
    /// Autoplay the bar race in the terminal.
    Play(PlayArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "ember.toml")]
    pub config: PathBuf,

    /// Write JSON output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `snapshot` subcommand.
#[derive(clap::Args)]
pub struct SnapshotArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Measure column; defaults to `[change].measure`.
    #[arg(short, long)]
    pub measure: Option<String>,

    /// Year of the snapshot.
    #[arg(short, long)]
    pub year: i32,

    /// Month of the snapshot (1-12); whole year when omitted.
    #[arg(long)]
    pub month: Option<u8>,
}

/// Arguments for the `series` subcommand.
#[derive(clap::Args)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Measure column; defaults to `[change].measure`.
    #[arg(short, long)]
    pub measure: Option<String>,

    /// Group whose own yearly mean is reported next to the overall mean.
    #[arg(short, long)]
    pub group: Option<String>,
}

/// Arguments for the `change` subcommand.
#[derive(clap::Args)]
pub struct ChangeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Measure column; overrides `[change].measure`.
    #[arg(short, long)]
    pub measure: Option<String>,
}

/// Arguments for the `project` subcommand.
#[derive(clap::Args)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Projection model (`linear` or `faster-cut`); overrides config.
    #[arg(long)]
    pub model: Option<String>,
}

/// Arguments for the `race` subcommand.
#[derive(clap::Args)]
pub struct RaceArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only this year; every year with data when omitted.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Also report the sector breakdown of this country code.
    #[arg(long)]
    pub sectors_for: Option<String>,
}

/// Arguments for the `play` subcommand.
#[derive(clap::Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of frames to play (at least 1); one full pass when omitted.
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub frames: Option<u64>,

    /// Country name to follow through the frames.
    #[arg(short, long)]
    pub select: Option<String>,
}
