mod change_cmd;
mod cli;
mod config;
mod convert;
mod load;
mod logging;
mod output;
mod play_cmd;
mod project_cmd;
mod race_cmd;
mod snapshot_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Snapshot(args) => snapshot_cmd::run_snapshot(args),
        Command::Series(args) => snapshot_cmd::run_series(args),
        Command::Change(args) => change_cmd::run(args),
        Command::Project(args) => project_cmd::run(args),
        Command::Race(args) => race_cmd::run(args),
        Command::Play(args) => play_cmd::run(args),
    }
}
