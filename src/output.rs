//! JSON output to stdout or a file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Serialises `value` as pretty JSON to `path`, or to stdout when `None`.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    match path {
        Some(p) => {
            std::fs::write(p, format!("{json}\n"))
                .with_context(|| format!("failed to write output: {}", p.display()))?;
            info!(path = %p.display(), "output written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
