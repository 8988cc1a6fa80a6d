//! Baseline-to-latest percent change computation.

use std::collections::BTreeMap;

use ember_aggregate::Grouped;
use ember_stats::{max_abs_or_one, mean, pct_change};
use tracing::debug;

use crate::config::ChangeConfig;
use crate::error::ChangeError;
use crate::result::ChangeStats;

/// Computes per-group and population-level percent changes.
///
/// For each key defined in both snapshots with `|baseline| > epsilon`:
/// `pct = (latest - baseline) / |baseline| * 100`. Other keys are omitted.
///
/// The population figure compares the mean of every defined baseline value
/// with the mean of every defined latest value, using the same formula and
/// guard. Keys present in only one snapshot still contribute to that
/// snapshot's mean.
///
/// # Errors
///
/// Returns [`ChangeError::InvalidConfig`] if the configuration is invalid.
pub fn change_stats<K>(
    baseline: &Grouped<K>,
    latest: &Grouped<K>,
    config: &ChangeConfig,
) -> Result<ChangeStats<K>, ChangeError>
where
    K: Ord + Clone,
{
    config.validate()?;
    let eps = config.epsilon();

    let mut per_group = BTreeMap::new();
    let mut n_degenerate = 0usize;
    for (key, base) in baseline {
        let (Some(b), Some(l)) = (*base, latest.get(key)) else {
            continue;
        };
        match pct_change(b, l, eps) {
            Some(pct) => {
                per_group.insert(key.clone(), pct);
            }
            None => n_degenerate += 1,
        }
    }

    let population = match (mean(baseline.defined_values()), mean(latest.defined_values())) {
        (Some(b), Some(l)) => pct_change(b, l, eps),
        _ => None,
    };
    let max_abs = max_abs_or_one(per_group.values().copied());

    debug!(
        n_groups = per_group.len(),
        n_degenerate,
        ?population,
        max_abs,
        "computed change statistics"
    );

    Ok(ChangeStats::new(per_group, population, max_abs))
}
