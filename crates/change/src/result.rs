//! Result type for change statistics.

use std::collections::BTreeMap;

use serde::Serialize;

/// Percent changes between two grouped snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeStats<K: Ord> {
    per_group: BTreeMap<K, f64>,
    population: Option<f64>,
    max_abs: f64,
}

impl<K: Ord> ChangeStats<K> {
    pub(crate) fn new(per_group: BTreeMap<K, f64>, population: Option<f64>, max_abs: f64) -> Self {
        Self {
            per_group,
            population,
            max_abs,
        }
    }

    /// Percent change for every group with a usable baseline and latest value.
    pub fn per_group(&self) -> &BTreeMap<K, f64> {
        &self.per_group
    }

    /// Percent change for one group, if defined.
    pub fn get(&self, key: &K) -> Option<f64> {
        self.per_group.get(key).copied()
    }

    /// Percent change between the mean of all baseline values and the mean
    /// of all latest values. `None` when either mean is undefined or the
    /// baseline mean is degenerate.
    pub fn population(&self) -> Option<f64> {
        self.population
    }

    /// Largest absolute per-group change, or 1.0 when there is none.
    pub fn max_abs(&self) -> f64 {
        self.max_abs
    }

    /// Arithmetic mean of the per-group changes.
    ///
    /// This is not the same statistic as [`population`](Self::population).
    pub fn mean_of_changes(&self) -> Option<f64> {
        ember_stats::mean(self.per_group.values().copied())
    }

    /// Number of groups with a defined change.
    pub fn len(&self) -> usize {
        self.per_group.len()
    }

    /// Returns `true` if no group has a defined change.
    pub fn is_empty(&self) -> bool {
        self.per_group.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accessors() {
        let per_group: BTreeMap<String, f64> =
            [("A".to_string(), 100.0), ("B".to_string(), -20.0)].into_iter().collect();
        let stats = ChangeStats::new(per_group.clone(), Some(0.99), 100.0);
        assert_eq!(stats.per_group(), &per_group);
        assert_eq!(stats.get(&"A".to_string()), Some(100.0));
        assert_eq!(stats.get(&"C".to_string()), None);
        assert_eq!(stats.population(), Some(0.99));
        assert_relative_eq!(stats.max_abs(), 100.0);
        assert_relative_eq!(stats.mean_of_changes().unwrap(), 40.0);
        assert_eq!(stats.len(), 2);
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_empty() {
        let stats: ChangeStats<String> = ChangeStats::new(BTreeMap::new(), None, 1.0);
        assert!(stats.is_empty());
        assert_eq!(stats.len(), 0);
        assert_eq!(stats.population(), None);
        assert_eq!(stats.mean_of_changes(), None);
        assert_relative_eq!(stats.max_abs(), 1.0);
    }
}
