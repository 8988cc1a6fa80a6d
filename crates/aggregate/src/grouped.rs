//! Grouped reductions over observations.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;
use tracing::trace;

use crate::observation::Observation;

/// Result of a grouped reduction: one entry per key seen in the input.
///
/// A key maps to `None` when all of its observations were missing or
/// invalid, which keeps "no data" distinguishable from a reduced value of
/// zero. Keys are unique and iterate in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Grouped<K: Ord> {
    values: BTreeMap<K, Option<f64>>,
}

impl<K: Ord> Grouped<K> {
    /// Builds a grouping from already-reduced values.
    pub fn from_map(values: BTreeMap<K, Option<f64>>) -> Self {
        Self { values }
    }

    /// Returns the reduced value for `key`, or `None` if the key is absent
    /// or had no valid observations.
    pub fn get(&self, key: &K) -> Option<f64> {
        self.values.get(key).copied().flatten()
    }

    /// Returns `true` if `key` was seen, whether or not it has a value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// Returns `true` if `key` has a reduced value.
    pub fn is_defined(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over every key with its (possibly undefined) value.
    pub fn iter(&self) -> btree_map::Iter<'_, K, Option<f64>> {
        self.values.iter()
    }

    /// Iterates over the defined values in key order.
    pub fn defined_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.values().filter_map(|v| *v)
    }

    /// Number of keys, including undefined ones.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no keys were seen.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes self and returns the underlying map.
    pub fn into_map(self) -> BTreeMap<K, Option<f64>> {
        self.values
    }
}

impl<'a, K: Ord> IntoIterator for &'a Grouped<K> {
    type Item = (&'a K, &'a Option<f64>);
    type IntoIter = btree_map::Iter<'a, K, Option<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Groups observations by `key` and reduces each group's valid values with
/// `reduce`.
///
/// Every key that appears in `rows` gets an entry. `reduce` receives only
/// finite values, possibly none.
pub fn group_by<'a, I, K, F, R>(rows: I, key: F, reduce: R) -> Grouped<K>
where
    I: IntoIterator<Item = &'a Observation>,
    K: Ord,
    F: Fn(&Observation) -> K,
    R: Fn(&[f64]) -> Option<f64>,
{
    let mut buckets: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    let mut n_rows = 0usize;
    let mut n_missing = 0usize;
    for obs in rows {
        n_rows += 1;
        let bucket = buckets.entry(key(obs)).or_default();
        match obs.valid_value() {
            Some(v) => bucket.push(v),
            None => n_missing += 1,
        }
    }
    trace!(n_rows, n_missing, n_groups = buckets.len(), "grouped observations");

    let values = buckets
        .into_iter()
        .map(|(k, vals)| {
            let reduced = reduce(&vals);
            (k, reduced)
        })
        .collect();
    Grouped { values }
}

/// Mean of the valid values of each group.
///
/// Missing values are excluded rather than counted as zero; a group with no
/// valid values maps to `None`.
pub fn group_mean<'a, I, K, F>(rows: I, key: F) -> Grouped<K>
where
    I: IntoIterator<Item = &'a Observation>,
    K: Ord,
    F: Fn(&Observation) -> K,
{
    group_by(rows, key, |vals| ember_stats::mean(vals.iter().copied()))
}

/// Sum of the valid values of each group; `None` for groups with no valid
/// values.
pub fn group_sum<'a, I, K, F>(rows: I, key: F) -> Grouped<K>
where
    I: IntoIterator<Item = &'a Observation>,
    K: Ord,
    F: Fn(&Observation) -> K,
{
    group_by(rows, key, |vals| ember_stats::sum(vals.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn by_group(o: &Observation) -> String {
        o.group().to_string()
    }

    #[test]
    fn mean_excludes_missing() {
        let rows = vec![
            Observation::new("A", 2020, None, None),
            Observation::new("A", 2020, None, Some(10.0)),
        ];
        let g = group_mean(&rows, by_group);
        assert_eq!(g.len(), 1);
        assert_eq!(g.get(&"A".to_string()), Some(10.0));
    }

    #[test]
    fn all_missing_group_is_undefined_not_zero() {
        let rows = vec![
            Observation::new("A", 2020, None, None),
            Observation::new("A", 2020, None, Some(f64::NAN)),
            Observation::new("B", 2020, None, Some(0.0)),
        ];
        let g = group_mean(&rows, by_group);
        assert!(g.contains_key(&"A".to_string()));
        assert!(!g.is_defined(&"A".to_string()));
        assert_eq!(g.get(&"B".to_string()), Some(0.0));
    }

    #[test]
    fn sum_groups() {
        let rows = vec![
            Observation::new("A", 2020, None, Some(1.5)),
            Observation::new("B", 2020, None, Some(4.0)),
            Observation::new("A", 2020, None, Some(2.5)),
            Observation::new("B", 2020, None, None),
        ];
        let g = group_sum(&rows, by_group);
        assert_relative_eq!(g.get(&"A".to_string()).unwrap(), 4.0);
        assert_relative_eq!(g.get(&"B".to_string()).unwrap(), 4.0);
    }

    #[test]
    fn custom_key_extractor() {
        let rows = vec![
            Observation::new("A", 2020, Some(1), Some(1.0)),
            Observation::new("B", 2020, Some(1), Some(3.0)),
            Observation::new("A", 2020, Some(2), Some(5.0)),
        ];
        let g = group_mean(&rows, |o| o.month());
        assert_relative_eq!(g.get(&Some(1)).unwrap(), 2.0);
        assert_relative_eq!(g.get(&Some(2)).unwrap(), 5.0);
    }

    #[test]
    fn defined_values_skip_undefined() {
        let rows = vec![
            Observation::new("A", 2020, None, Some(2.0)),
            Observation::new("B", 2020, None, None),
            Observation::new("C", 2020, None, Some(4.0)),
        ];
        let g = group_mean(&rows, by_group);
        let vals: Vec<f64> = g.defined_values().collect();
        assert_eq!(vals, vec![2.0, 4.0]);
    }

    #[test]
    fn empty_input_is_empty() {
        let rows: Vec<Observation> = Vec::new();
        let g = group_mean(&rows, by_group);
        assert!(g.is_empty());
    }

    #[test]
    fn from_map_matches_grouping() {
        let rows = vec![
            Observation::new("A", 2020, None, Some(2.0)),
            Observation::new("B", 2020, None, None),
        ];
        let g = group_mean(&rows, by_group);
        let mut map = BTreeMap::new();
        map.insert("A".to_string(), Some(2.0));
        map.insert("B".to_string(), None);
        assert_eq!(g, Grouped::from_map(map));
    }

    #[test]
    fn into_map_keeps_undefined_keys() {
        let rows = vec![
            Observation::new("A", 2020, None, Some(2.0)),
            Observation::new("B", 2020, None, None),
        ];
        let map = group_mean(&rows, by_group).into_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["A"], Some(2.0));
        assert_eq!(map["B"], None);
    }
}
