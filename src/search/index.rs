//! Rise-value index over the catalog.
//!
//! The builder repeatedly asks "which entries sit near this target rise?", so
//! we group the catalog by exact rise value once per run. A `BTreeMap` keeps
//! the window scans explicitly sorted; ascending-rise iteration order decides
//! nearest-match ties and must not depend on incidental hash order.
//!
//! Invariant: the buckets partition the catalog. Every entry appears in
//! exactly one bucket, in catalog order within that bucket.

use std::collections::BTreeMap;

use crate::domain::DelayEntry;

/// Catalog entries grouped by exact rise value.
///
/// Pure function of the catalog; built once per search run and dropped with
/// it. Borrows the catalog rather than cloning it.
#[derive(Debug)]
pub struct RiseIndex<'a> {
    buckets: BTreeMap<i64, Vec<&'a DelayEntry>>,
    values: Vec<i64>,
}

impl<'a> RiseIndex<'a> {
    pub fn build(entries: &'a [DelayEntry]) -> Self {
        let mut buckets: BTreeMap<i64, Vec<&'a DelayEntry>> = BTreeMap::new();
        for entry in entries {
            buckets.entry(entry.rise).or_default().push(entry);
        }
        // BTreeMap keys iterate ascending, so this is already sorted.
        let values = buckets.keys().copied().collect();
        Self { buckets, values }
    }

    /// Distinct rise values, ascending.
    pub fn rise_values(&self) -> &[i64] {
        &self.values
    }

    /// Entries sharing `rise` exactly, in catalog order. Empty for a rise
    /// value the catalog does not contain.
    pub fn bucket(&self, rise: i64) -> &[&'a DelayEntry] {
        self.buckets.get(&rise).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Buckets whose rise value lies in `[lo, hi]`, ascending.
    ///
    /// An inverted window (`lo > hi`) yields nothing; this is how a negative
    /// match radius degrades to "no candidates" instead of panicking.
    pub fn buckets_in_window(
        &self,
        lo: i64,
        hi: i64,
    ) -> impl Iterator<Item = (i64, &[&'a DelayEntry])> + '_ {
        let window = (lo <= hi).then_some(lo..=hi);
        window
            .into_iter()
            .flat_map(|w| self.buckets.range(w))
            .map(|(rise, bucket)| (*rise, bucket.as_slice()))
    }
}
