//! Symmetric station-pair distance table.
//!
//! Distances are configuration data consumed by direct lookup — there is no
//! path search.  Each undirected edge is stored in both orientations so
//! lookups never have to normalize key order.

use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct DistanceTable {
    inner: FxHashMap<String, FxHashMap<String, u64>>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an undirected edge between `a` and `b`.
    pub fn insert(&mut self, a: &str, b: &str, distance: u64) {
        self.inner
            .entry(a.to_owned())
            .or_default()
            .insert(b.to_owned(), distance);
        self.inner
            .entry(b.to_owned())
            .or_default()
            .insert(a.to_owned(), distance);
    }

    /// Distance between two stations, in either direction.
    pub fn get(&self, a: &str, b: &str) -> Option<u64> {
        self.inner.get(a).and_then(|row| row.get(b)).copied()
    }
}
