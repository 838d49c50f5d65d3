//! Per-source distance tables (§4.B).
//!
//! `D[s]` is a sparse map from reachable target to shortest-path distance;
//! `TotDist[s]` is its cached sum. Both are kept in lockstep by every
//! mutating method here — callers never touch one without the other.

use std::collections::HashMap;

use crate::graph::VertexId;

/// `D[s]` rows and their cached `TotDist[s]` sums, for every source `s`.
#[derive(Debug, Default, Clone)]
pub struct DistanceTables {
    rows: HashMap<VertexId, HashMap<VertexId, f64>>,
    tot_dist: HashMap<VertexId, f64>,
}

impl DistanceTables {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// `D[s][t]`, or `None` if `t` is unreachable from `s` (or `s` is absent).
    pub fn get(&self, s: VertexId, t: VertexId) -> Option<f64> {
        self.rows.get(&s)?.get(&t).copied()
    }

    /// Set `D[s][t] = d`, updating `TotDist[s]` by the delta against any
    /// prior value (treating an absent entry as contributing zero).
    pub fn set(&mut self, s: VertexId, t: VertexId, d: f64) {
        let row = self.rows.entry(s).or_default();
        let old = row.insert(t, d);
        let delta = d - old.unwrap_or(0.0);
        *self.tot_dist.entry(s).or_insert(0.0) += delta;
    }

    /// Remove `D[s][t]` if present, decrementing `TotDist[s]` accordingly.
    pub fn erase(&mut self, s: VertexId, t: VertexId) {
        if let Some(row) = self.rows.get_mut(&s) {
            if let Some(old) = row.remove(&t) {
                *self.tot_dist.entry(s).or_insert(0.0) -= old;
            }
        }
    }

    /// `TotDist[s]`, or `0.0` if `s` is absent.
    pub fn sum(&self, s: VertexId) -> f64 {
        self.tot_dist.get(&s).copied().unwrap_or(0.0)
    }

    /// `|dom(D[s])|`, the number of vertices reachable from `s` including
    /// `s` itself.
    pub fn reachable(&self, s: VertexId) -> usize {
        self.rows.get(&s).map(|row| row.len()).unwrap_or(0)
    }

    /// Iterate over `(t, D[s][t])` pairs for source `s`.
    pub fn row(&self, s: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.rows
            .get(&s)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&t, &d)| (t, d)))
    }

    /// Atomically replace `D[s]` and `TotDist[s]` with freshly computed
    /// values, e.g. after a full single-source refresh.
    pub fn replace_row(&mut self, s: VertexId, new_row: HashMap<VertexId, f64>, new_sum: f64) {
        self.rows.insert(s, new_row);
        self.tot_dist.insert(s, new_sum);
    }

    /// Initialize a freshly added, isolated source: `D[s] = {s: 0}`,
    /// `TotDist[s] = 0`.
    pub fn init_source(&mut self, s: VertexId) {
        let mut row = HashMap::new();
        row.insert(s, 0.0);
        self.rows.insert(s, row);
        self.tot_dist.insert(s, 0.0);
    }

    /// Drop `s`'s own row and sum entirely (used when `s` leaves `V`).
    pub fn remove_source(&mut self, s: VertexId) {
        self.rows.remove(&s);
        self.tot_dist.remove(&s);
    }

    /// Purge `target` from every remaining row, decrementing each source's
    /// `TotDist` by the distance it held to `target`. Used when `target`
    /// leaves `V` (§4.F).
    pub fn purge_target(&mut self, target: VertexId) {
        for (s, row) in self.rows.iter_mut() {
            if let Some(old) = row.remove(&target) {
                *self.tot_dist.entry(*s).or_insert(0.0) -= old;
            }
        }
    }

    /// All sources currently holding a row (should track the graph's vertex
    /// set exactly; used by invariant checks).
    pub fn sources(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.rows.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_roundtrips() {
        let mut d = DistanceTables::new();
        d.set(1, 2, 3.0);
        assert_eq!(d.get(1, 2), Some(3.0));
        assert_eq!(d.sum(1), 3.0);
    }

    #[test]
    fn set_overwrite_adjusts_sum_by_delta() {
        let mut d = DistanceTables::new();
        d.set(1, 2, 3.0);
        d.set(1, 3, 4.0);
        d.set(1, 2, 1.0);
        assert_eq!(d.sum(1), 5.0);
    }

    #[test]
    fn erase_removes_and_adjusts_sum() {
        let mut d = DistanceTables::new();
        d.set(1, 2, 3.0);
        d.erase(1, 2);
        assert_eq!(d.get(1, 2), None);
        assert_eq!(d.sum(1), 0.0);
    }

    #[test]
    fn init_source_is_self_zero() {
        let mut d = DistanceTables::new();
        d.init_source(7);
        assert_eq!(d.get(7, 7), Some(0.0));
        assert_eq!(d.reachable(7), 1);
        assert_eq!(d.sum(7), 0.0);
    }

    #[test]
    fn purge_target_updates_every_row() {
        let mut d = DistanceTables::new();
        d.set(1, 9, 2.0);
        d.set(2, 9, 4.0);
        d.set(2, 3, 1.0);
        d.purge_target(9);
        assert_eq!(d.get(1, 9), None);
        assert_eq!(d.get(2, 9), None);
        assert_eq!(d.sum(1), 0.0);
        assert_eq!(d.sum(2), 1.0);
    }

    #[test]
    fn remove_source_drops_its_row() {
        let mut d = DistanceTables::new();
        d.set(1, 2, 3.0);
        d.remove_source(1);
        assert_eq!(d.reachable(1), 0);
        assert_eq!(d.sum(1), 0.0);
    }
}
