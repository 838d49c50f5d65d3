//! Full-recompute engine and reference BFS closeness (§4.C, §4.H).
//!
//! Both operate directly on the [`Graph`] store and deliberately avoid any
//! dependency on the incremental insert/delete engines' bookkeeping — they
//! are the independent oracle that incremental results are checked against
//! (§4.H), not a shortcut built from the same state.

use std::collections::{BTreeSet, HashMap};

use crate::closeness;
use crate::distances::DistanceTables;
use crate::graph::{Graph, VertexId};

/// Single-source shortest paths from `source` over `graph`, via Dijkstra.
///
/// Costs are assumed non-negative (enforced by [`Graph::add_arc`]'s callers);
/// the priority queue is a `BTreeSet` keyed by `(cost.to_bits(), id)`, which
/// preserves numeric ordering for non-negative finite `f64` because the IEEE
/// 754 bit pattern of such values is itself monotonic.
pub(crate) fn dijkstra_from(graph: &Graph, source: VertexId) -> HashMap<VertexId, f64> {
    let mut dist: HashMap<VertexId, f64> = HashMap::new();
    dist.insert(source, 0.0);

    let mut pq: BTreeSet<(u64, VertexId)> = BTreeSet::new();
    pq.insert((0u64, source));

    while let Some((cost_bits, u)) = pq.pop_first() {
        let cost = f64::from_bits(cost_bits);

        if let Some(&best) = dist.get(&u) {
            if cost > best {
                continue;
            }
        }

        for (v, w) in graph.successors(u) {
            let cand = cost + w;
            let improves = dist.get(&v).map(|&d| cand < d).unwrap_or(true);
            if improves {
                dist.insert(v, cand);
                pq.insert((cand.to_bits(), v));
            }
        }
    }

    dist
}

/// Rebuild `D[s]` and `TotDist[s]` for every source `s ∈ V`, from scratch.
///
/// Deterministic; used for initialization, for the graph-joining fallback in
/// `insert_edge_growing` (§9), and as the correctness oracle in tests.
pub fn recompute_all(graph: &Graph) -> DistanceTables {
    let mut tables = DistanceTables::new();
    for s in graph.vertices() {
        let dist = dijkstra_from(graph, s);
        let sum: f64 = dist.values().sum();
        tables.replace_row(s, dist, sum);
    }
    tables
}

/// Compute closeness for every vertex directly from scratch, via one
/// single-source search per vertex, bypassing `D`/`TotDist` entirely.
///
/// This is the correctness oracle for property tests (§8 P1) and the
/// classical baseline for the benchmark (§6.3).
pub fn compute_all_closeness(graph: &Graph) -> HashMap<VertexId, f64> {
    let n = graph.len();
    let mut result = HashMap::new();
    for s in graph.vertices() {
        let dist = dijkstra_from(graph, s);
        let reachable = dist.len().saturating_sub(1);
        let tot_dist: f64 = dist.values().sum();
        result.insert(s, closeness::normalize(reachable, tot_dist, n));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of_four() -> Graph {
        let mut g = Graph::new();
        for v in 0..4 {
            g.add_vertex(v);
        }
        for (u, v) in [(0, 1), (1, 0), (1, 2), (2, 1), (2, 3), (3, 2)] {
            g.add_arc(u, v, 1.0).unwrap();
        }
        g
    }

    #[test]
    fn recompute_all_matches_expected_line_of_four() {
        let g = line_of_four();
        let tables = recompute_all(&g);
        assert_eq!(tables.get(0, 3), Some(3.0));
        assert_eq!(tables.sum(0), 0.0 + 1.0 + 2.0 + 3.0);
        assert_eq!(tables.reachable(0), 4);
    }

    #[test]
    fn compute_all_closeness_matches_line_of_four_scenario() {
        let g = line_of_four();
        let c = compute_all_closeness(&g);
        assert!((c[&0] - 0.5).abs() < 1e-9);
        assert!((c[&3] - 0.5).abs() < 1e-9);
        assert!((c[&1] - 0.75).abs() < 1e-9);
        assert!((c[&2] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn single_vertex_closeness_is_zero() {
        let mut g = Graph::new();
        g.add_vertex(0);
        let c = compute_all_closeness(&g);
        assert_eq!(c[&0], 0.0);
    }
}
