//! Incremental insert engine (§4.D): `insert_edge_growing`.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::distances::DistanceTables;
use crate::error::EngineError;
use crate::graph::{Graph, VertexId};
use crate::reference;

/// Extend `graph` with arc `u -> v` of cost `c` and repair `tables` so every
/// invariant in §3 holds again, in time proportional to the size of the
/// region whose distances actually changed.
///
/// Returns the set of sources whose `D`/`TotDist` row changed, so the caller
/// can recompute `C` only for those (§4.D step 4). If the graph-joining
/// fallback (§9) fires, every currently present source is returned.
pub fn insert_edge_growing(
    graph: &mut Graph,
    tables: &mut DistanceTables,
    u: VertexId,
    v: VertexId,
    c: f64,
) -> Result<Vec<VertexId>, EngineError> {
    graph.add_arc(u, v, c)?;

    let mut affected = Vec::new();
    for s in graph.vertices() {
        let d_su = tables.get(s, u);
        let d_sv = tables.get(s, v);
        let candidate = match d_su {
            Some(d_su) => d_su + c,
            None => continue, // u unreachable from s: can't shorten anything via u
        };
        let improves = match d_sv {
            Some(d_sv) => candidate < d_sv,
            None => true, // v newly reachable
        };
        if improves {
            affected.push(s);
        }
    }

    if affected.is_empty() {
        let n = graph.len();
        let joined = graph.vertices().any(|s| tables.reachable(s) < n);
        if joined {
            debug!(
                u, v, "insert_edge_growing: graph-joining fallback, recompute_all triggered"
            );
            *tables = reference::recompute_all(graph);
            return Ok(graph.vertices().collect());
        }
        return Ok(affected);
    }

    for &s in &affected {
        update_growing(graph, tables, u, v, s, c);
    }

    Ok(affected)
}

/// Propagate shortened distances from source `s` outward from `v`, after
/// the new arc `u -> v` made `D[s][v]` strictly shorter.
///
/// Implemented with an explicit queue, not recursion, to bound stack use at
/// `O(|V|)` per §9.
fn update_growing(graph: &Graph, tables: &mut DistanceTables, u: VertexId, v: VertexId, s: VertexId, c: f64) {
    let new_dv = tables.get(s, u).expect("s -> u must be finite: caller checked") + c;
    tables.set(s, v, new_dv);

    let mut visited: HashSet<VertexId> = HashSet::new();
    visited.insert(v);
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    queue.push_back(v);

    while let Some(y) = queue.pop_front() {
        let d_sy = tables.get(s, y).expect("y was just set/visited");
        for (w, weight) in graph.successors(y) {
            let cand = d_sy + weight;
            let improves = tables.get(s, w).map(|d| cand < d).unwrap_or(true);
            if improves {
                tables.set(s, w, cand);
                trace!(source = s, via = y, target = w, new_distance = cand, "relaxed");
                if visited.insert(w) {
                    queue.push_back(w);
                }
            }
        }
    }
}
