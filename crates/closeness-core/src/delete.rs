//! Incremental delete engine (§4.E): `delete_edge_shrinking`.

use tracing::trace;

use crate::distances::DistanceTables;
use crate::graph::{Graph, VertexId};
use crate::reference::dijkstra_from;

/// Tolerance for the floating-point "lay on a shortest path" equality test
/// `D[s][u] + c == D[s][v]`. Distances accumulate from unit or small integer
/// costs in practice, so this only guards against accumulated rounding.
const SP_EPSILON: f64 = 1e-9;

/// Remove arc `u -> v` from `graph` and refresh `tables` so every invariant
/// in §3 holds again.
///
/// Returns the set of sources whose `D`/`TotDist` row was refreshed (§4.E
/// step 4), so the caller can recompute `C` only for those.
pub fn delete_edge_shrinking(
    graph: &mut Graph,
    tables: &mut DistanceTables,
    u: VertexId,
    v: VertexId,
    c: f64,
) -> Vec<VertexId> {
    if !graph.has_arc(u, v) {
        return Vec::new();
    }
    graph.remove_arc(u, v);

    let mut affected = Vec::new();
    for s in graph.vertices() {
        let (d_su, d_sv) = (tables.get(s, u), tables.get(s, v));
        if let (Some(d_su), Some(d_sv)) = (d_su, d_sv) {
            if (d_su + c - d_sv).abs() < SP_EPSILON {
                affected.push(s);
            }
        }
    }

    for &s in &affected {
        trace!(source = s, u, v, "delete_edge_shrinking: refreshing row");
        let dist = dijkstra_from(graph, s);
        let sum: f64 = dist.values().sum();
        tables.replace_row(s, dist, sum);
    }

    affected
}
