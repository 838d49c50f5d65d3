//! Aggregate engine (§4.F, §6.4): owns the graph, the distance tables, and
//! the closeness table, and dispatches every mutation to the module that
//! knows how to repair them.

use std::collections::HashMap;

use tracing::debug;

use crate::closeness;
use crate::delete::delete_edge_shrinking;
use crate::distances::DistanceTables;
use crate::error::EngineError;
use crate::graph::{Graph, VertexId};
use crate::insert::insert_edge_growing;

/// The incrementally maintained closeness centrality engine.
///
/// `Engine` is the only type external callers need: it owns a [`Graph`], the
/// [`DistanceTables`] that shadow it, and a closeness table `C` kept in sync
/// after every mutation. Edges are undirected at this layer (§3) — each is
/// stored as a mirrored pair of unit-cost arcs in the underlying graph.
#[derive(Debug, Default, Clone)]
pub struct Engine {
    graph: Graph,
    tables: DistanceTables,
    closeness: HashMap<VertexId, f64>,
}

/// Default arc cost for undirected edges. The engine only ever sees
/// unweighted graphs (§3); nothing in the incremental machinery depends on
/// this being `1.0` specifically.
const UNIT_COST: f64 = 1.0;

impl Engine {
    /// An empty engine: no vertices, no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertex `id` to the graph. No-op if it already exists.
    ///
    /// `|V|` changes, so every source's closeness score depends on a new
    /// denominator (§4.G) and is recomputed, not just the new vertex's own.
    pub fn add_node(&mut self, id: VertexId) {
        if self.graph.contains(id) {
            return;
        }
        self.graph.add_vertex(id);
        self.tables.init_source(id);
        debug!(id, "add_node");
        self.recompute_closeness_all();
    }

    /// Remove vertex `id` and every edge incident to it. No-op if absent.
    ///
    /// Each incident edge is retired through [`delete_edge_shrinking`] (in
    /// both directions) before the vertex itself leaves the graph, so every
    /// other source's `D`/`TotDist` row is repaired exactly as it would be
    /// for an explicit edge removal. `|V|` then shrinks, so every remaining
    /// source's closeness is recomputed.
    pub fn remove_node(&mut self, id: VertexId) {
        if !self.graph.contains(id) {
            return;
        }

        let out_arcs: Vec<(VertexId, VertexId, f64)> = self
            .graph
            .successors(id)
            .map(|(w, c)| (id, w, c))
            .collect();
        let in_arcs: Vec<(VertexId, VertexId, f64)> = self
            .graph
            .predecessors(id)
            .map(|(u, c)| (u, id, c))
            .collect();

        for (u, v, c) in out_arcs {
            delete_edge_shrinking(&mut self.graph, &mut self.tables, u, v, c);
        }
        for (u, v, c) in in_arcs {
            delete_edge_shrinking(&mut self.graph, &mut self.tables, u, v, c);
        }

        self.graph.remove_vertex(id);
        self.tables.remove_source(id);
        self.tables.purge_target(id);
        self.closeness.remove(&id);
        debug!(id, "remove_node");
        self.recompute_closeness_all();
    }

    /// Add an undirected edge `{u, v}` of unit cost.
    ///
    /// Fails with [`EngineError::UnknownVertex`] if either endpoint is
    /// absent, leaving both the graph and the tables untouched — checked
    /// before either mirrored arc is inserted so the pair is atomic.
    pub fn add_undirected_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), EngineError> {
        if !self.graph.contains(u) {
            return Err(EngineError::UnknownVertex { vertex: u });
        }
        if !self.graph.contains(v) {
            return Err(EngineError::UnknownVertex { vertex: v });
        }

        let mut affected = insert_edge_growing(&mut self.graph, &mut self.tables, u, v, UNIT_COST)?;
        let back = insert_edge_growing(&mut self.graph, &mut self.tables, v, u, UNIT_COST)?;
        affected.extend(back);

        debug!(u, v, "add_undirected_edge");
        self.recompute_closeness_for(affected);
        Ok(())
    }

    /// Remove undirected edge `{u, v}`. No-op if the edge is absent.
    pub fn remove_undirected_edge(&mut self, u: VertexId, v: VertexId) {
        let Some(c) = self.graph.arc_cost(u, v) else {
            return;
        };

        let mut affected = delete_edge_shrinking(&mut self.graph, &mut self.tables, u, v, c);
        let back = delete_edge_shrinking(&mut self.graph, &mut self.tables, v, u, c);
        affected.extend(back);

        debug!(u, v, "remove_undirected_edge");
        self.recompute_closeness_for(affected);
    }

    /// Current closeness score for `id`. `0.0` if `id` is not a vertex —
    /// querying an unknown id is a convenience lookup, not a precondition
    /// violation (§7).
    pub fn closeness(&self, id: VertexId) -> f64 {
        self.closeness.get(&id).copied().unwrap_or(0.0)
    }

    /// Closeness scores for every current vertex.
    pub fn all_closeness(&self) -> HashMap<VertexId, f64> {
        self.closeness.clone()
    }

    /// `|V|`.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Whether `id` is currently a vertex.
    pub fn contains(&self, id: VertexId) -> bool {
        self.graph.contains(id)
    }

    fn recompute_closeness_for(&mut self, sources: impl IntoIterator<Item = VertexId>) {
        let n = self.graph.len();
        for s in sources {
            let score = closeness::normalize(self.tables.reachable(s).saturating_sub(1), self.tables.sum(s), n);
            self.closeness.insert(s, score);
        }
        #[cfg(debug_assertions)]
        self.debug_assert_consistent();
    }

    fn recompute_closeness_all(&mut self) {
        let sources: Vec<VertexId> = self.graph.vertices().collect();
        self.recompute_closeness_for(sources);
    }

    /// Cross-check `tables`/`closeness` against `graph` after a mutation.
    /// Only compiled into debug builds (§7): surfacing [`EngineError::Inconsistency`]
    /// here is always a bug in this module, never caller misuse.
    #[cfg(debug_assertions)]
    fn debug_assert_consistent(&self) {
        for s in self.graph.vertices() {
            if self.tables.get(s, s) != Some(0.0) {
                panic!(
                    "{}",
                    EngineError::Inconsistency {
                        detail: format!("D[{s}][{s}] is not 0"),
                    }
                );
            }
            if !self.closeness.contains_key(&s) {
                panic!(
                    "{}",
                    EngineError::Inconsistency {
                        detail: format!("vertex {s} has no closeness score"),
                    }
                );
            }
        }
        if self.tables.sources().count() != self.graph.len() {
            panic!(
                "{}",
                EngineError::Inconsistency {
                    detail: "distance table source count diverged from |V|".to_string(),
                }
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    fn line_of_four() -> Engine {
        let mut e = Engine::new();
        for v in 0..4 {
            e.add_node(v);
        }
        for (u, v) in [(0, 1), (1, 2), (2, 3)] {
            e.add_undirected_edge(u, v).unwrap();
        }
        e
    }

    #[test]
    fn add_undirected_edge_fails_on_unknown_endpoint() {
        let mut e = Engine::new();
        e.add_node(1);
        let err = e.add_undirected_edge(1, 2).unwrap_err();
        assert_eq!(err, EngineError::UnknownVertex { vertex: 2 });
        assert!(!e.contains(2));
    }

    #[test]
    fn line_of_four_matches_expected_closeness() {
        let e = line_of_four();
        assert!((e.closeness(0) - 0.5).abs() < 1e-9);
        assert!((e.closeness(3) - 0.5).abs() < 1e-9);
        assert!((e.closeness(1) - 0.75).abs() < 1e-9);
        assert!((e.closeness(2) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn closeness_of_unknown_vertex_is_zero() {
        let e = line_of_four();
        assert_eq!(e.closeness(99), 0.0);
    }

    #[test]
    fn remove_node_disconnects_and_rescales_remaining_scores() {
        let mut e = line_of_four();
        e.remove_node(1);

        assert!(!e.contains(1));
        assert_eq!(e.len(), 3);

        let oracle = reference::compute_all_closeness(&e.graph);
        for (id, score) in &oracle {
            assert!((e.closeness(*id) - score).abs() < 1e-9);
        }
    }

    #[test]
    fn add_node_is_idempotent_and_does_not_reset_existing_edges() {
        let mut e = line_of_four();
        let before = e.all_closeness();
        e.add_node(1);
        assert_eq!(e.all_closeness(), before);
    }

    #[test]
    fn remove_undirected_edge_is_noop_on_absent_edge() {
        let mut e = line_of_four();
        let before = e.all_closeness();
        e.remove_undirected_edge(0, 3);
        assert_eq!(e.all_closeness(), before);
    }

    #[test]
    fn full_lifecycle_matches_oracle_after_several_mutations() {
        let mut e = Engine::new();
        for v in 0..5 {
            e.add_node(v);
        }
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)] {
            e.add_undirected_edge(u, v).unwrap();
        }
        e.remove_undirected_edge(4, 0);
        e.add_undirected_edge(1, 3).unwrap();
        e.remove_node(2);

        let oracle = reference::compute_all_closeness(&e.graph);
        assert_eq!(e.all_closeness().len(), oracle.len());
        for (id, score) in &oracle {
            assert!((e.closeness(*id) - score).abs() < 1e-9);
        }
    }
}
