//! Directed graph store (§4.A).
//!
//! Holds the vertex set and a sparse adjacency representation: two mirrored
//! arcs per undirected edge, as the rest of the engine expects (§3). Arc
//! costs default to `1.0`; the undirected API hard-codes that default, but
//! the store itself carries an arbitrary positive `f64` per arc.

use std::collections::{HashMap, HashSet};

use crate::error::EngineError;

/// A stable vertex identifier. Non-negative integers are the canonical
/// choice (§3); picking a single concrete type here confines the `n`-prefix
/// decoding (§9) to the external script parser.
pub type VertexId = u64;

/// Directed graph with positive arc costs, stored as sparse adjacency maps.
///
/// `add_vertex`/`remove_vertex` and `add_arc`/`remove_arc` are idempotent on
/// redundant input; `add_arc` fails with [`EngineError::UnknownVertex`] if
/// either endpoint is absent, and no partial mutation occurs in that case.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    vertices: HashSet<VertexId>,
    /// Out-arcs: `succ[u][v] = cost of u -> v`.
    succ: HashMap<VertexId, HashMap<VertexId, f64>>,
    /// In-neighbors of each vertex, maintained alongside `succ` so that
    /// `remove_vertex` is `O(deg(v))` instead of an `O(|V|)` scan.
    pred: HashMap<VertexId, HashSet<VertexId>>,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `v` into the vertex set. No-op if `v` already exists.
    pub fn add_vertex(&mut self, v: VertexId) {
        if self.vertices.insert(v) {
            self.succ.entry(v).or_default();
            self.pred.entry(v).or_default();
        }
    }

    /// Remove `v` and every arc incident to it, in either direction.
    /// No-op if `v` is absent. `O(deg(v))`.
    pub fn remove_vertex(&mut self, v: VertexId) {
        if !self.vertices.remove(&v) {
            return;
        }

        if let Some(preds) = self.pred.remove(&v) {
            for u in preds {
                if let Some(out) = self.succ.get_mut(&u) {
                    out.remove(&v);
                }
            }
        }

        if let Some(succs) = self.succ.remove(&v) {
            for w in succs.keys() {
                if let Some(inbound) = self.pred.get_mut(w) {
                    inbound.remove(&v);
                }
            }
        }
    }

    /// Insert arc `u -> v` with cost `c`, or overwrite its cost if it already
    /// exists. Fails if either endpoint is absent; the graph is left
    /// unchanged in that case.
    pub fn add_arc(&mut self, u: VertexId, v: VertexId, c: f64) -> Result<(), EngineError> {
        if !self.vertices.contains(&u) {
            return Err(EngineError::UnknownVertex { vertex: u });
        }
        if !self.vertices.contains(&v) {
            return Err(EngineError::UnknownVertex { vertex: v });
        }
        self.succ.entry(u).or_default().insert(v, c);
        self.pred.entry(v).or_default().insert(u);
        Ok(())
    }

    /// Remove arc `u -> v`. No-op if absent.
    pub fn remove_arc(&mut self, u: VertexId, v: VertexId) {
        if let Some(out) = self.succ.get_mut(&u) {
            out.remove(&v);
        }
        if let Some(inbound) = self.pred.get_mut(&v) {
            inbound.remove(&u);
        }
    }

    /// Whether arc `u -> v` exists.
    pub fn has_arc(&self, u: VertexId, v: VertexId) -> bool {
        self.succ.get(&u).is_some_and(|out| out.contains_key(&v))
    }

    /// The cost of arc `u -> v`, if present.
    pub fn arc_cost(&self, u: VertexId, v: VertexId) -> Option<f64> {
        self.succ.get(&u).and_then(|out| out.get(&v)).copied()
    }

    /// Out-neighbors of `v` with their arc costs. Empty if `v` is absent.
    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.succ
            .get(&v)
            .into_iter()
            .flat_map(|out| out.iter().map(|(&t, &c)| (t, c)))
    }

    /// In-neighbors of `v` with their arc costs (the reverse of `successors`).
    pub fn predecessors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.pred.get(&v).into_iter().flat_map(move |preds| {
            preds.iter().filter_map(move |&u| {
                self.succ.get(&u).and_then(|out| out.get(&v)).map(|&c| (u, c))
            })
        })
    }

    /// Whether `v` is currently present.
    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// All vertex ids, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    /// `|V|`.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
