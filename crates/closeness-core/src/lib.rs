//! Incremental closeness centrality maintenance over dynamically evolving
//! undirected graphs.
//!
//! [`Engine`] is the entry point: it owns the graph, the per-source
//! distance tables, and the closeness scores, and keeps all three
//! consistent as vertices and edges come and go, without recomputing from
//! scratch on every change (§4.D, §4.E). [`reference::recompute_all`] and
//! [`reference::compute_all_closeness`] are the independent, from-scratch
//! oracle the incremental path is checked against.

pub mod closeness;
pub mod delete;
pub mod distances;
pub mod engine;
pub mod error;
pub mod graph;
pub mod insert;
pub mod reference;

pub use engine::Engine;
pub use error::EngineError;
pub use graph::VertexId;
