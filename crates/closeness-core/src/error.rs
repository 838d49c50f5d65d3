//! Error types for the closeness engine.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors surfaced by [`crate::engine::Engine`] and its component modules.
///
/// Idempotent operations (re-adding an existing vertex, removing an absent
/// one) never produce an error; only precondition violations do.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// An operation referenced a vertex that does not exist when existence
    /// was required (e.g. `add_arc` with a missing endpoint).
    #[error("unknown vertex {vertex}")]
    UnknownVertex {
        /// The vertex id that was not found.
        vertex: VertexId,
    },

    /// An internal invariant check failed. Only constructed in debug builds;
    /// surfacing one is always a bug in the engine, not caller misuse.
    #[error("internal invariant violated: {detail}")]
    Inconsistency {
        /// Description of which invariant failed.
        detail: String,
    },
}
