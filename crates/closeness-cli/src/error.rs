//! Errors for the event-script driver.

use thiserror::Error;

use closeness_core::EngineError;

/// Failures that can surface while reading an event script, running it
/// against the engine, or writing results.
#[derive(Debug, Error)]
pub enum CliError {
    /// A token did not parse as a vertex identifier (§9's `n`-prefix rule).
    #[error("line {line}: invalid identifier {token:?}")]
    InvalidIdentifier {
        /// 1-based line number in the event script.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A line had the wrong arity for its directive, or named an unknown one.
    #[error("line {line}: malformed line {content:?}")]
    MalformedLine {
        /// 1-based line number in the event script.
        line: usize,
        /// The line's full text.
        content: String,
    },

    /// The underlying engine rejected an operation (e.g. `addEdge` with an
    /// endpoint that was never added).
    #[error("line {line}: {source}")]
    Engine {
        /// 1-based line number in the event script.
        line: usize,
        /// The engine error that was rejected.
        #[source]
        source: EngineError,
    },

    /// Filesystem I/O failure reading the script or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
