//! Event-script driver for the incremental closeness centrality engine:
//! the external I/O glue `closeness-core` deliberately has none of (§6.1-6.3).

pub mod cli;
pub mod error;
pub mod identifiers;
pub mod report;
pub mod script;

pub use error::CliError;
