//! Command-line surface, following `midnight-proof-server`'s `Args` pattern:
//! `clap::Parser` derive fields with `env` fallbacks.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "closeness-cli", about = "Run or benchmark the incremental closeness engine")]
pub struct Args {
    /// Emit debug-level tracing instead of info-level.
    #[arg(short, long, env = "CLOSENESS_CLI_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay an event script and write the resulting closeness scores.
    Run {
        /// Path to the event script (§6.1 format).
        #[arg(long, env = "CLOSENESS_CLI_SCRIPT")]
        script: std::path::PathBuf,

        /// Path to write the closeness scores to (§6.2 format).
        #[arg(long, env = "CLOSENESS_CLI_OUTPUT")]
        output: std::path::PathBuf,
    },
    /// Replay an event script through both the reference and the
    /// incremental engine, timing each, and append one CSV row.
    Bench {
        /// Path to the event script (§6.1 format).
        #[arg(long, env = "CLOSENESS_CLI_SCRIPT")]
        script: std::path::PathBuf,

        /// Path to write (or append to) the benchmark CSV (§6.3 format).
        #[arg(long, env = "CLOSENESS_CLI_BENCH_OUTPUT")]
        output: std::path::PathBuf,

        /// Maximum tolerated per-vertex difference between the two engines.
        #[arg(long, default_value_t = 1e-5, env = "CLOSENESS_CLI_TOLERANCE")]
        tolerance: f64,
    },
}
