//! Output formats (§6.2, §6.3): the closeness score file and the benchmark
//! CSV, matched bit-for-bit against `write_closeness_scores` and the
//! benchmark column set in `original_source`.

use std::collections::HashMap;
use std::io::Write;

use closeness_core::VertexId;

/// One row of the incremental-vs-classical benchmark CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    pub n_nodes: usize,
    pub m: usize,
    pub num_actions: usize,
    pub time_classical: f64,
    pub time_incremental: f64,
    pub speedup: f64,
    pub correct: bool,
    pub max_diff: f64,
}

/// Write one line per vertex id from `0` to the largest id present,
/// `{value:.10}` for present ids and `"0.0"` for absent ones, matching
/// `write_closeness_scores`.
pub fn write_closeness_scores<W: Write>(
    mut out: W,
    closeness: &HashMap<VertexId, f64>,
) -> std::io::Result<()> {
    let Some(&max_id) = closeness.keys().max() else {
        return Ok(());
    };
    for id in 0..=max_id {
        match closeness.get(&id) {
            Some(score) => writeln!(out, "{score:.10}")?,
            None => writeln!(out, "0.0")?,
        }
    }
    Ok(())
}

/// Write the benchmark CSV header followed by one row per measurement run.
pub fn write_benchmark_csv<W: Write>(mut out: W, rows: &[BenchRow]) -> std::io::Result<()> {
    writeln!(
        out,
        "n_nodes,m,num_actions,time_classical,time_incremental,speedup,correct,max_diff"
    )?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            row.n_nodes,
            row.m,
            row.num_actions,
            row.time_classical,
            row.time_incremental,
            row.speedup,
            if row.correct { "True" } else { "False" },
            row.max_diff,
        )?;
    }
    Ok(())
}
