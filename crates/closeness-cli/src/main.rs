use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry};

use closeness_core::graph::Graph;
use closeness_core::reference::compute_all_closeness;
use closeness_core::Engine;

use closeness_cli::cli::{Args, Command};
use closeness_cli::error::CliError;
use closeness_cli::report::{write_benchmark_csv, write_closeness_scores, BenchRow};
use closeness_cli::script::{read_events, Event};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Command::Run { script, output } => run(&script, &output),
        Command::Bench {
            script,
            output,
            tolerance,
        } => bench(&script, &output, tolerance),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    Registry::default()
        .with(tracing_subscriber::fmt::layer().with_filter(tracing_subscriber::filter::LevelFilter::from_level(level)))
        .try_init()
        .ok();
}

/// Read an event script, warning about (and skipping) every line that
/// failed to parse. Returns an error only if not a single line parsed.
fn load_events(script_path: &std::path::Path) -> Result<Vec<(usize, Event)>, CliError> {
    let text = fs::read_to_string(script_path)?;
    let (events, skipped) = read_events(&text);

    if let Some((line, first_err)) = skipped.first() {
        warn!(
            skipped_count = skipped.len(),
            first_line = line,
            %first_err,
            "event script had unparseable lines"
        );
    }
    if events.is_empty() && !skipped.is_empty() {
        let (_, err) = skipped.into_iter().next().expect("non-empty checked above");
        return Err(err);
    }
    Ok(events)
}

/// Apply `event` (sourced from `line`) to `engine`. A rejection (e.g.
/// `addEdge` naming an endpoint that was never added) is wrapped in
/// [`CliError::Engine`] and logged, not propagated — the driver's
/// skip-with-warning policy (§7) covers engine rejections the same way it
/// covers parse failures.
fn apply_to_engine(engine: &mut Engine, line: usize, event: Event) {
    match event {
        Event::AddNode(id) => engine.add_node(id),
        Event::RemoveNode(id) => engine.remove_node(id),
        Event::AddEdge(u, v) => {
            if let Err(source) = engine.add_undirected_edge(u, v) {
                let err = CliError::Engine { line, source };
                warn!(%err, "addEdge rejected by engine, skipping");
            }
        }
        Event::RemoveEdge(u, v) => engine.remove_undirected_edge(u, v),
    }
}

fn apply_to_graph(graph: &mut Graph, event: Event) {
    match event {
        Event::AddNode(id) => graph.add_vertex(id),
        Event::RemoveNode(id) => graph.remove_vertex(id),
        Event::AddEdge(u, v) => {
            if graph.add_arc(u, v, 1.0).is_ok() {
                let _ = graph.add_arc(v, u, 1.0);
            }
        }
        Event::RemoveEdge(u, v) => {
            graph.remove_arc(u, v);
            graph.remove_arc(v, u);
        }
    }
}

/// Number of undirected edges currently in `graph` (half the total
/// out-degree, since every undirected edge is stored as a mirrored pair of
/// directed arcs).
fn edge_count(graph: &Graph) -> usize {
    let total_out_degree: usize = graph.vertices().map(|v| graph.successors(v).count()).sum();
    total_out_degree / 2
}

fn run(script_path: &std::path::Path, output_path: &std::path::Path) -> Result<(), CliError> {
    let events = load_events(script_path)?;
    let mut engine = Engine::new();
    for (line, event) in events {
        apply_to_engine(&mut engine, line, event);
    }

    let scores = engine.all_closeness();
    let file = fs::File::create(output_path)?;
    write_closeness_scores(file, &scores)?;
    info!(vertices = engine.len(), "wrote closeness scores");
    Ok(())
}

fn bench(script_path: &std::path::Path, output_path: &std::path::Path, tolerance: f64) -> Result<(), CliError> {
    let events = load_events(script_path)?;
    let num_actions = events.len();

    let mut classical_graph = Graph::new();
    let classical_start = Instant::now();
    let mut classical_scores = compute_all_closeness(&classical_graph);
    for &(_, event) in &events {
        apply_to_graph(&mut classical_graph, event);
        classical_scores = compute_all_closeness(&classical_graph);
    }
    let time_classical = classical_start.elapsed().as_secs_f64();

    let mut engine = Engine::new();
    let incremental_start = Instant::now();
    for &(line, event) in &events {
        apply_to_engine(&mut engine, line, event);
    }
    let incremental_scores = engine.all_closeness();
    let time_incremental = incremental_start.elapsed().as_secs_f64();

    let mut max_diff = 0.0f64;
    for (id, expected) in &classical_scores {
        let actual = incremental_scores.get(id).copied().unwrap_or(0.0);
        max_diff = max_diff.max((actual - expected).abs());
    }
    let correct = max_diff <= tolerance;
    let speedup = if time_incremental > 0.0 {
        time_classical / time_incremental
    } else {
        0.0
    };

    let row = BenchRow {
        n_nodes: engine.len(),
        m: edge_count(&classical_graph),
        num_actions,
        time_classical,
        time_incremental,
        speedup,
        correct,
        max_diff,
    };

    let file = fs::File::create(output_path)?;
    write_benchmark_csv(file, std::slice::from_ref(&row))?;
    info!(correct, max_diff, speedup, "benchmark run complete");
    Ok(())
}
