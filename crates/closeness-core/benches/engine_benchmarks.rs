//! Incremental vs. recompute-all timing, across graph sizes and mutation
//! kinds. Stands in for `benchmark_performance.py`'s classical/incremental
//! comparison as a criterion benchmark rather than a CSV-producing script.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use closeness_core::distances::DistanceTables;
use closeness_core::graph::{Graph, VertexId};
use closeness_core::insert::insert_edge_growing;
use closeness_core::reference::recompute_all;

/// Build a ring of `n` vertices, each connected to its two neighbors.
fn ring(n: VertexId) -> (Graph, DistanceTables) {
    let mut g = Graph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    for v in 0..n {
        let next = (v + 1) % n;
        g.add_arc(v, next, 1.0).unwrap();
        g.add_arc(next, v, 1.0).unwrap();
    }
    let tables = recompute_all(&g);
    (g, tables)
}

fn bench_insert_growing_vs_recompute_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_incremental_vs_recompute_all");

    for &n in &[50u64, 200, 500, 1000] {
        group.bench_with_input(BenchmarkId::new("incremental", n), &n, |b, &n| {
            b.iter_batched(
                || ring(n),
                |(mut g, mut t)| {
                    let chord_a = 0;
                    let chord_b = n / 2;
                    let affected = insert_edge_growing(&mut g, &mut t, chord_a, chord_b, 1.0).unwrap();
                    insert_edge_growing(&mut g, &mut t, chord_b, chord_a, 1.0).unwrap();
                    black_box(affected);
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("recompute_all", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let (mut g, _) = ring(n);
                    let chord_a = 0;
                    let chord_b = n / 2;
                    g.add_arc(chord_a, chord_b, 1.0).unwrap();
                    g.add_arc(chord_b, chord_a, 1.0).unwrap();
                    g
                },
                |g| black_box(recompute_all(&g)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_recompute_all_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute_all_by_size");

    for &n in &[50u64, 200, 500, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let (g, _) = ring(n);
            b.iter(|| black_box(recompute_all(&g)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_growing_vs_recompute_all,
    bench_recompute_all_by_size,
);
criterion_main!(benches);
