//! Benchmarks for the analytics engine.
//!
//! Run with: `cargo bench -p argus-graph`

#![allow(missing_docs)]

use argus_core::{Edge, Node};
use argus_graph::analytics::{BetweennessCentrality, MetricsCalculator};
use argus_graph::anomaly::AnomalyDetector;
use argus_graph::community::{CommunityDetector, NodeOrder};
use argus_graph::index::AdjacencyIndex;
use argus_graph::traversal::PathFinder;
use argus_graph::AnalyticsConfig;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a random graph with `n` nodes and about `avg_degree * n / 2` edges.
fn random_graph(n: usize, avg_degree: usize) -> (Vec<Node>, Vec<Edge>) {
    let mut rng = StdRng::seed_from_u64(42);
    let nodes: Vec<Node> = (0..n).map(|i| Node::new(format!("n{i}"))).collect();
    let edges = (0..n * avg_degree / 2)
        .map(|i| {
            let s = rng.gen_range(0..n);
            let t = rng.gen_range(0..n);
            Edge::new(format!("e{i}"), format!("n{s}"), format!("n{t}"))
        })
        .collect();
    (nodes, edges)
}

fn bench_betweenness(c: &mut Criterion) {
    let mut group = c.benchmark_group("betweenness");
    group.sample_size(10);

    for n in [100, 500, 2000] {
        let (nodes, edges) = random_graph(n, 4);
        let index = AdjacencyIndex::build(&nodes, &edges);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| BetweennessCentrality::compute(black_box(&index)));
        });
    }

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    group.sample_size(10);
    let config = AnalyticsConfig::default();

    for n in [100, 1000] {
        let (nodes, edges) = random_graph(n, 4);
        let index = AdjacencyIndex::build(&nodes, &edges);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| MetricsCalculator::compute(black_box(&index), &config));
        });
    }

    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let (nodes, edges) = random_graph(5000, 6);
    c.bench_function("adjacency_build_5000", |bench| {
        bench.iter(|| AdjacencyIndex::build(black_box(&nodes), black_box(&edges)));
    });
}

fn bench_communities_and_anomalies(c: &mut Criterion) {
    let (nodes, edges) = random_graph(2000, 6);
    let index = AdjacencyIndex::build(&nodes, &edges);
    let config = AnalyticsConfig::default();

    c.bench_function("label_propagation_2000", |bench| {
        bench.iter(|| CommunityDetector::detect(black_box(&index), &NodeOrder::Seeded(7), &config));
    });
    c.bench_function("anomaly_scan_2000", |bench| {
        bench.iter(|| AnomalyDetector::detect(black_box(&index), &config));
    });
    c.bench_function("all_paths_2000", |bench| {
        bench.iter(|| PathFinder::find_all_paths(black_box(&index), "n0", "n1999", 10));
    });
}

criterion_group!(
    benches,
    bench_betweenness,
    bench_metrics,
    bench_index_build,
    bench_communities_and_anomalies
);
criterion_main!(benches);
