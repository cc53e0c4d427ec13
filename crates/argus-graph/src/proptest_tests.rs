//! Property-based tests for the analytics invariants.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::collections::HashSet;

use argus_core::{Edge, Node, NodeId};
use proptest::prelude::*;

use crate::analytics::{BetweennessCentrality, ConnectedComponents, DegreeCentrality, density};
use crate::anomaly::ArticulationPoints;
use crate::community::{LabelPropagation, NodeOrder};
use crate::config::DensityConvention;
use crate::index::AdjacencyIndex;
use crate::traversal::{Bfs, PathFinder};

/// A graph as a node count plus raw endpoint pairs.
#[derive(Debug, Clone)]
struct RawGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

fn build(n: usize, pairs: &[(usize, usize)]) -> RawGraph {
    let nodes = (0..n).map(|i| Node::new(format!("n{i}"))).collect();
    let edges = pairs
        .iter()
        .enumerate()
        .map(|(i, &(s, t))| Edge::new(format!("e{i}"), format!("n{s}"), format!("n{t}")))
        .collect();
    RawGraph { nodes, edges }
}

/// Strategy for arbitrary multigraphs, self-loops included.
fn arb_graph() -> impl Strategy<Value = RawGraph> {
    (1usize..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..30).prop_map(move |pairs| build(n, &pairs))
    })
}

/// Strategy for simple undirected graphs: no self-loops, at most one edge
/// per unordered pair.
fn arb_simple_graph() -> impl Strategy<Value = RawGraph> {
    (0usize..12).prop_flat_map(|n| {
        prop::collection::vec((0..n.max(1), 0..n.max(1)), 0..30).prop_map(move |pairs| {
            let mut seen = HashSet::new();
            let simple: Vec<(usize, usize)> = pairs
                .into_iter()
                .filter(|&(s, t)| s != t && s < n && t < n && seen.insert((s.min(t), s.max(t))))
                .collect();
            build(n, &simple)
        })
    })
}

proptest! {
    #[test]
    fn density_is_a_fraction(graph in arb_simple_graph()) {
        let index = AdjacencyIndex::build(&graph.nodes, &graph.edges);
        for convention in [DensityConvention::Directed, DensityConvention::Undirected] {
            let d = density(&index, convention);
            prop_assert!((0.0..=1.0).contains(&d), "density {d}");
            if index.node_count() <= 1 {
                prop_assert_eq!(d, 0.0);
            }
        }
    }

    #[test]
    fn degree_centrality_is_a_fraction(graph in arb_graph()) {
        let index = AdjacencyIndex::build(&graph.nodes, &graph.edges);
        let scores = DegreeCentrality::compute(&index);
        for (_, score) in scores.sorted() {
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn betweenness_sums_interior_path_lengths(graph in arb_graph()) {
        let index = AdjacencyIndex::build(&graph.nodes, &graph.edges);
        let raw: f64 = BetweennessCentrality::raw(&index).iter().sum();

        // Every reachable ordered pair at distance d has d - 1 interior nodes
        let mut expected = 0.0;
        for s in 0..index.node_count() {
            for (t, d) in Bfs::distances(&index, s).into_iter().enumerate() {
                if let Some(d) = d {
                    if t != s {
                        expected += (d - 1) as f64;
                    }
                }
            }
        }
        prop_assert!((raw - expected).abs() < 1e-6, "raw {raw} expected {expected}");
    }

    #[test]
    fn shortest_path_matches_bfs_distance(graph in arb_graph(), s in 0usize..12, t in 0usize..12) {
        let index = AdjacencyIndex::build(&graph.nodes, &graph.edges);
        let n = index.node_count();
        let (s, t) = (s % n, t % n);
        let path = PathFinder::find_shortest_path(&index, index.id_at(s).as_str(), index.id_at(t).as_str());

        match Bfs::distances(&index, s)[t] {
            Some(d) => prop_assert_eq!(path.len(), d + 1),
            None => prop_assert!(path.is_empty()),
        }
    }

    #[test]
    fn enumerated_paths_are_simple_and_capped(
        graph in arb_graph(),
        s in 0usize..12,
        t in 0usize..12,
        cap in 0usize..6,
    ) {
        let index = AdjacencyIndex::build(&graph.nodes, &graph.edges);
        let n = index.node_count();
        let (source, target) = (index.id_at(s % n).clone(), index.id_at(t % n).clone());
        let paths = PathFinder::find_all_paths(&index, source.as_str(), target.as_str(), cap);

        prop_assert!(paths.len() <= cap);
        let mut distinct: HashSet<&Vec<NodeId>> = HashSet::new();
        for path in &paths {
            prop_assert_eq!(path.first(), Some(&source));
            prop_assert_eq!(path.last(), Some(&target));
            let unique: HashSet<&NodeId> = path.iter().collect();
            prop_assert_eq!(unique.len(), path.len());
            prop_assert!(distinct.insert(path));
        }
    }

    #[test]
    fn label_propagation_is_idempotent(graph in arb_graph(), seed in any::<u64>()) {
        let index = AdjacencyIndex::build(&graph.nodes, &graph.edges);
        let propagation = LabelPropagation::new(&index).with_max_iterations(1_000);
        let first = propagation.run(&NodeOrder::Seeded(seed));
        prop_assume!(first.converged);

        let again = propagation.run_from(&NodeOrder::Seeded(seed.wrapping_add(1)), first.labels.clone());
        prop_assert_eq!(again.reassignments, 0);
        prop_assert_eq!(again.labels, first.labels);
    }

    #[test]
    fn removing_an_articulation_point_splits_the_graph(graph in arb_graph()) {
        let index = AdjacencyIndex::build(&graph.nodes, &graph.edges);
        let before = ConnectedComponents::count(&index);

        for point in ArticulationPoints::compute(&index) {
            let nodes: Vec<Node> = graph.nodes.iter().filter(|n| n.id != point).cloned().collect();
            let reduced = AdjacencyIndex::build(&nodes, &graph.edges);
            prop_assert!(ConnectedComponents::count(&reduced) > before, "removing {point}");
        }
    }
}
