//! Distance-based metrics from all-pairs BFS.
//!
//! One BFS per node feeds three metrics at once:
//!
//! - **Diameter**: the largest finite distance between any two nodes.
//! - **Average shortest path length**: the mean of all finite, positive
//!   distances over ordered pairs. Disconnected pairs are left out rather than
//!   counted as infinite.
//! - **Closeness centrality**: `CC(v) = r / Σ d(v, u)` over the `r` nodes `u`
//!   reachable from `v`, zero when nothing is reachable.
//!
//! Because disconnected pairs are excluded, closeness is computed per
//! component: a node in a small isolated cluster can score as high as a hub in
//! the main component.

use super::CentralityScores;
use crate::index::AdjacencyIndex;
use crate::traversal::Bfs;

/// Diameter, average path length and closeness of a graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStatistics {
    /// Largest finite shortest-path distance.
    pub diameter: usize,
    /// Mean finite, positive shortest-path distance.
    pub average_path_length: f64,
    /// Closeness centrality per node.
    pub closeness: CentralityScores,
}

impl PathStatistics {
    /// Run a BFS from every node and aggregate the distances.
    pub fn compute(index: &AdjacencyIndex<'_>) -> Self {
        let n = index.node_count();
        let mut diameter = 0usize;
        let mut path_sum = 0usize;
        let mut path_count = 0usize;
        let mut closeness: Vec<f64> = vec![0.0; n];

        for (source, score) in closeness.iter_mut().enumerate() {
            let mut reachable = 0usize;
            let mut distance_sum = 0usize;

            for d in Bfs::distances(index, source).into_iter().flatten().filter(|&d| d > 0) {
                diameter = diameter.max(d);
                reachable += 1;
                distance_sum += d;
            }

            path_sum += distance_sum;
            path_count += reachable;
            if distance_sum > 0 {
                *score = reachable as f64 / distance_sum as f64;
            }
        }

        let average_path_length =
            if path_count == 0 { 0.0 } else { path_sum as f64 / path_count as f64 };

        Self {
            diameter,
            average_path_length,
            closeness: CentralityScores::from_positions(index, closeness),
        }
    }
}

/// Closeness centrality.
pub struct ClosenessCentrality;

impl ClosenessCentrality {
    /// Closeness centrality for every node.
    pub fn compute(index: &AdjacencyIndex<'_>) -> CentralityScores {
        PathStatistics::compute(index).closeness
    }
}
