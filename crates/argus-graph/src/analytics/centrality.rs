//! Betweenness centrality using Brandes' algorithm.
//!
//! Betweenness centrality measures the extent to which a node lies on shortest
//! paths between other nodes. Nodes with high betweenness act as brokers or
//! bottlenecks between otherwise separate parts of the network.
//!
//! # Algorithm
//!
//! Brandes (2001): one BFS per source with shortest-path counting (`sigma`),
//! then dependency accumulation (`delta`) in reverse BFS finishing order.
//! O(V * E) time, O(V + E) space per source.
//!
//! # Formula
//!
//! BC(v) = Σ (σ_st(v) / σ_st) over ordered pairs s ≠ v ≠ t
//!
//! Scores are normalized by `1 / ((n - 1)(n - 2))` when `n > 2`. Pairs are
//! ordered, so on the undirected projection each unordered pair contributes
//! twice; this keeps normalized values within `[0, 1]`.

use std::collections::VecDeque;

use tracing::debug;

use crate::index::AdjacencyIndex;

use super::CentralityScores;

/// Betweenness centrality.
pub struct BetweennessCentrality;

impl BetweennessCentrality {
    /// Exact normalized betweenness for every node.
    pub fn compute(index: &AdjacencyIndex<'_>) -> CentralityScores {
        let n = index.node_count();
        let mut centrality = Self::raw(index);

        if n > 2 {
            let normalization_factor = 1.0 / ((n - 1) * (n - 2)) as f64;
            for score in &mut centrality {
                *score *= normalization_factor;
            }
        }

        debug!(nodes = n, "computed betweenness centrality");
        CentralityScores::from_positions(index, centrality)
    }

    /// Unnormalized betweenness per node position.
    pub(crate) fn raw(index: &AdjacencyIndex<'_>) -> Vec<f64> {
        let n = index.node_count();
        let mut centrality: Vec<f64> = vec![0.0; n];

        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma: Vec<f64> = vec![0.0; n];
        let mut dist: Vec<i64> = vec![-1; n];
        let mut delta: Vec<f64> = vec![0.0; n];
        let mut queue: VecDeque<usize> = VecDeque::new();

        for s in 0..n {
            stack.clear();
            predecessors.iter_mut().for_each(Vec::clear);
            sigma.fill(0.0);
            dist.fill(-1);
            delta.fill(0.0);
            sigma[s] = 1.0;
            dist[s] = 0;
            queue.push_back(s);

            while let Some(v) = queue.pop_front() {
                stack.push(v);

                for entry in index.entries(v) {
                    let w = entry.neighbor;
                    // Path discovery
                    if dist[w] < 0 {
                        dist[w] = dist[v] + 1;
                        queue.push_back(w);
                    }
                    // Path counting
                    if dist[w] == dist[v] + 1 {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }

            // Accumulation
            while let Some(w) = stack.pop() {
                for &v in &predecessors[w] {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
                if w != s {
                    centrality[w] += delta[w];
                }
            }
        }

        centrality
    }
}
