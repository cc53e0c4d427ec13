//! Clustering coefficient.
//!
//! For a node with `k >= 2` distinct neighbors, the local coefficient is the
//! number of ordered neighbor pairs `(i, j)`, `i != j`, that are themselves
//! adjacent, divided by `k (k - 1)`. Nodes with fewer than two neighbors have
//! no coefficient and are left out of the average rather than counted as zero.

use std::collections::{HashMap, HashSet};

use argus_core::NodeId;
use serde::Serialize;

use crate::index::AdjacencyIndex;

/// Local and graph-level clustering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClusteringResult {
    /// Local coefficient of every node with at least two neighbors.
    pub local: HashMap<NodeId, f64>,
    /// Mean of the local coefficients, zero when no node qualifies.
    pub average: f64,
}

/// Clustering coefficient.
pub struct ClusteringCoefficient;

impl ClusteringCoefficient {
    /// Compute local coefficients and their mean.
    pub fn compute(index: &AdjacencyIndex<'_>) -> ClusteringResult {
        let neighbor_sets: Vec<HashSet<usize>> = (0..index.node_count())
            .map(|i| index.distinct_neighbors(i).iter().copied().collect())
            .collect();

        let mut local = HashMap::new();
        for (i, neighbors) in neighbor_sets.iter().enumerate() {
            let k = neighbors.len();
            if k < 2 {
                continue;
            }

            let around = index.distinct_neighbors(i);
            let linked: usize = around
                .iter()
                .map(|&a| around.iter().filter(|&&b| b != a && neighbor_sets[a].contains(&b)).count())
                .sum();

            local.insert(index.id_at(i).clone(), linked as f64 / (k * (k - 1)) as f64);
        }

        let average =
            if local.is_empty() { 0.0 } else { local.values().sum::<f64>() / local.len() as f64 };

        ClusteringResult { local, average }
    }
}
