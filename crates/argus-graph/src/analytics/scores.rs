//! Per-node score maps.

use std::cmp::Ordering;
use std::collections::HashMap;

use argus_core::NodeId;
use serde::Serialize;

use crate::index::AdjacencyIndex;

/// A score for every node of the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CentralityScores {
    /// Scores keyed by node id.
    pub scores: HashMap<NodeId, f64>,
}

impl CentralityScores {
    /// Pair per-position values with the index's node ids.
    pub(crate) fn from_positions(index: &AdjacencyIndex<'_>, values: Vec<f64>) -> Self {
        let scores = values.into_iter().enumerate().map(|(i, v)| (index.id_at(i).clone(), v)).collect();
        Self { scores }
    }

    /// Get the score for a specific node.
    pub fn score(&self, node: &str) -> Option<f64> {
        self.scores.get(node).copied()
    }

    /// Number of scored nodes.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no node is scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Nodes sorted by score (descending), ties by id.
    pub fn sorted(&self) -> Vec<(&NodeId, f64)> {
        let mut pairs: Vec<_> = self.scores.iter().map(|(id, &score)| (id, score)).collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then_with(|| a.0.cmp(b.0)));
        pairs
    }

    /// The top N nodes by score.
    pub fn top_n(&self, n: usize) -> Vec<(&NodeId, f64)> {
        self.sorted().into_iter().take(n).collect()
    }

    /// The node with the highest score.
    pub fn max(&self) -> Option<(&NodeId, f64)> {
        self.sorted().into_iter().next()
    }

    /// The mean score, zero when empty.
    pub fn mean(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.values().sum::<f64>() / self.scores.len() as f64
    }
}
