//! In-place label propagation.

use std::collections::HashMap;

use crate::config::DEFAULT_MAX_COMMUNITY_ITERATIONS;
use crate::index::AdjacencyIndex;

use super::NodeOrder;

/// Raw outcome of a propagation run, indexed by node position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationOutcome {
    /// Final label of each node. Labels are opaque; only equality matters.
    pub labels: Vec<usize>,
    /// Number of passes performed, including the final quiet pass.
    pub iterations: usize,
    /// Total label changes over all passes.
    pub reassignments: usize,
    /// Whether a pass completed without any change.
    pub converged: bool,
}

/// Label propagation over an adjacency index.
///
/// Labels are updated in place, so a node sees the moves made earlier in the
/// same pass.
pub struct LabelPropagation<'a, 'g> {
    index: &'a AdjacencyIndex<'g>,
    max_iterations: usize,
}

impl<'a, 'g> LabelPropagation<'a, 'g> {
    /// Create a propagation run with the default iteration cap.
    pub fn new(index: &'a AdjacencyIndex<'g>) -> Self {
        Self { index, max_iterations: DEFAULT_MAX_COMMUNITY_ITERATIONS }
    }

    /// Set the iteration cap.
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run from singleton communities.
    pub fn run(&self, order: &NodeOrder) -> PropagationOutcome {
        let labels = (0..self.index.node_count()).collect();
        self.run_from(order, labels)
    }

    /// Run from the given labels, one per node position.
    ///
    /// Extra labels are dropped. Positions past the end of `labels` start in
    /// a community of their own.
    pub fn run_from(&self, order: &NodeOrder, mut labels: Vec<usize>) -> PropagationOutcome {
        let n = self.index.node_count();
        labels.truncate(n);
        let given = labels.len();
        labels.extend((given..n).map(|i| usize::MAX - i));
        let visit = order.positions(self.index);

        let mut weights: HashMap<usize, f64> = HashMap::new();
        let mut seen: Vec<usize> = Vec::new();
        let mut iterations = 0;
        let mut reassignments = 0;
        let mut converged = n == 0;

        while !converged && iterations < self.max_iterations {
            iterations += 1;
            let mut moves = 0;

            for &node in &visit {
                weights.clear();
                seen.clear();
                for entry in self.index.entries(node) {
                    let label = labels[entry.neighbor];
                    let sum = weights.entry(label).or_insert_with(|| {
                        seen.push(label);
                        0.0
                    });
                    *sum += entry.weight;
                }

                let current = labels[node];
                let mut best = current;
                let mut best_weight = weights.get(&current).copied().unwrap_or(0.0);
                for &label in &seen {
                    let weight = weights.get(&label).copied().unwrap_or(0.0);
                    if label != current && weight > best_weight {
                        best = label;
                        best_weight = weight;
                    }
                }

                if best != current {
                    labels[node] = best;
                    moves += 1;
                }
            }

            reassignments += moves;
            converged = moves == 0;
        }

        PropagationOutcome { labels, iterations, reassignments, converged }
    }
}
