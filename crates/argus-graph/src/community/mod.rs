//! Community detection.
//!
//! Communities are found by label propagation, a local search that
//! approximates modularity optimization without Louvain's aggregation phase.
//! Each community is then scored with a local modularity proxy
//! (`internal / (internal + external)` adjacency entries) and given a display
//! color by rank.
//!
//! # Example
//!
//! ```
//! use argus_core::{Edge, Node};
//! use argus_graph::community::{CommunityDetector, NodeOrder};
//! use argus_graph::index::AdjacencyIndex;
//! use argus_graph::AnalyticsConfig;
//!
//! let nodes: Vec<Node> = ["a", "b", "c", "x", "y"].iter().map(|&id| Node::new(id)).collect();
//! let edges = vec![
//!     Edge::new("1", "a", "b"),
//!     Edge::new("2", "b", "c"),
//!     Edge::new("3", "c", "a"),
//!     Edge::new("4", "x", "y"),
//! ];
//! let index = AdjacencyIndex::build(&nodes, &edges);
//!
//! let result = CommunityDetector::detect(&index, &NodeOrder::Input, &AnalyticsConfig::default());
//! assert_eq!(result.communities.len(), 2);
//! assert_eq!(result.communities[0].size, 3);
//! ```

mod label_propagation;
mod modularity;

use std::collections::HashMap;

use argus_core::NodeId;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use label_propagation::{LabelPropagation, PropagationOutcome};
pub use modularity::{community_modularity, graph_modularity};

use crate::config::AnalyticsConfig;
use crate::index::AdjacencyIndex;

/// Display colors assigned to communities by rank, cycling when exhausted.
pub const PALETTE: [&str; 10] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#bfef45",
    "#fabed4", "#469990",
];

/// The order in which label propagation visits nodes.
///
/// Propagation is order dependent; fixing the order makes results reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeOrder {
    /// Visit nodes in input order.
    #[default]
    Input,
    /// Visit the listed nodes first, then any others in input order.
    /// Unknown and repeated ids are ignored.
    Fixed(Vec<NodeId>),
    /// Visit nodes in a pseudo-random order derived from the seed.
    Seeded(u64),
}

impl NodeOrder {
    /// Resolve to node positions.
    pub fn positions(&self, index: &AdjacencyIndex<'_>) -> Vec<usize> {
        let n = index.node_count();
        match self {
            Self::Input => (0..n).collect(),
            Self::Fixed(ids) => {
                let mut placed = vec![false; n];
                let mut order = Vec::with_capacity(n);
                for i in ids.iter().filter_map(|id| index.position(id.as_str())) {
                    if !placed[i] {
                        placed[i] = true;
                        order.push(i);
                    }
                }
                order.extend((0..n).filter(|&i| !placed[i]));
                order
            }
            Self::Seeded(seed) => {
                let mut order: Vec<usize> = (0..n).collect();
                shuffle_with_seed(&mut order, *seed);
                order
            }
        }
    }
}

/// Shuffle using an LCG with the given seed.
fn shuffle_with_seed(arr: &mut [usize], mut seed: u64) {
    let n = arr.len();
    for i in (1..n).rev() {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let j = (seed >> 33) as usize % (i + 1);
        arr.swap(i, j);
    }
}

/// A detected community.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Community {
    /// Run-local id; communities are numbered by rank (largest first).
    pub id: usize,
    /// Members in input order.
    pub members: Vec<NodeId>,
    /// Number of members.
    pub size: usize,
    /// Display color from [`PALETTE`].
    pub color: &'static str,
    /// Share of member adjacency entries that stay inside the community.
    pub modularity: f64,
}

impl Community {
    /// Whether a node belongs to this community.
    pub fn contains(&self, node: &str) -> bool {
        self.members.iter().any(|m| m.as_str() == node)
    }
}

/// Result of community detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityResult {
    /// Communities ordered by rank.
    pub communities: Vec<Community>,
    /// Community id of every node.
    pub assignments: HashMap<NodeId, usize>,
    /// Number of propagation passes performed.
    pub iterations: usize,
    /// Total number of label changes over all passes.
    pub reassignments: usize,
    /// Whether a pass finished without any label change.
    pub converged: bool,
    /// Newman-Girvan modularity of the whole partition.
    pub modularity: f64,
}

impl CommunityResult {
    /// Get the community of a node.
    pub fn community_of(&self, node: &str) -> Option<&Community> {
        self.assignments.get(node).and_then(|&id| self.communities.get(id))
    }

    /// Number of communities.
    pub fn num_communities(&self) -> usize {
        self.communities.len()
    }

    /// Check whether two nodes share a community.
    pub fn same_community(&self, node1: &str, node2: &str) -> bool {
        match (self.assignments.get(node1), self.assignments.get(node2)) {
            (Some(c1), Some(c2)) => c1 == c2,
            _ => false,
        }
    }
}

/// Community detection entry points.
pub struct CommunityDetector;

impl CommunityDetector {
    /// Detect communities starting from singleton communities.
    pub fn detect(
        index: &AdjacencyIndex<'_>,
        order: &NodeOrder,
        config: &AnalyticsConfig,
    ) -> CommunityResult {
        let outcome = LabelPropagation::new(index)
            .with_max_iterations(config.max_community_iterations)
            .run(order);
        Self::summarize(index, &outcome)
    }

    /// Resume propagation from existing assignments.
    ///
    /// Nodes missing from `assignments` start in a community of their own.
    pub fn resume(
        index: &AdjacencyIndex<'_>,
        order: &NodeOrder,
        assignments: &HashMap<NodeId, usize>,
        config: &AnalyticsConfig,
    ) -> CommunityResult {
        let n = index.node_count();
        let labels = (0..n)
            .map(|i| assignments.get(index.id_at(i)).copied().unwrap_or(usize::MAX - i))
            .collect();
        let outcome = LabelPropagation::new(index)
            .with_max_iterations(config.max_community_iterations)
            .run_from(order, labels);
        Self::summarize(index, &outcome)
    }

    /// Group labels into ranked, colored communities.
    fn summarize(index: &AdjacencyIndex<'_>, outcome: &PropagationOutcome) -> CommunityResult {
        let labels = &outcome.labels;

        // Groups in order of first member; members in input order
        let mut group_of: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for (i, &label) in labels.iter().enumerate() {
            let g = *group_of.entry(label).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[g].push(i);
        }
        groups.retain(|g| !g.is_empty());
        // Stable: equal sizes keep first-member order
        groups.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut assignments = HashMap::with_capacity(labels.len());
        let communities: Vec<Community> = groups
            .iter()
            .enumerate()
            .map(|(rank, members)| {
                let ids: Vec<NodeId> = members.iter().map(|&i| index.id_at(i).clone()).collect();
                for id in &ids {
                    assignments.insert(id.clone(), rank);
                }
                Community {
                    id: rank,
                    size: ids.len(),
                    members: ids,
                    color: PALETTE[rank % PALETTE.len()],
                    modularity: community_modularity(index, labels, members),
                }
            })
            .collect();

        let modularity = graph_modularity(index, labels);
        debug!(
            communities = communities.len(),
            iterations = outcome.iterations,
            converged = outcome.converged,
            "detected communities"
        );

        CommunityResult {
            communities,
            assignments,
            iterations: outcome.iterations,
            reassignments: outcome.reassignments,
            converged: outcome.converged,
            modularity,
        }
    }
}
