//! Connected components.
//!
//! Components are maximal sets of nodes reachable from one another on the
//! undirected projection, found by repeated BFS. Components are numbered in
//! the input order of their first node; members are listed in BFS discovery
//! order.
//!
//! # Example
//!
//! ```
//! use argus_core::{Edge, Node};
//! use argus_graph::analytics::ConnectedComponents;
//! use argus_graph::index::AdjacencyIndex;
//!
//! let nodes: Vec<Node> = ["a", "b", "x"].iter().map(|&id| Node::new(id)).collect();
//! let edges = vec![Edge::new("e1", "a", "b")];
//! let index = AdjacencyIndex::build(&nodes, &edges);
//!
//! let result = ConnectedComponents::compute(&index);
//! assert_eq!(result.num_components(), 2);
//! assert!(result.same_component("a", "b"));
//! assert_eq!(result.component_size(1), 1);
//! ```

use std::collections::{HashMap, VecDeque};

use argus_core::NodeId;
use serde::Serialize;

use crate::index::AdjacencyIndex;

/// Result of a connected components computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentResult {
    /// Members of each component, indexed by component id.
    pub components: Vec<Vec<NodeId>>,
    /// Component assignments: node -> component id.
    pub assignments: HashMap<NodeId, usize>,
}

impl ComponentResult {
    /// Number of components.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Get the component id of a node.
    pub fn component(&self, node: &str) -> Option<usize> {
        self.assignments.get(node).copied()
    }

    /// Get all nodes of a component.
    pub fn nodes_in_component(&self, component_id: usize) -> &[NodeId] {
        self.components.get(component_id).map_or(&[], Vec::as_slice)
    }

    /// Number of nodes in a component, zero for an unknown id.
    pub fn component_size(&self, component_id: usize) -> usize {
        self.nodes_in_component(component_id).len()
    }

    /// Component sizes, indexed by component id.
    pub fn component_sizes(&self) -> Vec<usize> {
        self.components.iter().map(Vec::len).collect()
    }

    /// Components as `(id, size)` sorted by size (descending), ties by id.
    pub fn components_by_size(&self) -> Vec<(usize, usize)> {
        let mut sizes: Vec<_> = self.component_sizes().into_iter().enumerate().collect();
        sizes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        sizes
    }

    /// The largest component as `(id, size)`.
    pub fn largest_component(&self) -> Option<(usize, usize)> {
        self.components_by_size().into_iter().next()
    }

    /// Check whether two nodes are in the same component.
    pub fn same_component(&self, node1: &str, node2: &str) -> bool {
        match (self.component(node1), self.component(node2)) {
            (Some(c1), Some(c2)) => c1 == c2,
            _ => false,
        }
    }
}

/// Connected components.
pub struct ConnectedComponents;

impl ConnectedComponents {
    /// Partition all nodes into connected components.
    pub fn compute(index: &AdjacencyIndex<'_>) -> ComponentResult {
        let labels = Self::labels(index);
        let mut components: Vec<Vec<NodeId>> = Vec::new();
        let mut assignments = HashMap::with_capacity(index.node_count());

        for (component, members) in labels.into_iter().enumerate() {
            let ids: Vec<NodeId> = members.into_iter().map(|i| index.id_at(i).clone()).collect();
            for id in &ids {
                assignments.insert(id.clone(), component);
            }
            components.push(ids);
        }

        ComponentResult { components, assignments }
    }

    /// Number of components without materializing ids.
    pub fn count(index: &AdjacencyIndex<'_>) -> usize {
        Self::labels(index).len()
    }

    /// Member positions per component, in discovery order.
    fn labels(index: &AdjacencyIndex<'_>) -> Vec<Vec<usize>> {
        let n = index.node_count();
        let mut seen = vec![false; n];
        let mut components = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        for start in 0..n {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            queue.push_back(start);

            let mut members = Vec::new();
            while let Some(v) = queue.pop_front() {
                members.push(v);
                for &w in index.distinct_neighbors(v) {
                    if !seen[w] {
                        seen[w] = true;
                        queue.push_back(w);
                    }
                }
            }
            components.push(members);
        }

        components
    }
}

#[cfg(test)]
mod tests {
    use argus_core::{Edge, Node};

    use super::*;

    #[test]
    fn result_empty() {
        let result = ComponentResult::default();
        assert_eq!(result.num_components(), 0);
        assert!(result.component("a").is_none());
        assert!(result.nodes_in_component(0).is_empty());
        assert!(result.largest_component().is_none());
    }

    #[test]
    fn components_follow_input_order() {
        let nodes: Vec<Node> = ["x", "a", "b", "c", "d"].iter().map(|&id| Node::new(id)).collect();
        let edges = vec![Edge::new("1", "c", "a"), Edge::new("2", "a", "b"), Edge::new("3", "d", "d")];
        let index = AdjacencyIndex::build(&nodes, &edges);
        let result = ConnectedComponents::compute(&index);

        assert_eq!(result.num_components(), 3);
        assert_eq!(result.component("x"), Some(0));
        let members: Vec<&str> = result.nodes_in_component(1).iter().map(NodeId::as_str).collect();
        assert_eq!(members, vec!["a", "c", "b"]);
        assert_eq!(result.component("d"), Some(2));
        assert_eq!(result.component_sizes(), vec![1, 3, 1]);
        assert_eq!(result.largest_component(), Some((1, 3)));
        assert!(result.same_component("b", "c"));
        assert!(!result.same_component("x", "d"));
        assert!(!result.same_component("x", "missing"));
        assert_eq!(ConnectedComponents::count(&index), 3);
    }
}
