//! Partition quality scores.

use std::collections::HashMap;

use crate::index::AdjacencyIndex;

/// Local modularity of one community: `internal / (internal + external)`.
///
/// Counts the adjacency entries of every member; an entry is internal when
/// its neighbor carries the same label. Returns 0 when the members have no
/// entries at all.
pub fn community_modularity(index: &AdjacencyIndex<'_>, labels: &[usize], members: &[usize]) -> f64 {
    let mut internal = 0usize;
    let mut external = 0usize;

    for &member in members {
        for entry in index.entries(member) {
            if labels[entry.neighbor] == labels[member] {
                internal += 1;
            } else {
                external += 1;
            }
        }
    }

    let total = internal + external;
    if total == 0 {
        0.0
    } else {
        internal as f64 / total as f64
    }
}

/// Newman-Girvan modularity of a labelling.
///
/// Q = sum_c [ in_c / 2m - (tot_c / 2m)^2 ]
///
/// where `in_c` is the weight of adjacency entries inside community `c`,
/// `tot_c` the total entry weight of its members, and `2m` the weight of all
/// entries. Returns 0 for a graph without edge weight.
pub fn graph_modularity(index: &AdjacencyIndex<'_>, labels: &[usize]) -> f64 {
    let mut inside: HashMap<usize, f64> = HashMap::new();
    let mut total: HashMap<usize, f64> = HashMap::new();
    let mut m2 = 0.0;

    for (node, &label) in labels.iter().enumerate().take(index.node_count()) {
        for entry in index.entries(node) {
            m2 += entry.weight;
            *total.entry(label).or_insert(0.0) += entry.weight;
            if labels[entry.neighbor] == label {
                *inside.entry(label).or_insert(0.0) += entry.weight;
            }
        }
    }

    if m2 == 0.0 {
        return 0.0;
    }

    total
        .iter()
        .map(|(label, &tot)| {
            let internal = inside.get(label).copied().unwrap_or(0.0);
            internal / m2 - (tot / m2).powi(2)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use argus_core::{Edge, Node};

    use super::*;

    fn two_triangles() -> (Vec<Node>, Vec<Edge>) {
        let nodes = ["a", "b", "c", "x", "y", "z"].iter().map(|&id| Node::new(id)).collect();
        let edges = vec![
            Edge::new("1", "a", "b"),
            Edge::new("2", "b", "c"),
            Edge::new("3", "c", "a"),
            Edge::new("4", "x", "y"),
            Edge::new("5", "y", "z"),
            Edge::new("6", "z", "x"),
            Edge::new("7", "c", "x"),
        ];
        (nodes, edges)
    }

    #[test]
    fn local_modularity_counts_member_entries() {
        let (nodes, edges) = two_triangles();
        let index = AdjacencyIndex::build(&nodes, &edges);
        let labels = vec![0, 0, 0, 1, 1, 1];

        // Members a, b, c have 7 entries, one of which (c -> x) leaves
        let q = community_modularity(&index, &labels, &[0, 1, 2]);
        assert!((q - 6.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn newman_girvan_modularity_of_two_triangles() {
        let (nodes, edges) = two_triangles();
        let index = AdjacencyIndex::build(&nodes, &edges);

        // m = 7, each side: in = 6, tot = 7
        let split = graph_modularity(&index, &[0, 0, 0, 1, 1, 1]);
        let expected = 2.0 * (6.0 / 14.0 - 0.25);
        assert!((split - expected).abs() < 1e-12);

        let merged = graph_modularity(&index, &[0; 6]);
        assert!(merged.abs() < 1e-12);
        assert!(split > merged);
    }

    #[test]
    fn edgeless_graph_has_zero_modularity() {
        let nodes = vec![Node::new("a"), Node::new("b")];
        let index = AdjacencyIndex::build(&nodes, &[]);
        assert!(graph_modularity(&index, &[0, 1]).abs() < f64::EPSILON);
        assert!(community_modularity(&index, &[0, 1], &[0]).abs() < f64::EPSILON);
    }
}
