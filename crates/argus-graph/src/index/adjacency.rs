//! Bidirectional adjacency index.
//!
//! Every accepted edge contributes two entries: a forward entry on its source
//! (direction [`Direction::Outgoing`]) and a reverse entry on its target
//! (direction [`Direction::Incoming`]). Structural metrics treat the union of
//! both as the undirected projection of the graph, while path queries can
//! restrict themselves to one direction.
//!
//! Self-loops and parallel edges are kept, since multiplicity feeds degree
//! based metrics. Edges that reference an unknown node are skipped.

use std::collections::{HashMap, HashSet};

use argus_core::{Edge, Node, NodeId};
use tracing::{debug, warn};

use crate::traversal::Direction;

/// One traversal step out of a node.
///
/// `neighbor` and `edge` are positions in the index's node and edge tables;
/// use [`AdjacencyIndex::node_at`] and [`AdjacencyIndex::edge_at`] to resolve
/// them, or iterate [`AdjacencyIndex::neighbors`] for resolved views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacencyEntry {
    /// Position of the neighbor node.
    pub neighbor: usize,
    /// Edge weight (the edge's confidence).
    pub weight: f64,
    /// Position of the edge that produced this entry.
    pub edge: usize,
    /// Whether the step follows the edge forwards or backwards.
    pub direction: Direction,
}

/// A resolved view of an [`AdjacencyEntry`].
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'g> {
    /// The neighbor's id.
    pub id: &'g NodeId,
    /// Edge weight (the edge's confidence).
    pub weight: f64,
    /// The edge that produced this step.
    pub edge: &'g Edge,
    /// Whether the step follows the edge forwards or backwards.
    pub direction: Direction,
}

/// Adjacency index over a borrowed snapshot.
///
/// Nodes keep their input order (first occurrence wins for duplicate ids) and
/// each node's entries keep edge input order, so every algorithm that walks the
/// index is reproducible for a fixed input ordering.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<'g> {
    nodes: Vec<&'g Node>,
    lookup: HashMap<&'g str, usize>,
    edges: Vec<&'g Edge>,
    adjacency: Vec<Vec<AdjacencyEntry>>,
    distinct: Vec<Vec<usize>>,
    skipped_edges: usize,
    duplicate_nodes: usize,
}

impl<'g> AdjacencyIndex<'g> {
    /// Build the index from node and edge slices.
    pub fn build(nodes: &'g [Node], edges: &'g [Edge]) -> Self {
        let mut table: Vec<&'g Node> = Vec::with_capacity(nodes.len());
        let mut lookup: HashMap<&'g str, usize> = HashMap::with_capacity(nodes.len());
        let mut duplicate_nodes = 0usize;

        for node in nodes {
            if lookup.contains_key(node.id.as_str()) {
                duplicate_nodes += 1;
                continue;
            }
            lookup.insert(node.id.as_str(), table.len());
            table.push(node);
        }

        let mut adjacency: Vec<Vec<AdjacencyEntry>> = vec![Vec::new(); table.len()];
        let mut accepted: Vec<&'g Edge> = Vec::with_capacity(edges.len());
        let mut skipped_edges = 0usize;

        for edge in edges {
            let (Some(&source), Some(&target)) =
                (lookup.get(edge.source.as_str()), lookup.get(edge.target.as_str()))
            else {
                debug!(edge = %edge.id, source = %edge.source, target = %edge.target, "skipping dangling edge");
                skipped_edges += 1;
                continue;
            };

            let position = accepted.len();
            accepted.push(edge);
            adjacency[source].push(AdjacencyEntry {
                neighbor: target,
                weight: edge.confidence,
                edge: position,
                direction: Direction::Outgoing,
            });
            adjacency[target].push(AdjacencyEntry {
                neighbor: source,
                weight: edge.confidence,
                edge: position,
                direction: Direction::Incoming,
            });
        }

        let distinct = adjacency
            .iter()
            .enumerate()
            .map(|(i, entries)| {
                let mut seen = HashSet::with_capacity(entries.len());
                entries
                    .iter()
                    .map(|entry| entry.neighbor)
                    .filter(|&j| j != i && seen.insert(j))
                    .collect()
            })
            .collect();

        if skipped_edges > 0 {
            warn!(skipped_edges, "edges reference nodes missing from the snapshot");
        }
        if duplicate_nodes > 0 {
            warn!(duplicate_nodes, "duplicate node ids ignored");
        }
        debug!(nodes = table.len(), edges = accepted.len(), "built adjacency index");

        Self {
            nodes: table,
            lookup,
            edges: accepted,
            adjacency,
            distinct,
            skipped_edges,
            duplicate_nodes,
        }
    }

    /// Number of indexed nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of accepted edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the index has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges skipped because an endpoint was unknown.
    #[inline]
    pub const fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    /// Number of nodes ignored because their id had already been seen.
    #[inline]
    pub const fn duplicate_nodes(&self) -> usize {
        self.duplicate_nodes
    }

    /// Whether a node id is indexed.
    pub fn contains(&self, id: &str) -> bool {
        self.lookup.contains_key(id)
    }

    /// Position of a node id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.lookup.get(id).copied()
    }

    /// The node at a position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    #[inline]
    pub fn node_at(&self, position: usize) -> &'g Node {
        self.nodes[position]
    }

    /// The id of the node at a position.
    #[inline]
    pub fn id_at(&self, position: usize) -> &'g NodeId {
        &self.nodes[position].id
    }

    /// The accepted edge at a position.
    #[inline]
    pub fn edge_at(&self, position: usize) -> &'g Edge {
        self.edges[position]
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&'g Node> {
        self.position(id).map(|i| self.nodes[i])
    }

    /// Iterate over indexed nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &'g Node> + '_ {
        self.nodes.iter().copied()
    }

    /// Iterate over indexed node ids in input order.
    pub fn node_ids(&self) -> impl Iterator<Item = &'g NodeId> + '_ {
        self.nodes.iter().map(|node| &node.id)
    }

    /// Iterate over accepted edges in input order.
    pub fn edges(&self) -> impl Iterator<Item = &'g Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Raw entries of the node at a position.
    #[inline]
    pub fn entries(&self, position: usize) -> &[AdjacencyEntry] {
        &self.adjacency[position]
    }

    /// Neighbor positions of a node without self-loops or repeats, in
    /// adjacency order.
    #[inline]
    pub fn distinct_neighbors(&self, position: usize) -> &[usize] {
        &self.distinct[position]
    }

    /// Length of a node's adjacency list: each incident edge counts once per
    /// endpoint, so a self-loop counts twice.
    #[inline]
    pub fn degree_at(&self, position: usize) -> usize {
        self.adjacency[position].len()
    }

    /// Resolved neighbors of a node, or `None` if the id is unknown.
    pub fn neighbors(&self, id: &str) -> Option<impl Iterator<Item = Neighbor<'g>> + '_> {
        let position = self.position(id)?;
        Some(self.adjacency[position].iter().map(move |entry| Neighbor {
            id: self.id_at(entry.neighbor),
            weight: entry.weight,
            edge: self.edges[entry.edge],
            direction: entry.direction,
        }))
    }

    /// Degree of a node, or `None` if the id is unknown.
    pub fn degree(&self, id: &str) -> Option<usize> {
        self.position(id).map(|i| self.degree_at(i))
    }

    /// Sum of all adjacency list lengths (twice the accepted edge count).
    pub fn total_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Mean adjacency list length, zero for an empty graph.
    pub fn average_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        self.total_degree() as f64 / self.nodes.len() as f64
    }
}
