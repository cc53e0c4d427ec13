//! Shortest path and bounded path enumeration.
//!
//! The shortest path is a plain BFS with parent back-pointers; the first
//! discovery of a node fixes its parent, which is what makes the result
//! optimal. Path enumeration is a depth-first search over simple paths (no
//! repeated node) driven by an explicit stack, capped both in the number of
//! paths returned and in path length.
//!
//! # Example
//!
//! ```
//! use argus_core::{Edge, Node};
//! use argus_graph::index::AdjacencyIndex;
//! use argus_graph::traversal::{Direction, PathQuery};
//!
//! let nodes: Vec<Node> = ["a", "b", "c"].iter().map(|&id| Node::new(id)).collect();
//! let edges = vec![Edge::new("e1", "a", "b").with_type("OWNS"), Edge::new("e2", "c", "b")];
//! let index = AdjacencyIndex::build(&nodes, &edges);
//!
//! // Undirected by default
//! let result = PathQuery::new().find(&index, "a", "c");
//! assert_eq!(result.shortest_path_length, 2);
//!
//! // Following edge direction there is no way from a to c
//! let result = PathQuery::new().with_direction(Direction::Outgoing).find(&index, "a", "c");
//! assert!(!result.is_reachable());
//! ```

use std::collections::{HashSet, VecDeque};

use argus_core::{EdgeType, NodeId};
use serde::Serialize;

use super::Direction;
use crate::config::{AnalyticsConfig, DEFAULT_MAX_PATHS, DEFAULT_MAX_PATH_DEPTH};
use crate::index::AdjacencyIndex;

/// Paths between a source and a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// The source node id as requested.
    pub source: NodeId,
    /// The target node id as requested.
    pub target: NodeId,
    /// A shortest path from source to target, empty if unreachable.
    pub shortest_path: Vec<NodeId>,
    /// Number of edges on the shortest path, zero if unreachable.
    pub shortest_path_length: usize,
    /// Enumerated simple paths in discovery order.
    pub all_paths: Vec<Vec<NodeId>>,
    /// Number of enumerated paths.
    pub path_count: usize,
}

impl PathResult {
    /// Whether the target is reachable from the source.
    pub fn is_reachable(&self) -> bool {
        !self.shortest_path.is_empty()
    }
}

/// A configurable path query.
#[derive(Debug, Clone)]
pub struct PathQuery {
    direction: Direction,
    edge_types: Option<HashSet<EdgeType>>,
    max_paths: usize,
    max_depth: usize,
}

impl Default for PathQuery {
    fn default() -> Self {
        Self {
            direction: Direction::Both,
            edge_types: None,
            max_paths: DEFAULT_MAX_PATHS,
            max_depth: DEFAULT_MAX_PATH_DEPTH,
        }
    }
}

impl PathQuery {
    /// Create a query that follows every edge in both directions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query with the path caps from a configuration.
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self { max_paths: config.max_paths, max_depth: config.max_path_depth, ..Self::default() }
    }

    /// Set the direction in which edges are followed.
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Only follow edges of the given type. May be called repeatedly.
    pub fn with_edge_type(mut self, edge_type: impl Into<EdgeType>) -> Self {
        self.edge_types.get_or_insert_with(HashSet::new).insert(edge_type.into());
        self
    }

    /// Only follow edges of the given types.
    pub fn with_edge_types(mut self, edge_types: impl IntoIterator<Item = EdgeType>) -> Self {
        self.edge_types.get_or_insert_with(HashSet::new).extend(edge_types);
        self
    }

    /// Cap the number of enumerated paths.
    pub const fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    /// Cap the length, in edges, of enumerated paths.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Run both the shortest path search and the path enumeration.
    pub fn find(&self, index: &AdjacencyIndex<'_>, source: &str, target: &str) -> PathResult {
        let shortest_path = self.shortest_path(index, source, target);
        let all_paths = self.all_paths(index, source, target);
        PathResult {
            source: NodeId::new(source),
            target: NodeId::new(target),
            shortest_path_length: shortest_path.len().saturating_sub(1),
            shortest_path,
            path_count: all_paths.len(),
            all_paths,
        }
    }

    /// Find a shortest path by BFS.
    ///
    /// Returns `[source]` when source and target coincide and an empty path
    /// when the target is unreachable or either id is unknown.
    pub fn shortest_path(&self, index: &AdjacencyIndex<'_>, source: &str, target: &str) -> Vec<NodeId> {
        let (Some(s), Some(t)) = (index.position(source), index.position(target)) else {
            return Vec::new();
        };
        if s == t {
            return vec![index.id_at(s).clone()];
        }

        let mut parent: Vec<Option<usize>> = vec![None; index.node_count()];
        let mut visited = vec![false; index.node_count()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        visited[s] = true;
        queue.push_back(s);

        while let Some(current) = queue.pop_front() {
            for next in self.steps(index, current) {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                parent[next] = Some(current);

                if next == t {
                    return Self::reconstruct(index, &parent, t);
                }
                queue.push_back(next);
            }
        }

        Vec::new()
    }

    /// Enumerate simple paths from source to target.
    ///
    /// Paths follow adjacency order and are not guaranteed to come out
    /// shortest first. Parallel edges do not produce repeated node sequences.
    pub fn all_paths(&self, index: &AdjacencyIndex<'_>, source: &str, target: &str) -> Vec<Vec<NodeId>> {
        let (Some(s), Some(t)) = (index.position(source), index.position(target)) else {
            return Vec::new();
        };
        if self.max_paths == 0 {
            return Vec::new();
        }
        if s == t {
            return vec![vec![index.id_at(s).clone()]];
        }

        let mut found: Vec<Vec<usize>> = Vec::new();
        let mut on_path = vec![false; index.node_count()];
        let mut path: Vec<usize> = vec![s];
        // Frames: (node, candidate steps, next candidate)
        let mut stack: Vec<(usize, Vec<usize>, usize)> = Vec::new();

        on_path[s] = true;
        if self.max_depth > 0 {
            stack.push((s, self.steps(index, s), 0));
        }

        while found.len() < self.max_paths {
            let Some((node, steps, cursor)) = stack.last_mut() else {
                break;
            };

            if *cursor >= steps.len() {
                on_path[*node] = false;
                path.pop();
                stack.pop();
                continue;
            }

            let next = steps[*cursor];
            *cursor += 1;

            if on_path[next] {
                continue;
            }
            if next == t {
                let mut complete = path.clone();
                complete.push(t);
                found.push(complete);
                continue;
            }
            // path.len() edges would be used on reaching `next`; the target is
            // at least one more edge away.
            if path.len() >= self.max_depth {
                continue;
            }

            on_path[next] = true;
            path.push(next);
            let next_steps = self.steps(index, next);
            stack.push((next, next_steps, 0));
        }

        found
            .into_iter()
            .map(|p| p.into_iter().map(|i| index.id_at(i).clone()).collect())
            .collect()
    }

    /// Distinct neighbor positions reachable in one permitted step.
    fn steps(&self, index: &AdjacencyIndex<'_>, node: usize) -> Vec<usize> {
        let mut seen = HashSet::new();
        index
            .entries(node)
            .iter()
            .filter(|entry| self.direction.permits(entry.direction))
            .filter(|entry| match &self.edge_types {
                Some(types) => types.contains(&index.edge_at(entry.edge).edge_type),
                None => true,
            })
            .map(|entry| entry.neighbor)
            .filter(|&neighbor| neighbor != node && seen.insert(neighbor))
            .collect()
    }

    fn reconstruct(index: &AdjacencyIndex<'_>, parent: &[Option<usize>], target: usize) -> Vec<NodeId> {
        let mut nodes = vec![target];
        let mut current = target;
        while let Some(prev) = parent[current] {
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();
        nodes.into_iter().map(|i| index.id_at(i).clone()).collect()
    }
}

/// Convenience entry points using the default query.
pub struct PathFinder;

impl PathFinder {
    /// Shortest path over the undirected projection.
    pub fn find_shortest_path(index: &AdjacencyIndex<'_>, source: &str, target: &str) -> Vec<NodeId> {
        PathQuery::new().shortest_path(index, source, target)
    }

    /// Up to `max_paths` simple paths over the undirected projection.
    pub fn find_all_paths(
        index: &AdjacencyIndex<'_>,
        source: &str,
        target: &str,
        max_paths: usize,
    ) -> Vec<Vec<NodeId>> {
        PathQuery::new().with_max_paths(max_paths).all_paths(index, source, target)
    }
}
