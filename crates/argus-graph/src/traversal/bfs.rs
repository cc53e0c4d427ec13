//! Breadth-first distances over the undirected projection.

use std::collections::{HashMap, VecDeque};

use argus_core::NodeId;

use crate::index::AdjacencyIndex;

/// Breadth-first search from a single source.
pub struct Bfs;

impl Bfs {
    /// Hop distances from the node at `source` to every node, `None` when
    /// unreachable. Follows edges in both directions.
    pub fn distances(index: &AdjacencyIndex<'_>, source: usize) -> Vec<Option<usize>> {
        let mut dist: Vec<Option<usize>> = vec![None; index.node_count()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        dist[source] = Some(0);
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            let next = dist[v].map_or(0, |d| d + 1);
            for entry in index.entries(v) {
                let w = entry.neighbor;
                if dist[w].is_none() {
                    dist[w] = Some(next);
                    queue.push_back(w);
                }
            }
        }

        dist
    }

    /// Hop distances from `source` to every reachable node, keyed by id.
    ///
    /// Returns `None` if `source` is not in the index. The source itself is
    /// included at distance zero.
    pub fn distances_from<'g>(
        index: &AdjacencyIndex<'g>,
        source: &str,
    ) -> Option<HashMap<&'g NodeId, usize>> {
        let start = index.position(source)?;
        Some(
            Self::distances(index, start)
                .into_iter()
                .enumerate()
                .filter_map(|(i, d)| d.map(|d| (index.id_at(i), d)))
                .collect(),
        )
    }
}
