//! Articulation points via Tarjan's algorithm.

use argus_core::NodeId;

use crate::index::AdjacencyIndex;

const UNVISITED: usize = usize::MAX;

/// Articulation point finder.
///
/// An articulation point is a node whose removal increases the number of
/// connected components. Edge direction is ignored.
pub struct ArticulationPoints;

impl ArticulationPoints {
    /// Find articulation points, as positions in input order.
    ///
    /// Uses an explicit DFS stack, so deep graphs cannot overflow the call
    /// stack.
    pub fn positions(index: &AdjacencyIndex<'_>) -> Vec<usize> {
        let n = index.node_count();
        let mut disc = vec![UNVISITED; n];
        let mut low = vec![0usize; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut is_cut = vec![false; n];
        let mut time = 0;

        // (node, next neighbor cursor)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if disc[root] != UNVISITED {
                continue;
            }
            disc[root] = time;
            low[root] = time;
            time += 1;
            let mut root_children = 0;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let u = frame.0;
                if let Some(&v) = index.distinct_neighbors(u).get(frame.1) {
                    frame.1 += 1;
                    if disc[v] == UNVISITED {
                        parent[v] = Some(u);
                        disc[v] = time;
                        low[v] = time;
                        time += 1;
                        if u == root {
                            root_children += 1;
                        }
                        stack.push((v, 0));
                    } else if parent[u] != Some(v) {
                        low[u] = low[u].min(disc[v]);
                    }
                } else {
                    stack.pop();
                    if let Some(p) = parent[u] {
                        low[p] = low[p].min(low[u]);
                        if p != root && low[u] >= disc[p] {
                            is_cut[p] = true;
                        }
                    }
                }
            }

            if root_children > 1 {
                is_cut[root] = true;
            }
        }

        (0..n).filter(|&i| is_cut[i]).collect()
    }

    /// Find articulation points by id, in input order.
    pub fn compute(index: &AdjacencyIndex<'_>) -> Vec<NodeId> {
        Self::positions(index).into_iter().map(|i| index.id_at(i).clone()).collect()
    }
}
