//! Degree centrality and density.
//!
//! # Formula
//!
//! - Degree centrality: `DC(v) = k(v) / (n - 1)` where `k(v)` is the number of
//!   distinct neighbors of `v` (self-loops and parallel edges collapse), so the
//!   value stays within `[0, 1]`.
//! - Density, directed: `|E| / (n (n - 1))`.
//! - Density, undirected: `2|E| / (n (n - 1))`.

use crate::config::DensityConvention;
use crate::index::AdjacencyIndex;

use super::CentralityScores;

/// Degree centrality.
pub struct DegreeCentrality;

impl DegreeCentrality {
    /// Normalized degree centrality for every node; zero when `n <= 1`.
    pub fn compute(index: &AdjacencyIndex<'_>) -> CentralityScores {
        let n = index.node_count();
        let values = (0..n)
            .map(|i| {
                if n <= 1 {
                    0.0
                } else {
                    index.distinct_neighbors(i).len() as f64 / (n - 1) as f64
                }
            })
            .collect();
        CentralityScores::from_positions(index, values)
    }
}

/// Graph density under the given convention; zero when `n <= 1`.
///
/// `|E|` is the number of accepted edges, so dangling edges do not count.
pub fn density(index: &AdjacencyIndex<'_>, convention: DensityConvention) -> f64 {
    let n = index.node_count();
    if n <= 1 {
        return 0.0;
    }
    let pairs = (n * (n - 1)) as f64;
    let edges = index.edge_count() as f64;
    match convention {
        DensityConvention::Directed => edges / pairs,
        DensityConvention::Undirected => 2.0 * edges / pairs,
    }
}
