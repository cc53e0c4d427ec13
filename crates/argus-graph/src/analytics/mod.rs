//! Structural graph metrics.
//!
//! All metrics work on the undirected projection held by the
//! [`AdjacencyIndex`](crate::index::AdjacencyIndex).
//!
//! # Algorithms
//!
//! - [`DegreeCentrality`] - Normalized distinct-neighbor count
//! - [`BetweennessCentrality`] - Exact Brandes algorithm
//! - [`PathStatistics`] - All-pairs BFS: diameter, average path length, closeness
//! - [`ClusteringCoefficient`] - Local and average clustering
//! - [`ConnectedComponents`] - BFS partition into components
//! - [`MetricsCalculator`] - Runs all of the above into one [`GraphMetrics`]
//!
//! # Complexity
//!
//! | Algorithm | Time Complexity |
//! |-----------|-----------------|
//! | Degree | O(V) |
//! | Betweenness | O(V * E) |
//! | Path statistics | O(V * (V + E)) |
//! | Clustering | O(V * k^2) |
//! | Components | O(V + E) |

mod centrality;
mod closeness;
mod clustering;
mod connected;
mod degree;
mod metrics;
mod scores;

pub use centrality::BetweennessCentrality;
pub use closeness::{ClosenessCentrality, PathStatistics};
pub use clustering::{ClusteringCoefficient, ClusteringResult};
pub use connected::{ComponentResult, ConnectedComponents};
pub use degree::{density, DegreeCentrality};
pub use metrics::{GraphMetrics, MetricsCalculator};
pub use scores::CentralityScores;
