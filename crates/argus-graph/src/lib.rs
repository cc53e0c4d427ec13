//! Argus Graph
//!
//! Structural analytics over a snapshot of an intelligence graph: metrics,
//! community detection, path finding and anomaly detection.
//!
//! Every analysis starts by building an [`AnalysisSession`] from borrowed node
//! and edge slices. Building the session constructs the [`AdjacencyIndex`];
//! each later call reuses that index and caches its own result in the session.
//!
//! ```
//! use argus_core::{Edge, Node};
//! use argus_graph::AnalysisSession;
//!
//! let nodes = vec![Node::new("a"), Node::new("b"), Node::new("c")];
//! let edges = vec![Edge::new("e1", "a", "b"), Edge::new("e2", "b", "c")];
//!
//! let mut session = AnalysisSession::new(&nodes, &edges)?;
//! assert_eq!(session.metrics().diameter, 2);
//! assert_eq!(session.find_paths("a", "c", 10).shortest_path_length, 2);
//! # Ok::<(), argus_graph::GraphError>(())
//! ```
//!
//! # Modules
//!
//! - [`index`] - The bidirectional adjacency index
//! - [`analytics`] - Density, degree, path statistics, clustering, centrality, components
//! - [`community`] - Label propagation community detection
//! - [`traversal`] - Shortest path and bounded path enumeration
//! - [`anomaly`] - Isolated, articulation, hub and high-risk pattern detection
//! - [`session`] - The per-snapshot analysis session and its result cache

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod analytics;
pub mod anomaly;
pub mod community;
pub mod config;
pub mod error;
pub mod index;
pub mod session;
pub mod traversal;

#[cfg(test)]
mod proptest_tests;

pub use config::{AnalyticsConfig, DensityConvention};
pub use error::{GraphError, GraphResult};
pub use index::AdjacencyIndex;
pub use session::AnalysisSession;
