//! Error types for graph analytics.

use argus_core::CoreError;
use thiserror::Error;

/// Errors surfaced by the analytics engine.
///
/// Structural variation (empty graphs, disconnected pairs, dangling edges)
/// never produces an error; only an unusable invocation does.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The node collection was not supplied.
    #[error("node collection is missing")]
    MissingNodes,

    /// The edge collection was not supplied.
    #[error("edge collection is missing")]
    MissingEdges,

    /// The graph has more nodes than the configured limit.
    #[error("graph too large: {node_count} nodes exceeds limit of {limit}")]
    GraphTooLarge {
        /// Number of nodes in the snapshot.
        node_count: usize,
        /// The configured limit.
        limit: usize,
    },

    /// The analytics configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error from the graph model.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for graph analytics operations.
pub type GraphResult<T> = Result<T, GraphError>;
