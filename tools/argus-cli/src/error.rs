//! Error types for the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// CLI-specific result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
pub enum CliError {
    /// No snapshot specified.
    #[error("no snapshot specified. Use --snapshot or set ARGUS_SNAPSHOT environment variable")]
    NoSnapshotSpecified,

    /// File not found.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// Snapshot decoding error.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] argus_core::CoreError),

    /// Analytics error.
    #[error("analysis error: {0}")]
    Graph(#[from] argus_graph::GraphError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
