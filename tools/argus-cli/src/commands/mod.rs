//! Command implementations.

pub mod anomalies;
pub mod communities;
pub mod metrics;
pub mod paths;

use std::path::Path;

use argus_core::GraphSnapshot;
use argus_graph::{AnalysisSession, AnalyticsConfig};
use tracing::debug;

use crate::error::{CliError, Result};

/// Load the snapshot at the given path, or return an error if no path is provided.
///
/// Snapshots without a node or edge collection are rejected here.
pub fn load_snapshot(path: Option<&Path>) -> Result<GraphSnapshot> {
    let path = path.ok_or(CliError::NoSnapshotSpecified)?;

    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    let snapshot = GraphSnapshot::from_json_complete(&text)?;
    debug!(
        path = %path.display(),
        nodes = snapshot.node_count(),
        edges = snapshot.edge_count(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Load an analytics configuration, falling back to the defaults.
///
/// Keys missing from the file keep their default values.
pub fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig> {
    let Some(path) = path else {
        return Ok(AnalyticsConfig::default());
    };

    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Open an analysis session over a loaded snapshot.
pub fn open_session(snapshot: &GraphSnapshot, config: AnalyticsConfig) -> Result<AnalysisSession<'_>> {
    Ok(AnalysisSession::from_snapshot(snapshot, config)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use argus_graph::DensityConvention;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_snapshot_from_file() {
        let file = write_temp(r#"{"nodes": [{"id": "a"}, {"id": "b"}], "edges": [{"id": "e", "source": "a", "target": "b"}]}"#);
        let snapshot = load_snapshot(Some(file.path())).unwrap();
        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(snapshot.edge_count(), 1);
    }

    #[test]
    fn missing_snapshot_path() {
        assert!(matches!(load_snapshot(None), Err(CliError::NoSnapshotSpecified)));

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_snapshot(Some(&missing)), Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn malformed_snapshot() {
        let file = write_temp("{ not json");
        assert!(matches!(load_snapshot(Some(file.path())), Err(CliError::Snapshot(_))));
    }

    #[test]
    fn incomplete_snapshot_file() {
        let file = write_temp(r#"{"nodes": [{"id": "a"}], "edges": null}"#);
        let err = load_snapshot(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::Snapshot(argus_core::CoreError::Validation(_))));
        assert!(err.to_string().contains("edge collection"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_temp(r#"{"hub_degree_multiplier": 2.5, "density": "undirected"}"#);
        let config = load_config(Some(file.path())).unwrap();
        assert!((config.hub_degree_multiplier - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.density, DensityConvention::Undirected);
        assert_eq!(config.max_paths, AnalyticsConfig::default().max_paths);

        assert_eq!(load_config(None).unwrap().max_paths, 10);
    }

    #[test]
    fn session_rejects_missing_edges() {
        let snapshot = GraphSnapshot::from_json(r#"{"nodes": []}"#).unwrap();
        assert!(matches!(open_session(&snapshot, AnalyticsConfig::default()), Err(CliError::Graph(_))));
    }
}
