//! Graph snapshots as handed over by a data provider.

use serde::{Deserialize, Serialize};

use super::{Edge, Node};
use crate::error::{CoreError, CoreResult};

/// A full snapshot of nodes and edges.
///
/// Both collections are optional on the wire so that a provider sending
/// `null` (or omitting a collection) is detected instead of being mistaken for
/// an empty graph. The analytics engine rejects such snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// The nodes, in provider order.
    #[serde(default)]
    pub nodes: Option<Vec<Node>>,
    /// The edges, in provider order.
    #[serde(default)]
    pub edges: Option<Vec<Edge>>,
}

impl GraphSnapshot {
    /// Create a snapshot from complete collections.
    #[must_use]
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes: Some(nodes), edges: Some(edges) }
    }

    /// Decode a snapshot from JSON text.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a snapshot and require both collections to be present.
    pub fn from_json_complete(json: &str) -> CoreResult<Self> {
        let snapshot = Self::from_json(json)?;
        if snapshot.nodes.is_none() {
            return Err(CoreError::Validation("snapshot has no node collection".to_owned()));
        }
        if snapshot.edges.is_none() {
            return Err(CoreError::Validation("snapshot has no edge collection".to_owned()));
        }
        Ok(snapshot)
    }

    /// Number of nodes, zero when the collection is missing.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.as_ref().map_or(0, Vec::len)
    }

    /// Number of edges, zero when the collection is missing.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_snapshot() {
        let json = r#"{
            "nodes": [{"id": "a"}, {"id": "b"}],
            "edges": [{"id": "e1", "source": "a", "target": "b"}]
        }"#;
        let snapshot = GraphSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(snapshot.edge_count(), 1);
    }

    #[test]
    fn null_collections_are_kept_as_none() {
        let snapshot = GraphSnapshot::from_json(r#"{"nodes": null}"#).unwrap();
        assert!(snapshot.nodes.is_none());
        assert!(snapshot.edges.is_none());
        assert_eq!(snapshot.node_count(), 0);
    }

    #[test]
    fn complete_rejects_missing_edges() {
        let err = GraphSnapshot::from_json_complete(r#"{"nodes": []}"#).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("edge"));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(GraphSnapshot::from_json("{"), Err(CoreError::Json(_))));
    }
}
