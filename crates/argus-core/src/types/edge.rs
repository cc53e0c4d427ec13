//! Edge (relationship) types.
//!
//! Edges are directed. Direction is preserved for path output and type
//! filtering, while most structural metrics work on the undirected projection.
//!
//! # Example
//!
//! ```
//! use argus_core::types::Edge;
//!
//! let edge = Edge::new("e1", "alice", "bob").with_type("COMMUNICATES_WITH").with_confidence(0.75);
//!
//! assert_eq!(edge.edge_type.as_str(), "COMMUNICATES_WITH");
//! assert!((edge.confidence - 0.75).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};

use super::{clamp_unit, EdgeId, NodeId};

/// The type of a relationship, such as `OWNS` or `COMMUNICATES_WITH`.
///
/// Types are written in `SCREAMING_SNAKE_CASE` by convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeType(String);

impl EdgeType {
    /// The type given to edges that do not specify one.
    pub const RELATED_TO: &'static str = "RELATED_TO";

    /// Create a new edge type.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the edge type name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EdgeType {
    fn default() -> Self {
        Self::new(Self::RELATED_TO)
    }
}

impl From<&str> for EdgeType {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EdgeType {
    #[inline]
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A directed relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEdge")]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// The source node.
    pub source: NodeId,
    /// The target node.
    pub target: NodeId,
    /// The relationship type.
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
    /// Confidence in `[0, 1]`; used as the edge weight.
    pub confidence: f64,
}

const fn default_confidence() -> f64 {
    1.0
}

impl Edge {
    /// Create an edge with the default type and full confidence.
    #[must_use]
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type: EdgeType::default(),
            confidence: default_confidence(),
        }
    }

    /// Set the relationship type.
    #[must_use]
    pub fn with_type(mut self, edge_type: impl Into<EdgeType>) -> Self {
        self.edge_type = edge_type.into();
        self
    }

    /// Set the confidence, clamped to `[0, 1]`. NaN becomes zero.
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = clamp_unit(confidence);
        self
    }

    /// Whether the edge starts and ends on the same node.
    #[inline]
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Wire form of an edge; `type` and `confidence` are optional.
#[derive(Deserialize)]
struct RawEdge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    #[serde(default, rename = "type")]
    edge_type: EdgeType,
    #[serde(default = "default_confidence")]
    confidence: f64,
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        Self {
            id: raw.id,
            source: raw.source,
            target: raw.target,
            edge_type: raw.edge_type,
            confidence: clamp_unit(raw.confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let edge = Edge::new("e", "a", "b");
        assert_eq!(edge.edge_type.as_str(), "RELATED_TO");
        assert!((edge.confidence - 1.0).abs() < f64::EPSILON);
        assert!(!edge.is_self_loop());
    }

    #[test]
    fn confidence_is_clamped() {
        assert!((Edge::new("e", "a", "b").with_confidence(1.5).confidence - 1.0).abs() < f64::EPSILON);
        assert!(Edge::new("e", "a", "b").with_confidence(-0.2).confidence.abs() < f64::EPSILON);
        assert!(Edge::new("e", "a", "b").with_confidence(f64::NAN).confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn deserialize_optional_fields() {
        let edge: Edge = serde_json::from_str(r#"{"id": "e1", "source": "a", "target": "a"}"#).unwrap();
        assert!(edge.is_self_loop());
        assert_eq!(edge.edge_type, EdgeType::default());
        assert!((edge.confidence - 1.0).abs() < f64::EPSILON);

        let edge: Edge = serde_json::from_str(
            r#"{"id": "e2", "source": "a", "target": "b", "type": "OWNS", "confidence": 0.4}"#,
        )
        .unwrap();
        assert_eq!(edge.edge_type.as_str(), "OWNS");
        assert!((edge.confidence - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn deserialize_clamps_confidence() {
        let high: Edge = serde_json::from_str(r#"{"id": "e1", "source": "a", "target": "b", "confidence": 7.5}"#).unwrap();
        assert!((high.confidence - 1.0).abs() < f64::EPSILON);

        let low: Edge = serde_json::from_str(r#"{"id": "e2", "source": "a", "target": "b", "confidence": -3.0}"#).unwrap();
        assert!(low.confidence.abs() < f64::EPSILON);
    }
}
