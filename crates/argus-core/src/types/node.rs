//! Node (intelligence entity) types.
//!
//! # Example
//!
//! ```
//! use argus_core::types::{Node, NodeType, RiskLevel};
//!
//! let node = Node::new("203.0.113.7")
//!     .with_type(NodeType::IpAddress)
//!     .with_risk_score(0.65)
//!     .with_metadata("asn", "AS64500");
//!
//! assert_eq!(node.risk_level, RiskLevel::High);
//! assert_eq!(node.get_metadata("asn").and_then(|v| v.as_str()), Some("AS64500"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{clamp_unit, NodeId, RiskLevel};

/// The kind of entity a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    /// A natural person.
    Person,
    /// A company, agency or group.
    Organization,
    /// A DNS domain.
    Domain,
    /// An IPv4 or IPv6 address.
    IpAddress,
    /// An email address.
    Email,
    /// A phone number.
    Phone,
    /// An online or financial account.
    Account,
    /// A physical location.
    Location,
    /// A document or file.
    Document,
    /// Anything the producer did not classify.
    #[default]
    #[serde(other)]
    Unknown,
}

/// A node in the intelligence graph.
///
/// Identity is the [`NodeId`]. The engine never mutates nodes; derived values
/// such as degree are returned in separate result types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawNode")]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// The entity type.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Continuous risk score in `[0, 1]`.
    pub risk_score: f64,
    /// Discrete risk level.
    pub risk_level: RiskLevel,
    /// Free-form attributes supplied by the producer.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Node {
    /// Create a node with the given id, unknown type and zero risk.
    #[must_use]
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            node_type: NodeType::Unknown,
            risk_score: 0.0,
            risk_level: RiskLevel::Info,
            metadata: HashMap::new(),
        }
    }

    /// Set the entity type.
    #[must_use]
    pub const fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    /// Set the risk score, clamped to `[0, 1]`, and derive the risk level
    /// from it. NaN becomes zero.
    ///
    /// Call [`with_risk_level`](Self::with_risk_level) afterwards to override
    /// the derived level.
    #[must_use]
    pub fn with_risk_score(mut self, score: f64) -> Self {
        self.risk_score = clamp_unit(score);
        self.risk_level = RiskLevel::from_score(self.risk_score);
        self
    }

    /// Set the risk level explicitly.
    #[must_use]
    pub const fn with_risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = level;
        self
    }

    /// Add a metadata attribute.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Get a metadata attribute by key.
    #[inline]
    #[must_use]
    pub fn get_metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }
}

/// Wire form of a node; every field except `id` is optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: NodeId,
    #[serde(default, rename = "type")]
    node_type: NodeType,
    #[serde(default)]
    risk_score: Option<f64>,
    #[serde(default)]
    risk_level: Option<RiskLevel>,
    #[serde(default)]
    metadata: HashMap<String, serde_json::Value>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let risk_score = raw.risk_score.map_or(0.0, clamp_unit);
        let risk_level = raw.risk_level.unwrap_or_else(|| RiskLevel::from_score(risk_score));
        Self { id: raw.id, node_type: raw.node_type, risk_score, risk_level, metadata: raw.metadata }
    }
}
