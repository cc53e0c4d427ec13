//! Structural anomaly detection.
//!
//! Four detectors run over the adjacency index, in this order:
//!
//! | Kind | Rule | Severity |
//! |------|------|----------|
//! | Isolated node | no adjacency entries | Medium |
//! | Bridge node | articulation point | High |
//! | Hub node | degree above a multiple of the average degree | Info |
//! | Suspicious pattern | elevated risk level with many neighbors | Critical |
//!
//! Within a detector, nodes are reported in input order.

mod articulation;
mod detector;

use argus_core::{Node, NodeId};
use serde::{Deserialize, Serialize};

pub use articulation::ArticulationPoints;
pub use detector::AnomalyDetector;

/// Kind of anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyKind {
    /// Node without any connection.
    IsolatedNode,
    /// Node whose removal disconnects part of the graph.
    BridgeNode,
    /// Node with unusually high degree.
    HubNode,
    /// High-risk node with many connections.
    SuspiciousPattern,
}

impl AnomalyKind {
    /// Get the kind name as used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IsolatedNode => "ISOLATED_NODE",
            Self::BridgeNode => "BRIDGE_NODE",
            Self::HubNode => "HUB_NODE",
            Self::SuspiciousPattern => "SUSPICIOUS_PATTERN",
        }
    }
}

/// Severity of an anomaly. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Informational.
    Info,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Critical.
    Critical,
}

impl Severity {
    /// Get the severity name as used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// A flagged node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    /// What was detected.
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    /// The flagged node.
    pub node_id: NodeId,
    /// How serious it is.
    pub severity: Severity,
    /// Human readable explanation.
    pub explanation: String,
    /// Copy of the flagged node.
    pub node: Node,
}

/// All anomalies found in one scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnomalyReport {
    anomalies: Vec<Anomaly>,
}

impl AnomalyReport {
    pub(crate) fn new(anomalies: Vec<Anomaly>) -> Self {
        Self { anomalies }
    }

    /// Number of anomalies.
    pub fn len(&self) -> usize {
        self.anomalies.len()
    }

    /// Whether nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.anomalies.is_empty()
    }

    /// Iterate over anomalies in detector order.
    pub fn iter(&self) -> std::slice::Iter<'_, Anomaly> {
        self.anomalies.iter()
    }

    /// All anomalies as a slice.
    pub fn as_slice(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Anomalies of one kind.
    pub fn by_kind(&self, kind: AnomalyKind) -> impl Iterator<Item = &Anomaly> + '_ {
        self.anomalies.iter().filter(move |a| a.kind == kind)
    }

    /// Anomalies at or above a severity.
    pub fn by_severity(&self, min: Severity) -> impl Iterator<Item = &Anomaly> + '_ {
        self.anomalies.iter().filter(move |a| a.severity >= min)
    }

    /// Anomalies flagged on one node.
    pub fn for_node<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a Anomaly> + 'a {
        self.anomalies.iter().filter(move |a| a.node_id.as_str() == node)
    }

    /// Highest severity in the report.
    pub fn max_severity(&self) -> Option<Severity> {
        self.anomalies.iter().map(|a| a.severity).max()
    }
}

impl<'a> IntoIterator for &'a AnomalyReport {
    type Item = &'a Anomaly;
    type IntoIter = std::slice::Iter<'a, Anomaly>;

    fn into_iter(self) -> Self::IntoIter {
        self.anomalies.iter()
    }
}
