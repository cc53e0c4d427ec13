//! Anomaly scan over an adjacency index.

use tracing::debug;

use crate::config::AnalyticsConfig;
use crate::index::AdjacencyIndex;

use super::{Anomaly, AnomalyKind, AnomalyReport, ArticulationPoints, Severity};

/// Runs every detector and collects the results.
pub struct AnomalyDetector;

impl AnomalyDetector {
    /// Scan the graph for anomalies.
    ///
    /// Degrees count adjacency entries, so parallel edges and self-loops add
    /// to a node's degree here.
    pub fn detect(index: &AdjacencyIndex<'_>, config: &AnalyticsConfig) -> AnomalyReport {
        let mut anomalies = Vec::new();

        anomalies.extend(Self::isolated(index));
        anomalies.extend(Self::bridges(index));
        anomalies.extend(Self::hubs(index, config.hub_degree_multiplier));
        anomalies.extend(Self::suspicious(index, config));

        debug!(
            nodes = index.node_count(),
            anomalies = anomalies.len(),
            "anomaly scan complete"
        );
        AnomalyReport::new(anomalies)
    }

    /// Nodes with no adjacency entries.
    pub fn isolated(index: &AdjacencyIndex<'_>) -> Vec<Anomaly> {
        (0..index.node_count())
            .filter(|&i| index.degree_at(i) == 0)
            .map(|i| {
                Self::flag(
                    index,
                    i,
                    AnomalyKind::IsolatedNode,
                    Severity::Medium,
                    "Node has no connections to any other entity".to_owned(),
                )
            })
            .collect()
    }

    /// Articulation points.
    pub fn bridges(index: &AdjacencyIndex<'_>) -> Vec<Anomaly> {
        ArticulationPoints::positions(index)
            .into_iter()
            .map(|i| {
                Self::flag(
                    index,
                    i,
                    AnomalyKind::BridgeNode,
                    Severity::High,
                    "Removing this node would disconnect part of the network".to_owned(),
                )
            })
            .collect()
    }

    /// Nodes whose degree exceeds `multiplier` times the average degree.
    pub fn hubs(index: &AdjacencyIndex<'_>, multiplier: f64) -> Vec<Anomaly> {
        let average = index.average_degree();
        let threshold = multiplier * average;

        (0..index.node_count())
            .filter(|&i| index.degree_at(i) as f64 > threshold)
            .map(|i| {
                let degree = index.degree_at(i);
                Self::flag(
                    index,
                    i,
                    AnomalyKind::HubNode,
                    Severity::Info,
                    format!("Degree {degree} exceeds {multiplier}x the average degree of {average:.2}"),
                )
            })
            .collect()
    }

    /// Nodes with a suspicious risk level and more than the configured
    /// number of neighbors.
    pub fn suspicious(index: &AdjacencyIndex<'_>, config: &AnalyticsConfig) -> Vec<Anomaly> {
        (0..index.node_count())
            .filter(|&i| {
                config.is_suspicious_level(index.node_at(i).risk_level)
                    && index.degree_at(i) > config.suspicious_min_neighbors
            })
            .map(|i| {
                let node = index.node_at(i);
                Self::flag(
                    index,
                    i,
                    AnomalyKind::SuspiciousPattern,
                    Severity::Critical,
                    format!(
                        "{} risk entity with {} connections",
                        node.risk_level.as_str(),
                        index.degree_at(i)
                    ),
                )
            })
            .collect()
    }

    fn flag(
        index: &AdjacencyIndex<'_>,
        position: usize,
        kind: AnomalyKind,
        severity: Severity,
        explanation: String,
    ) -> Anomaly {
        let node = index.node_at(position);
        Anomaly { kind, node_id: node.id.clone(), severity, explanation, node: node.clone() }
    }
}
