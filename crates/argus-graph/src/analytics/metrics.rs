//! Aggregate graph metrics.

use std::collections::HashMap;

use argus_core::NodeId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::{
    density, BetweennessCentrality, CentralityScores, ClusteringCoefficient, ComponentResult,
    ConnectedComponents, DegreeCentrality, PathStatistics,
};
use crate::config::AnalyticsConfig;
use crate::index::AdjacencyIndex;

/// Every structural metric of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphMetrics {
    /// Number of indexed nodes.
    pub node_count: usize,
    /// Number of accepted edges.
    pub edge_count: usize,
    /// Density under the configured convention.
    pub density: f64,
    /// Mean adjacency list length.
    pub average_degree: f64,
    /// Largest finite shortest-path distance.
    pub diameter: usize,
    /// Mean finite, positive shortest-path distance.
    pub average_path_length: f64,
    /// Mean local clustering coefficient over nodes with two or more neighbors.
    pub clustering_coefficient: f64,
    /// Local clustering coefficient of qualifying nodes.
    pub local_clustering: HashMap<NodeId, f64>,
    /// Normalized degree centrality.
    pub degree_centrality: CentralityScores,
    /// Normalized betweenness centrality.
    pub betweenness_centrality: CentralityScores,
    /// Closeness centrality.
    pub closeness_centrality: CentralityScores,
    /// Connected components.
    pub components: ComponentResult,
    /// When the metrics were computed.
    pub computed_at: DateTime<Utc>,
}

/// Computes [`GraphMetrics`].
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Compute every metric for the indexed snapshot.
    pub fn compute(index: &AdjacencyIndex<'_>, config: &AnalyticsConfig) -> GraphMetrics {
        let paths = PathStatistics::compute(index);
        let clustering = ClusteringCoefficient::compute(index);

        let metrics = GraphMetrics {
            node_count: index.node_count(),
            edge_count: index.edge_count(),
            density: density(index, config.density),
            average_degree: index.average_degree(),
            diameter: paths.diameter,
            average_path_length: paths.average_path_length,
            clustering_coefficient: clustering.average,
            local_clustering: clustering.local,
            degree_centrality: DegreeCentrality::compute(index),
            betweenness_centrality: BetweennessCentrality::compute(index),
            closeness_centrality: paths.closeness,
            components: ConnectedComponents::compute(index),
            computed_at: Utc::now(),
        };

        debug!(
            nodes = metrics.node_count,
            edges = metrics.edge_count,
            components = metrics.components.num_components(),
            diameter = metrics.diameter,
            "computed graph metrics"
        );
        metrics
    }
}

#[cfg(test)]
mod tests {
    use argus_core::{Edge, Node};

    use super::*;

    #[test]
    fn empty_graph_is_neutral() {
        let index = AdjacencyIndex::build(&[], &[]);
        let metrics = MetricsCalculator::compute(&index, &AnalyticsConfig::default());

        assert_eq!(metrics.node_count, 0);
        assert!(metrics.density.abs() < f64::EPSILON);
        assert!(metrics.average_degree.abs() < f64::EPSILON);
        assert_eq!(metrics.diameter, 0);
        assert_eq!(metrics.components.num_components(), 0);
        assert!(metrics.betweenness_centrality.is_empty());
    }

    #[test]
    fn triangle() {
        let nodes: Vec<Node> = ["a", "b", "c"].iter().map(|&id| Node::new(id)).collect();
        let edges = vec![Edge::new("1", "a", "b"), Edge::new("2", "b", "c"), Edge::new("3", "c", "a")];
        let index = AdjacencyIndex::build(&nodes, &edges);
        let metrics = MetricsCalculator::compute(&index, &AnalyticsConfig::default());

        assert!((metrics.density - 0.5).abs() < 1e-12);
        assert!((metrics.average_degree - 2.0).abs() < 1e-12);
        assert_eq!(metrics.diameter, 1);
        assert!((metrics.average_path_length - 1.0).abs() < 1e-12);
        assert!((metrics.clustering_coefficient - 1.0).abs() < 1e-12);
        assert_eq!(metrics.betweenness_centrality.score("a"), Some(0.0));
        assert_eq!(metrics.closeness_centrality.score("b"), Some(1.0));
        assert_eq!(metrics.degree_centrality.score("c"), Some(1.0));
    }

    #[test]
    fn serializes_to_json() {
        let nodes = vec![Node::new("a")];
        let index = AdjacencyIndex::build(&nodes, &[]);
        let metrics = MetricsCalculator::compute(&index, &AnalyticsConfig::default());
        let json = serde_json::to_value(&metrics).expect("serializable");
        assert_eq!(json["node_count"], 1);
        assert!(json["computed_at"].is_string());
    }
}
