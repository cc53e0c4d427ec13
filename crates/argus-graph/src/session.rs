//! The per-snapshot analysis session.
//!
//! A session borrows one node/edge snapshot, builds its adjacency index once,
//! and caches each kind of result the first time it is asked for. Results are
//! recomputed only when their inputs change (a different community visit
//! order, a new path query) or after [`AnalysisSession::clear_cache`].

use argus_core::{Edge, GraphSnapshot, Node};
use tracing::debug;

use crate::analytics::{GraphMetrics, MetricsCalculator};
use crate::anomaly::{AnomalyDetector, AnomalyReport};
use crate::community::{CommunityDetector, CommunityResult, NodeOrder};
use crate::config::AnalyticsConfig;
use crate::error::{GraphError, GraphResult};
use crate::index::AdjacencyIndex;
use crate::traversal::{PathQuery, PathResult};

#[derive(Debug, Default)]
struct AnalysisCache {
    metrics: Option<GraphMetrics>,
    communities: Option<(NodeOrder, CommunityResult)>,
    paths: Option<PathResult>,
    anomalies: Option<AnomalyReport>,
}

/// Analysis over one borrowed graph snapshot.
///
/// Access to the cache goes through `&mut self`, so a session serves one
/// caller at a time; concurrent analyses use separate sessions.
#[derive(Debug)]
pub struct AnalysisSession<'g> {
    index: AdjacencyIndex<'g>,
    config: AnalyticsConfig,
    cache: AnalysisCache,
}

impl<'g> AnalysisSession<'g> {
    /// Create a session with the default configuration.
    pub fn new(nodes: &'g [Node], edges: &'g [Edge]) -> GraphResult<Self> {
        Self::with_config(nodes, edges, AnalyticsConfig::default())
    }

    /// Create a session with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if the configuration does not
    /// validate and [`GraphError::GraphTooLarge`] if the snapshot exceeds
    /// `max_graph_nodes`.
    pub fn with_config(nodes: &'g [Node], edges: &'g [Edge], config: AnalyticsConfig) -> GraphResult<Self> {
        config.validate()?;
        config.check_graph_size(nodes.len())?;

        let index = AdjacencyIndex::build(nodes, edges);
        debug!(
            nodes = index.node_count(),
            edges = index.edge_count(),
            skipped = index.skipped_edges(),
            "analysis session ready"
        );

        Ok(Self { index, config, cache: AnalysisCache::default() })
    }

    /// Create a session from collections that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingNodes`] or [`GraphError::MissingEdges`]
    /// when a collection is `None`, plus the errors of
    /// [`with_config`](Self::with_config).
    pub fn from_parts(
        nodes: Option<&'g [Node]>,
        edges: Option<&'g [Edge]>,
        config: AnalyticsConfig,
    ) -> GraphResult<Self> {
        let nodes = nodes.ok_or(GraphError::MissingNodes)?;
        let edges = edges.ok_or(GraphError::MissingEdges)?;
        Self::with_config(nodes, edges, config)
    }

    /// Create a session over a deserialized snapshot.
    pub fn from_snapshot(snapshot: &'g GraphSnapshot, config: AnalyticsConfig) -> GraphResult<Self> {
        Self::from_parts(snapshot.nodes.as_deref(), snapshot.edges.as_deref(), config)
    }

    /// The adjacency index of the snapshot.
    pub fn index(&self) -> &AdjacencyIndex<'g> {
        &self.index
    }

    /// The session configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Graph metrics, computed on first use.
    pub fn metrics(&mut self) -> &GraphMetrics {
        let (index, config) = (&self.index, &self.config);
        self.cache.metrics.get_or_insert_with(|| MetricsCalculator::compute(index, config))
    }

    /// Communities for the given visit order.
    ///
    /// A cached result is reused only when it was produced with the same order.
    pub fn communities(&mut self, order: NodeOrder) -> &CommunityResult {
        let fresh = matches!(&self.cache.communities, Some((cached, _)) if *cached == order);
        if !fresh {
            self.cache.communities = None;
        }

        let (index, config) = (&self.index, &self.config);
        let (_, result) = self.cache.communities.get_or_insert_with(|| {
            let result = CommunityDetector::detect(index, &order, config);
            (order, result)
        });
        result
    }

    /// Shortest path and up to `max_paths` simple paths between two nodes.
    ///
    /// Path depth is capped by the configured `max_path_depth`.
    pub fn find_paths(&mut self, source: &str, target: &str, max_paths: usize) -> &PathResult {
        let query = PathQuery::from_config(&self.config).with_max_paths(max_paths);
        self.path_query(&query, source, target)
    }

    /// Run a custom path query. The result replaces the cached path result.
    pub fn path_query(&mut self, query: &PathQuery, source: &str, target: &str) -> &PathResult {
        let result = query.find(&self.index, source, target);
        debug!(source, target, paths = result.path_count, "path query");
        self.cache.paths.insert(result)
    }

    /// Anomalies, computed on first use.
    pub fn anomalies(&mut self) -> &AnomalyReport {
        let (index, config) = (&self.index, &self.config);
        self.cache.anomalies.get_or_insert_with(|| AnomalyDetector::detect(index, config))
    }

    /// Cached metrics, if computed.
    pub fn cached_metrics(&self) -> Option<&GraphMetrics> {
        self.cache.metrics.as_ref()
    }

    /// Cached communities, if computed.
    pub fn cached_communities(&self) -> Option<&CommunityResult> {
        self.cache.communities.as_ref().map(|(_, result)| result)
    }

    /// The most recent path result, if any.
    pub fn cached_paths(&self) -> Option<&PathResult> {
        self.cache.paths.as_ref()
    }

    /// Cached anomalies, if computed.
    pub fn cached_anomalies(&self) -> Option<&AnomalyReport> {
        self.cache.anomalies.as_ref()
    }

    /// Drop every cached result.
    pub fn clear_cache(&mut self) {
        self.cache = AnalysisCache::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Vec<Node>, Vec<Edge>) {
        let nodes = vec![Node::new("a"), Node::new("b"), Node::new("c")];
        let edges = vec![Edge::new("1", "a", "b"), Edge::new("2", "b", "c"), Edge::new("3", "c", "a")];
        (nodes, edges)
    }

    #[test]
    fn metrics_are_cached() {
        let (nodes, edges) = triangle();
        let mut session = AnalysisSession::new(&nodes, &edges).unwrap();
        assert!(session.cached_metrics().is_none());

        let first = session.metrics().computed_at;
        let second = session.metrics().computed_at;
        assert_eq!(first, second);
        assert!(session.cached_metrics().is_some());
    }

    #[test]
    fn communities_recompute_for_new_order() {
        let (nodes, edges) = triangle();
        let mut session = AnalysisSession::new(&nodes, &edges).unwrap();

        assert_eq!(session.communities(NodeOrder::Input).num_communities(), 1);
        assert_eq!(session.communities(NodeOrder::Seeded(9)).num_communities(), 1);
        assert!(session.cached_communities().is_some());
    }

    #[test]
    fn clear_cache_drops_results() {
        let (nodes, edges) = triangle();
        let mut session = AnalysisSession::new(&nodes, &edges).unwrap();
        session.metrics();
        session.anomalies();
        session.find_paths("a", "c", 5);

        session.clear_cache();
        assert!(session.cached_metrics().is_none());
        assert!(session.cached_anomalies().is_none());
        assert!(session.cached_paths().is_none());
        assert!(session.cached_communities().is_none());
    }

    #[test]
    fn missing_collections_are_rejected() {
        let (nodes, edges) = triangle();
        let err = AnalysisSession::from_parts(None, Some(&edges), AnalyticsConfig::default()).unwrap_err();
        assert!(matches!(err, GraphError::MissingNodes));
        let err = AnalysisSession::from_parts(Some(&nodes), None, AnalyticsConfig::default()).unwrap_err();
        assert!(matches!(err, GraphError::MissingEdges));
    }

    #[test]
    fn size_limit_is_enforced() {
        let (nodes, edges) = triangle();
        let config = AnalyticsConfig::default().with_max_graph_nodes(Some(2));
        let err = AnalysisSession::with_config(&nodes, &edges, config).unwrap_err();
        assert!(matches!(err, GraphError::GraphTooLarge { node_count: 3, limit: 2 }));
    }
}
