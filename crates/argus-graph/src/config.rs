//! Analytics configuration.
//!
//! Anomaly thresholds and algorithm limits are policy, not algorithm, so they
//! live here rather than as literals in the detectors.

use argus_core::RiskLevel;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Default multiple of the average degree above which a node is a hub.
pub const DEFAULT_HUB_DEGREE_MULTIPLIER: f64 = 3.0;

/// Default neighbor count a high-risk node must exceed to be suspicious.
pub const DEFAULT_SUSPICIOUS_MIN_NEIGHBORS: usize = 5;

/// Default iteration cap for label propagation.
pub const DEFAULT_MAX_COMMUNITY_ITERATIONS: usize = 100;

/// Default cap on enumerated paths.
pub const DEFAULT_MAX_PATHS: usize = 10;

/// Default maximum number of edges in an enumerated path.
pub const DEFAULT_MAX_PATH_DEPTH: usize = 10;

/// Default maximum number of nodes accepted in a snapshot.
pub const DEFAULT_MAX_GRAPH_NODES: usize = 100_000;

/// How graph density is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityConvention {
    /// `|E| / (n(n-1))`, counting each directed edge against ordered pairs.
    #[default]
    Directed,
    /// `2|E| / (n(n-1))`, the undirected convention used by the other metrics.
    Undirected,
}

/// Configuration shared by all analyses of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// A node is a hub when its degree exceeds this multiple of the average degree.
    /// Default: 3.0
    pub hub_degree_multiplier: f64,

    /// A node at a suspicious risk level is flagged when its degree exceeds this.
    /// Default: 5
    pub suspicious_min_neighbors: usize,

    /// Risk levels that make a well-connected node suspicious.
    /// Default: Critical and High
    pub suspicious_risk_levels: Vec<RiskLevel>,

    /// Maximum number of label propagation passes.
    /// Default: 100
    pub max_community_iterations: usize,

    /// Default cap on the number of paths enumerated between two nodes.
    /// Default: 10
    pub max_paths: usize,

    /// Maximum number of edges in an enumerated path.
    /// Default: 10
    pub max_path_depth: usize,

    /// Density normalization.
    /// Default: Directed
    pub density: DensityConvention,

    /// Maximum number of nodes allowed before returning an error.
    /// Set to `None` to disable the check.
    /// Default: 100,000
    pub max_graph_nodes: Option<usize>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            hub_degree_multiplier: DEFAULT_HUB_DEGREE_MULTIPLIER,
            suspicious_min_neighbors: DEFAULT_SUSPICIOUS_MIN_NEIGHBORS,
            suspicious_risk_levels: vec![RiskLevel::Critical, RiskLevel::High],
            max_community_iterations: DEFAULT_MAX_COMMUNITY_ITERATIONS,
            max_paths: DEFAULT_MAX_PATHS,
            max_path_depth: DEFAULT_MAX_PATH_DEPTH,
            density: DensityConvention::Directed,
            max_graph_nodes: Some(DEFAULT_MAX_GRAPH_NODES),
        }
    }
}

impl AnalyticsConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hub degree multiplier.
    pub const fn with_hub_degree_multiplier(mut self, multiplier: f64) -> Self {
        self.hub_degree_multiplier = multiplier;
        self
    }

    /// Set the neighbor count a high-risk node must exceed.
    pub const fn with_suspicious_min_neighbors(mut self, neighbors: usize) -> Self {
        self.suspicious_min_neighbors = neighbors;
        self
    }

    /// Set the risk levels considered suspicious.
    pub fn with_suspicious_risk_levels(mut self, levels: impl IntoIterator<Item = RiskLevel>) -> Self {
        self.suspicious_risk_levels = levels.into_iter().collect();
        self
    }

    /// Set the label propagation iteration cap.
    pub const fn with_max_community_iterations(mut self, iterations: usize) -> Self {
        self.max_community_iterations = iterations;
        self
    }

    /// Set the default path enumeration cap.
    pub const fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    /// Set the maximum enumerated path length in edges.
    pub const fn with_max_path_depth(mut self, depth: usize) -> Self {
        self.max_path_depth = depth;
        self
    }

    /// Set the density convention.
    pub const fn with_density(mut self, density: DensityConvention) -> Self {
        self.density = density;
        self
    }

    /// Set the maximum number of nodes allowed.
    ///
    /// Snapshots larger than this are rejected with
    /// [`GraphError::GraphTooLarge`]. Set to `None` to disable the check.
    pub const fn with_max_graph_nodes(mut self, limit: Option<usize>) -> Self {
        self.max_graph_nodes = limit;
        self
    }

    /// Whether a risk level counts as suspicious under this configuration.
    pub fn is_suspicious_level(&self, level: RiskLevel) -> bool {
        self.suspicious_risk_levels.contains(&level)
    }

    /// Check the configuration for values no analysis can run with.
    pub fn validate(&self) -> GraphResult<()> {
        if !self.hub_degree_multiplier.is_finite() || self.hub_degree_multiplier < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "hub_degree_multiplier must be a non-negative finite number, got {}",
                self.hub_degree_multiplier
            )));
        }
        if self.max_community_iterations == 0 {
            return Err(GraphError::InvalidConfig(
                "max_community_iterations must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Check a node count against `max_graph_nodes`.
    pub fn check_graph_size(&self, node_count: usize) -> GraphResult<()> {
        match self.max_graph_nodes {
            Some(limit) if node_count > limit => Err(GraphError::GraphTooLarge { node_count, limit }),
            _ => Ok(()),
        }
    }
}
