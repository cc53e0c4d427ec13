//! Integration tests for the analysis session.

use argus_core::{GraphSnapshot, NodeType, RiskLevel};
use argus_graph::anomaly::AnomalyKind;
use argus_graph::community::NodeOrder;
use argus_graph::traversal::{Direction, PathQuery};
use argus_graph::{AnalysisSession, AnalyticsConfig, GraphError};

const SNAPSHOT: &str = r#"{
    "nodes": [
        { "id": "alice", "type": "PERSON", "riskScore": 0.9 },
        { "id": "acme", "type": "ORGANIZATION", "riskLevel": "LOW" },
        { "id": "acme.example", "type": "DOMAIN" },
        { "id": "10.0.0.7", "type": "IP_ADDRESS" },
        { "id": "drop@acme.example", "type": "EMAIL" },
        { "id": "orphan" }
    ],
    "edges": [
        { "id": "r1", "source": "alice", "target": "acme", "type": "WORKS_FOR", "confidence": 0.9 },
        { "id": "r2", "source": "acme", "target": "acme.example", "type": "OWNS" },
        { "id": "r3", "source": "acme.example", "target": "10.0.0.7", "type": "RESOLVES_TO" },
        { "id": "r4", "source": "alice", "target": "drop@acme.example", "type": "USES" },
        { "id": "r5", "source": "alice", "target": "ghost", "type": "KNOWS" }
    ]
}"#;

#[test]
fn snapshot_round_trip_analysis() {
    let snapshot = GraphSnapshot::from_json(SNAPSHOT).unwrap();
    let nodes = snapshot.nodes.as_ref().unwrap();
    assert_eq!(nodes[0].node_type, NodeType::Person);
    assert_eq!(nodes[0].risk_level, RiskLevel::Critical);
    assert_eq!(nodes[5].node_type, NodeType::Unknown);

    let mut session = AnalysisSession::from_snapshot(&snapshot, AnalyticsConfig::default()).unwrap();
    assert_eq!(session.index().skipped_edges(), 1);

    let metrics = session.metrics();
    assert_eq!(metrics.node_count, 6);
    assert_eq!(metrics.edge_count, 4);
    assert_eq!(metrics.diameter, 4);
    assert_eq!(metrics.components.num_components(), 2);

    let paths = session.find_paths("drop@acme.example", "10.0.0.7", 10);
    let hops: Vec<&str> = paths.shortest_path.iter().map(|id| id.as_str()).collect();
    assert_eq!(hops, vec!["drop@acme.example", "alice", "acme", "acme.example", "10.0.0.7"]);
    assert_eq!(paths.shortest_path_length, 4);
    assert_eq!(paths.path_count, 1);

    let anomalies = session.anomalies();
    assert_eq!(anomalies.by_kind(AnomalyKind::IsolatedNode).count(), 1);
    let bridges: Vec<&str> =
        anomalies.by_kind(AnomalyKind::BridgeNode).map(|a| a.node_id.as_str()).collect();
    assert_eq!(bridges, vec!["alice", "acme", "acme.example"]);

    let communities = session.communities(NodeOrder::Input);
    assert!(communities.converged);
    assert!(communities.community_of("orphan").is_some_and(|c| c.size == 1));
}

#[test]
fn missing_edge_collection_is_rejected() {
    let snapshot = GraphSnapshot::from_json(r#"{ "nodes": [{ "id": "a" }], "edges": null }"#).unwrap();
    let err = AnalysisSession::from_snapshot(&snapshot, AnalyticsConfig::default()).unwrap_err();
    assert!(matches!(err, GraphError::MissingEdges));

    let snapshot = GraphSnapshot::from_json(r#"{ "edges": [] }"#).unwrap();
    let err = AnalysisSession::from_snapshot(&snapshot, AnalyticsConfig::default()).unwrap_err();
    assert!(matches!(err, GraphError::MissingNodes));
}

#[test]
fn invalid_config_is_rejected() {
    let snapshot = GraphSnapshot::new(Vec::new(), Vec::new());
    let config = AnalyticsConfig::default().with_hub_degree_multiplier(f64::NAN);
    let err = AnalysisSession::from_snapshot(&snapshot, config).unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfig(_)));
}

#[test]
fn empty_snapshot_is_analyzable() {
    let snapshot = GraphSnapshot::new(Vec::new(), Vec::new());
    let mut session = AnalysisSession::from_snapshot(&snapshot, AnalyticsConfig::default()).unwrap();

    assert_eq!(session.metrics().node_count, 0);
    assert!(session.anomalies().is_empty());
    assert_eq!(session.communities(NodeOrder::Input).num_communities(), 0);
    assert!(!session.find_paths("a", "b", 10).is_reachable());
}

#[test]
fn path_queries_replace_the_cached_result() {
    let snapshot = GraphSnapshot::from_json(SNAPSHOT).unwrap();
    let mut session = AnalysisSession::from_snapshot(&snapshot, AnalyticsConfig::default()).unwrap();

    session.find_paths("alice", "acme", 10);
    let query = PathQuery::new().with_direction(Direction::Outgoing);
    let reverse = session.path_query(&query, "acme", "alice");
    assert!(!reverse.is_reachable());

    let cached = session.cached_paths().unwrap();
    assert_eq!(cached.source.as_str(), "acme");
    assert_eq!(cached.target.as_str(), "alice");
}

#[test]
fn configured_path_caps_apply() {
    let snapshot = GraphSnapshot::from_json(SNAPSHOT).unwrap();
    let config = AnalyticsConfig::default().with_max_path_depth(2);
    let mut session = AnalysisSession::from_snapshot(&snapshot, config).unwrap();

    let result = session.find_paths("drop@acme.example", "10.0.0.7", 10);
    assert!(result.is_reachable());
    assert_eq!(result.path_count, 0);
}
