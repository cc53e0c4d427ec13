//! Argus Core
//!
//! This crate provides the graph model consumed by the Argus analytics engine:
//! intelligence entities (nodes), the directed relationships between them
//! (edges), and the snapshot container used to hand both to the engine.
//!
//! # Example
//!
//! ```
//! use argus_core::{Edge, Node, NodeType, RiskLevel};
//!
//! let alice = Node::new("alice").with_type(NodeType::Person).with_risk_score(0.85);
//! let acme = Node::new("acme").with_type(NodeType::Organization);
//!
//! let employs = Edge::new("e1", "acme", "alice").with_type("EMPLOYS").with_confidence(0.9);
//!
//! assert_eq!(alice.risk_level, RiskLevel::Critical);
//! assert_eq!(employs.source, acme.id);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Graph model types ([`Node`], [`Edge`], IDs, risk levels, snapshots)
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{Edge, EdgeId, EdgeType, GraphSnapshot, Node, NodeId, NodeType, RiskLevel};
