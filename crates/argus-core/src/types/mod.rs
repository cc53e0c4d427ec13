//! Graph model types.
//!
//! Nodes and edges are supplied by the caller and treated as read-only by the
//! analytics engine. Everything the engine derives lives in `argus-graph`.

mod edge;
mod id;
mod node;
mod risk;
mod snapshot;

pub use edge::{Edge, EdgeType};
pub use id::{EdgeId, NodeId};
pub use node::{Node, NodeType};
pub use risk::RiskLevel;
pub use snapshot::GraphSnapshot;

/// Clamp a score to `[0, 1]`, mapping NaN to zero.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
