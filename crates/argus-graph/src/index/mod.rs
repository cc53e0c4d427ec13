//! Graph indexes.
//!
//! The [`AdjacencyIndex`] is the traversal substrate for every analysis. It is
//! built once per session from the caller's node and edge slices and never
//! mutated afterwards.

mod adjacency;

pub use adjacency::{AdjacencyEntry, AdjacencyIndex, Neighbor};
