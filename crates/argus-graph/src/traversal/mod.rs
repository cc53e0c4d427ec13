//! Graph traversal.
//!
//! - [`Bfs`] - Single-source breadth-first distances
//! - [`PathFinder`] / [`PathQuery`] - Shortest path and bounded simple-path enumeration
//!
//! All traversals walk the [`AdjacencyIndex`](crate::index::AdjacencyIndex).
//! By default they follow edges in both directions, the undirected projection
//! the structural metrics use; a [`PathQuery`] can restrict that.

mod bfs;
mod paths;

use serde::{Deserialize, Serialize};

pub use bfs::Bfs;
pub use paths::{PathFinder, PathQuery, PathResult};

/// Direction in which edges are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Follow edges from source to target.
    Outgoing,

    /// Follow edges from target back to source.
    Incoming,

    /// Follow edges either way.
    #[default]
    Both,
}

impl Direction {
    /// Returns true if this direction includes outgoing edges.
    #[inline]
    pub const fn includes_outgoing(self) -> bool {
        matches!(self, Self::Outgoing | Self::Both)
    }

    /// Returns true if this direction includes incoming edges.
    #[inline]
    pub const fn includes_incoming(self) -> bool {
        matches!(self, Self::Incoming | Self::Both)
    }

    /// Whether a step taken in `step` direction is allowed under `self`.
    #[inline]
    pub const fn permits(self, step: Self) -> bool {
        match step {
            Self::Outgoing => self.includes_outgoing(),
            Self::Incoming => self.includes_incoming(),
            Self::Both => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_includes() {
        assert!(Direction::Outgoing.includes_outgoing());
        assert!(!Direction::Outgoing.includes_incoming());
        assert!(Direction::Incoming.includes_incoming());
        assert!(Direction::Both.includes_outgoing() && Direction::Both.includes_incoming());
    }

    #[test]
    fn direction_permits() {
        assert!(Direction::Both.permits(Direction::Incoming));
        assert!(Direction::Outgoing.permits(Direction::Outgoing));
        assert!(!Direction::Outgoing.permits(Direction::Incoming));
        assert_eq!(Direction::default(), Direction::Both);
    }
}
