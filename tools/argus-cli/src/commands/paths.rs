//! Paths command implementation.

use argus_core::GraphSnapshot;
use argus_graph::traversal::{Direction, PathQuery, PathResult};
use argus_graph::AnalyticsConfig;

use crate::commands::open_session;
use crate::error::Result;
use crate::output::{format_json, format_path, format_table, PathRow};
use crate::{OutputFormat, TraversalDirection};

/// Arguments of a path query.
#[derive(Debug, Clone)]
pub struct PathRequest {
    /// Source node ID.
    pub from: String,
    /// Target node ID.
    pub to: String,
    /// Path count cap, overriding the configuration.
    pub max: Option<usize>,
    /// Path depth cap, overriding the configuration.
    pub depth: Option<usize>,
    /// Edge types to follow; empty means all.
    pub edge_types: Vec<String>,
    /// Direction in which edges are followed.
    pub direction: TraversalDirection,
}

impl PathRequest {
    /// Build the library query for this request.
    pub fn query(&self, config: &AnalyticsConfig) -> PathQuery {
        let direction = match self.direction {
            TraversalDirection::Outgoing => Direction::Outgoing,
            TraversalDirection::Incoming => Direction::Incoming,
            TraversalDirection::Both => Direction::Both,
        };

        let mut query = PathQuery::from_config(config).with_direction(direction);
        if let Some(max) = self.max {
            query = query.with_max_paths(max);
        }
        if let Some(depth) = self.depth {
            query = query.with_max_depth(depth);
        }
        if !self.edge_types.is_empty() {
            query = query.with_edge_types(self.edge_types.iter().map(|t| t.as_str().into()));
        }
        query
    }
}

/// Find and print paths.
pub fn run(
    snapshot: &GraphSnapshot,
    config: AnalyticsConfig,
    request: &PathRequest,
    format: OutputFormat,
) -> Result<()> {
    let query = request.query(&config);
    let mut session = open_session(snapshot, config)?;
    println!("{}", render(session.path_query(&query, &request.from, &request.to), format)?);
    Ok(())
}

/// Render a path result in the given format.
pub fn render(result: &PathResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(result),
        OutputFormat::Table => {
            if !result.is_reachable() {
                return Ok(format!("No path from {} to {}", result.source, result.target));
            }

            let mut out = format!(
                "Shortest path ({} hops): {}",
                result.shortest_path_length,
                format_path(&result.shortest_path)
            );
            let rows: Vec<PathRow> = result
                .all_paths
                .iter()
                .enumerate()
                .map(|(i, path)| PathRow {
                    index: i + 1,
                    length: path.len().saturating_sub(1),
                    path: format_path(path),
                })
                .collect();
            if !rows.is_empty() {
                out.push_str("\n\n");
                out.push_str(&format_table(rows));
            }
            out.push_str(&format!("\n({} paths)", result.path_count));
            Ok(out)
        }
    }
}
