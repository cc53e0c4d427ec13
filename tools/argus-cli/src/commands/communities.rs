//! Communities command implementation.

use argus_core::GraphSnapshot;
use argus_graph::community::{CommunityResult, NodeOrder};
use argus_graph::AnalyticsConfig;

use crate::commands::open_session;
use crate::error::Result;
use crate::output::{format_float, format_json, format_table, CommunityRow};
use crate::OutputFormat;

/// Detect and print communities.
pub fn run(
    snapshot: &GraphSnapshot,
    config: AnalyticsConfig,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let mut session = open_session(snapshot, config)?;
    let order = seed.map_or(NodeOrder::Input, NodeOrder::Seeded);
    println!("{}", render(session.communities(order), format)?);
    Ok(())
}

/// Render a community result in the given format.
pub fn render(result: &CommunityResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(result),
        OutputFormat::Table => {
            if result.communities.is_empty() {
                return Ok("(0 communities)".to_string());
            }

            let rows: Vec<CommunityRow> = result
                .communities
                .iter()
                .map(|c| CommunityRow {
                    id: c.id,
                    size: c.size,
                    modularity: format_float(c.modularity),
                    color: c.color.to_string(),
                    members: c.members.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", "),
                })
                .collect();

            let status = if result.converged { "converged" } else { "iteration cap reached" };
            Ok(format!(
                "{}\n({} communities, modularity {}, {} iterations, {status})",
                format_table(rows),
                result.num_communities(),
                format_float(result.modularity),
                result.iterations,
            ))
        }
    }
}
