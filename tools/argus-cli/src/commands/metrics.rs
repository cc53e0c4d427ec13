//! Metrics command implementation.

use argus_core::GraphSnapshot;
use argus_graph::analytics::{CentralityScores, GraphMetrics};
use argus_graph::AnalyticsConfig;

use crate::commands::open_session;
use crate::error::Result;
use crate::output::{format_float, format_info_table, format_json, format_table, InfoRow, ScoreRow};
use crate::OutputFormat;

/// Compute and print graph metrics.
pub fn run(snapshot: &GraphSnapshot, config: AnalyticsConfig, top: usize, format: OutputFormat) -> Result<()> {
    let mut session = open_session(snapshot, config)?;
    println!("{}", render(session.metrics(), top, format)?);
    Ok(())
}

/// Render metrics in the given format.
pub fn render(metrics: &GraphMetrics, top: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_json(metrics),
        OutputFormat::Table => {
            let rows = vec![
                InfoRow::new("Nodes", metrics.node_count),
                InfoRow::new("Edges", metrics.edge_count),
                InfoRow::new("Density", format_float(metrics.density)),
                InfoRow::new("Average Degree", format_float(metrics.average_degree)),
                InfoRow::new("Diameter", metrics.diameter),
                InfoRow::new("Average Path Length", format_float(metrics.average_path_length)),
                InfoRow::new("Clustering Coefficient", format_float(metrics.clustering_coefficient)),
                InfoRow::new("Connected Components", metrics.components.num_components()),
                InfoRow::new("Computed At", metrics.computed_at.to_rfc3339()),
            ];

            let mut out = format_info_table(rows);
            for (title, scores) in [
                ("Degree Centrality", &metrics.degree_centrality),
                ("Betweenness Centrality", &metrics.betweenness_centrality),
                ("Closeness Centrality", &metrics.closeness_centrality),
            ] {
                if top > 0 && !scores.is_empty() {
                    out.push_str(&format!("\n\n{title} (top {top})\n"));
                    out.push_str(&format_table(score_rows(scores, top)));
                }
            }
            Ok(out)
        }
    }
}

fn score_rows(scores: &CentralityScores, top: usize) -> Vec<ScoreRow> {
    scores
        .top_n(top)
        .into_iter()
        .map(|(node, score)| ScoreRow { node: node.to_string(), score: format_float(score) })
        .collect()
}

#[cfg(test)]
mod tests {
    use argus_core::{Edge, Node};
    use argus_graph::AnalysisSession;

    use super::*;

    #[test]
    fn table_lists_scalars_and_top_nodes() {
        let nodes = vec![Node::new("a"), Node::new("b"), Node::new("c")];
        let edges = vec![Edge::new("1", "a", "b"), Edge::new("2", "b", "c")];
        let mut session = AnalysisSession::new(&nodes, &edges).unwrap();

        let table = render(session.metrics(), 1, OutputFormat::Table).unwrap();
        assert!(table.contains("Diameter"));
        assert!(table.contains("Betweenness Centrality (top 1)"));

        let json = render(session.metrics(), 1, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["diameter"], 2);
    }
}
