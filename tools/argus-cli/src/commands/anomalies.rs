//! Anomalies command implementation.

use argus_core::GraphSnapshot;
use argus_graph::anomaly::{Anomaly, AnomalyReport, Severity};
use argus_graph::AnalyticsConfig;

use crate::commands::open_session;
use crate::error::Result;
use crate::output::{format_json, format_table, AnomalyRow};
use crate::{OutputFormat, SeverityFilter};

/// Scan for and print anomalies.
pub fn run(
    snapshot: &GraphSnapshot,
    config: AnalyticsConfig,
    min_severity: Option<SeverityFilter>,
    format: OutputFormat,
) -> Result<()> {
    let mut session = open_session(snapshot, config)?;
    println!("{}", render(session.anomalies(), min_severity, format)?);
    Ok(())
}

/// Render anomalies at or above the given severity.
pub fn render(
    report: &AnomalyReport,
    min_severity: Option<SeverityFilter>,
    format: OutputFormat,
) -> Result<String> {
    let min = match min_severity {
        None | Some(SeverityFilter::Info) => Severity::Info,
        Some(SeverityFilter::Medium) => Severity::Medium,
        Some(SeverityFilter::High) => Severity::High,
        Some(SeverityFilter::Critical) => Severity::Critical,
    };
    let selected: Vec<&Anomaly> = report.by_severity(min).collect();

    match format {
        OutputFormat::Json => format_json(&selected),
        OutputFormat::Table => {
            if selected.is_empty() {
                return Ok("(0 anomalies)".to_string());
            }

            let count = selected.len();
            let rows: Vec<AnomalyRow> = selected
                .into_iter()
                .map(|a| AnomalyRow {
                    kind: a.kind.as_str().to_string(),
                    node: a.node_id.to_string(),
                    severity: a.severity.as_str().to_string(),
                    explanation: a.explanation.clone(),
                })
                .collect();
            Ok(format!("{}\n({count} anomalies)", format_table(rows)))
        }
    }
}
