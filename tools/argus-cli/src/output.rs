//! Output formatting utilities.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;

/// A simple key-value row for displaying info.
#[derive(Tabled)]
pub struct InfoRow {
    #[tabled(rename = "Property")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl InfoRow {
    /// Create a row from anything displayable.
    pub fn new(key: &str, value: impl ToString) -> Self {
        Self { key: key.to_owned(), value: value.to_string() }
    }
}

/// A node with a centrality score.
#[derive(Tabled)]
pub struct ScoreRow {
    #[tabled(rename = "Node")]
    pub node: String,
    #[tabled(rename = "Score")]
    pub score: String,
}

/// A community summary row.
#[derive(Tabled)]
pub struct CommunityRow {
    #[tabled(rename = "ID")]
    pub id: usize,
    #[tabled(rename = "Size")]
    pub size: usize,
    #[tabled(rename = "Modularity")]
    pub modularity: String,
    #[tabled(rename = "Color")]
    pub color: String,
    #[tabled(rename = "Members")]
    pub members: String,
}

/// An anomaly row.
#[derive(Tabled)]
pub struct AnomalyRow {
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Node")]
    pub node: String,
    #[tabled(rename = "Severity")]
    pub severity: String,
    #[tabled(rename = "Explanation")]
    pub explanation: String,
}

/// An enumerated path row.
#[derive(Tabled)]
pub struct PathRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Length")]
    pub length: usize,
    #[tabled(rename = "Path")]
    pub path: String,
}

/// Render rows as a rounded table.
pub fn format_table<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format an info table with key-value pairs.
pub fn format_info_table(rows: Vec<InfoRow>) -> String {
    format_table(rows)
}

/// Render any serializable result as pretty JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a float with four decimals, dropping the noise of exact integers.
pub fn format_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.4}")
    }
}

/// Join node ids with an arrow.
pub fn format_path<S: AsRef<str>>(nodes: &[S]) -> String {
    nodes.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" -> ")
}
