//! Argus Command Line Interface
//!
//! Runs graph analytics over a JSON snapshot of nodes and edges.

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{anomalies, communities, load_config, load_snapshot, metrics, paths};
use crate::error::Result;

/// Argus Command Line Interface
///
/// Structural metrics, communities, paths and anomalies for intelligence graphs.
#[derive(Parser, Debug)]
#[command(name = "argus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the JSON graph snapshot
    #[arg(short, long, env = "ARGUS_SNAPSHOT", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Path to a JSON analytics configuration
    #[arg(short, long, env = "ARGUS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    Table,
    /// JSON format
    Json,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute structural metrics
    Metrics {
        /// Number of nodes to list per centrality measure
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Detect communities by label propagation
    Communities {
        /// Shuffle the visit order with this seed instead of using input order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Find the shortest path and enumerate simple paths between two nodes
    Paths {
        /// Source node ID
        from: String,

        /// Target node ID
        to: String,

        /// Maximum number of enumerated paths
        #[arg(long)]
        max: Option<usize>,

        /// Maximum path length in edges
        #[arg(long)]
        depth: Option<usize>,

        /// Edge type filter (repeatable)
        #[arg(long)]
        edge_type: Vec<String>,

        /// Direction: 'outgoing', 'incoming', or 'both'
        #[arg(long, default_value = "both")]
        direction: TraversalDirection,
    },

    /// Flag isolated, bridge, hub and high-risk nodes
    Anomalies {
        /// Only show anomalies at or above this severity
        #[arg(long)]
        min_severity: Option<SeverityFilter>,
    },
}

/// Traversal direction for path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TraversalDirection {
    /// Follow outgoing edges only.
    Outgoing,
    /// Follow incoming edges only.
    Incoming,
    /// Follow both outgoing and incoming edges.
    Both,
}

/// Minimum severity filter for anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SeverityFilter {
    /// Everything.
    Info,
    /// Medium and above.
    Medium,
    /// High and above.
    High,
    /// Critical only.
    Critical,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let snapshot = load_snapshot(cli.snapshot.as_deref())?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Metrics { top } => metrics::run(&snapshot, config, top, cli.format),
        Commands::Communities { seed } => communities::run(&snapshot, config, seed, cli.format),
        Commands::Paths { from, to, max, depth, edge_type, direction } => {
            let request = paths::PathRequest { from, to, max, depth, edge_types: edge_type, direction };
            paths::run(&snapshot, config, &request, cli.format)
        }
        Commands::Anomalies { min_severity } => {
            anomalies::run(&snapshot, config, min_severity, cli.format)
        }
    }
}
