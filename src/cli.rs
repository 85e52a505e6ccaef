//! CLI argument parsing for shortcut
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use shortcut_core::error::ShortcutError;
pub use shortcut_core::format::OutputFormat;

/// `OutputFormat` lives in the core crate, so clap gets a parser function
/// rather than a `ValueEnum` impl
fn parse_format(s: &str) -> Result<OutputFormat, ShortcutError> {
    s.parse()
}

/// Shortcut - weighted shortest-path CLI
#[derive(Parser, Debug)]
#[command(name = "shortcut")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest path between two vertices
    Path {
        /// Graph document to load (JSON)
        #[arg(long)]
        graph: PathBuf,

        /// Source vertex
        #[arg(long)]
        from: u32,

        /// Destination vertex
        #[arg(long)]
        to: u32,

        /// Solver selection
        #[arg(long, value_enum, default_value = "auto")]
        algo: PathAlgorithm,
    },

    /// All-pairs shortest distances
    AllPairs {
        /// Graph document to load (JSON)
        #[arg(long)]
        graph: PathBuf,

        /// Solver selection
        #[arg(long, value_enum, default_value = "auto")]
        algo: PairsAlgorithm,
    },

    /// Union-Find cycle detection (undirected graphs only)
    DetectCycle {
        /// Graph document to load (JSON)
        #[arg(long)]
        graph: PathBuf,
    },

    /// Print the edges of a graph document
    Show {
        /// Graph document to load (JSON)
        #[arg(long)]
        graph: PathBuf,
    },
}

/// Single-source solver selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAlgorithm {
    /// Pick by edge weights: dijkstra unless negative edges are present
    Auto,
    /// Non-negative weights only
    Dijkstra,
    /// Handles negative weights and detects negative cycles
    BellmanFord,
}

/// All-pairs solver selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairsAlgorithm {
    /// Pick by density and edge weights
    Auto,
    /// Dense graphs, cubic sweep
    FloydWarshall,
    /// Sparse graphs, handles negative weights
    Johnson,
}
