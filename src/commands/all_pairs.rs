//! `shortcut all-pairs` command - full distance matrix
//!
//! Routes to Floyd-Warshall or Johnson's algorithm and renders every
//! `(from, to)` pair, or the negative-cycle verdict when one is found.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat, PairsAlgorithm};
use crate::commands::graph_file;
use shortcut_core::error::Result;
use shortcut_core::graph::{all_pairs, floyd_warshall, johnson};

/// Execute the all-pairs command
pub fn execute(cli: &Cli, graph_path: &Path, algo: PairsAlgorithm) -> Result<()> {
    let start = Instant::now();
    let graph = graph_file::load(graph_path)?;

    if cli.verbose {
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            elapsed = ?start.elapsed(),
            "load_graph"
        );
    }

    let matrix = match algo {
        PairsAlgorithm::Auto => all_pairs(&graph)?,
        PairsAlgorithm::FloydWarshall => floyd_warshall(&graph)?,
        PairsAlgorithm::Johnson => johnson(&graph)?,
    };

    match cli.format {
        OutputFormat::Json => {
            let output = if matrix.has_negative_cycle() {
                serde_json::json!({ "negative_cycle": true, "distances": [] })
            } else {
                serde_json::json!({ "negative_cycle": false, "distances": matrix.rows()? })
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if matrix.has_negative_cycle() {
                println!("no shortest distances exist, negative cycle detected");
                return Ok(());
            }
            for entry in matrix.rows()? {
                match entry.distance {
                    Some(distance) => println!("{} -> {} :: {}", entry.from, entry.to, distance),
                    None => println!("{} -> {} :: unreachable", entry.from, entry.to),
                }
            }
        }
    }

    Ok(())
}
