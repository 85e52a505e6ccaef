//! `shortcut path` command - single-source, single-destination query
//!
//! Routes to Dijkstra or Bellman-Ford (directly or automatically based on
//! edge weights) and renders the distance, route, and cycle flag.

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat, PathAlgorithm};
use crate::commands::graph_file;
use shortcut_core::error::Result;
use shortcut_core::graph::{bellman_ford, dijkstra, shortest_path, PathQuery, VertexId};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph_path: &Path,
    from: u32,
    to: u32,
    algo: PathAlgorithm,
) -> Result<()> {
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

    let from = VertexId::new(from);
    let to = VertexId::new(to);

    let query = match algo {
        PathAlgorithm::Auto => shortest_path(&graph, from, to)?,
        PathAlgorithm::Dijkstra => dijkstra(&graph, from, Some(to))?.to_query(to, "dijkstra")?,
        PathAlgorithm::BellmanFord => {
            bellman_ford(&graph, from)?.to_query(to, "bellman-ford")?
        }
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&query)?),
        OutputFormat::Human => print_human(&query, cli.quiet),
    }

    Ok(())
}

fn print_human(query: &PathQuery, quiet: bool) {
    if query.negative_cycle {
        println!(
            "{} -> {}: no shortest distance exists, negative cycle detected",
            query.from, query.to
        );
        return;
    }

    match query.distance {
        Some(distance) => {
            println!("{} -> {}: distance {}", query.from, query.to, distance);
            if !quiet {
                let route = query
                    .path
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!("route: {route}");
                println!("algorithm: {}", query.algorithm);
            }
        }
        None => println!("{} -> {}: no path exists", query.from, query.to),
    }
}
