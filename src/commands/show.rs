//! `shortcut show` command - render a graph document's edges

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::graph_file;
use shortcut_core::error::Result;

/// Execute the show command
pub fn execute(cli: &Cli, graph_path: &Path) -> Result<()> {
    let graph = graph_file::load(graph_path)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "directed": graph.is_directed(),
                "vertices": graph.vertices(),
                "edges": graph.edges(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let arrow = if graph.is_directed() { "-->" } else { "--" };
            for edge in graph.edges() {
                println!("{} -- {} {} {}", edge.from, edge.weight, arrow, edge.to);
            }
        }
    }

    Ok(())
}
