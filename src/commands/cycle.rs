//! `shortcut detect-cycle` command - Union-Find cycle detection

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::graph_file;
use shortcut_core::error::Result;
use shortcut_core::graph::detect_cycle;

/// Execute the detect-cycle command
pub fn execute(cli: &Cli, graph_path: &Path) -> Result<()> {
    let graph = graph_file::load(graph_path)?;
    let cycle = detect_cycle(&graph)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "cycle": cycle })),
        OutputFormat::Human => {
            println!("{}", if cycle { "cycle detected" } else { "no cycle" });
        }
    }

    Ok(())
}
