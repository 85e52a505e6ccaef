//! Command dispatch logic for shortcut

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use shortcut_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    if cli.verbose {
        eprintln!("parse_args: {:?}", start.elapsed());
    }

    match &cli.command {
        Commands::Path {
            graph,
            from,
            to,
            algo,
        } => commands::path::execute(cli, graph, *from, *to, *algo),

        Commands::AllPairs { graph, algo } => commands::all_pairs::execute(cli, graph, *algo),

        Commands::DetectCycle { graph } => commands::cycle::execute(cli, graph),

        Commands::Show { graph } => commands::show::execute(cli, graph),
    }
}
