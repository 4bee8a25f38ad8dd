//! Game graph statistics and export

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    cli::output::{print_kv, print_section, print_subsection},
    export::GraphExport,
    tictactoe::{Board, GameGraph},
};

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Restrict to this board and its descendants
    #[arg(long)]
    pub root: Option<Board>,

    /// Write nodes and edges as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: GraphArgs) -> Result<()> {
    let full = GameGraph::build().context("game graph construction failed")?;

    let (graph, root_id) = match args.root {
        Some(root) => {
            let canonical = root.canonical();
            (full.subgraph(&canonical)?, Some(canonical.encode()))
        }
        None => (full, None),
    };

    print_section("Game Graph");
    if let Some(id) = &root_id {
        print_kv("Drill-down root", id);
    }
    print_kv("Nodes", &graph.len().to_string());
    print_kv("Edges", &graph.edge_count().to_string());

    print_subsection("Nodes by level");
    for (level, count) in graph.level_histogram().iter().enumerate() {
        if *count > 0 {
            print_kv(&format!("Level {level}"), &count.to_string());
        }
    }

    if let Some(path) = args.export {
        GraphExport::from_graph(&graph, root_id).save_to_file(&path)?;
        println!("\nGraph exported to: {}", path.display());
    }

    Ok(())
}
