//! Tic-tac-toe oracle CLI
//!
//! Answers best-move and value queries from the exhaustively solved,
//! symmetry-reduced game graph, and inspects or exports that graph.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_oracle::cli::{self, commands, config::EngineConfig};

#[derive(Parser)]
#[command(name = "tictactoe-oracle")]
#[command(version, about = "Provably optimal tic-tac-toe moves", long_about = None)]
struct Cli {
    /// JSON engine configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Solve every position bottom-up before answering
    #[arg(long, global = true)]
    precompute: bool,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select the optimal successor of a board
    BestMove(commands::best_move::BestMoveArgs),

    /// Score a board for one player
    Value(commands::value::ValueArgs),

    /// Show game graph statistics and optionally export it
    Graph(commands::graph::GraphArgs),

    /// Show the symmetry images of a board
    Symmetry(commands::symmetry::SymmetryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if cli.precompute {
        config = config.with_precompute(true);
    }
    if cli.verbose {
        config = config.with_log_filter("debug");
    }
    cli::init_tracing(&config);

    match cli.command {
        Commands::BestMove(args) => commands::best_move::execute(args, &config),
        Commands::Value(args) => commands::value::execute(args, &config),
        Commands::Graph(args) => commands::graph::execute(args),
        Commands::Symmetry(args) => commands::symmetry::execute(args),
    }
}
