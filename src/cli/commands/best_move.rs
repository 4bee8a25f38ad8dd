//! Best-move command

use anyhow::Result;
use clap::Args;

use super::build_selector;
use crate::{
    cli::{
        config::EngineConfig,
        output::{print_board, print_kv, print_section, print_subsection},
    },
    tictactoe::Board,
};

#[derive(Args, Debug)]
pub struct BestMoveArgs {
    /// Board as 9 comma-separated cells (0 = empty, 1 = X, 2 = O)
    #[arg(long)]
    pub board: Board,

    /// Show the value of every successor
    #[arg(long)]
    pub ratings: bool,
}

pub fn execute(args: BestMoveArgs, config: &EngineConfig) -> Result<()> {
    let mut selector = build_selector(config)?;
    let raw = args.board;

    print_section("Best Move");
    print_board("Input board", &raw);
    print_board("Canonical form", raw.canonical().board());

    let Some(choice) = selector.choose(&raw)? else {
        println!("\nNo move available: the position is terminal.");
        return Ok(());
    };

    print_kv("Player to move", &choice.mover.to_string());
    print_board("Best move", choice.successor.board());
    print_kv("Value", &choice.value.to_string());
    print_kv("Play cell", &choice.position.to_string());

    if args.ratings {
        print_subsection("Move ratings");
        for rated in selector.rate_moves(&raw)? {
            print_kv(&rated.successor.encode(), &rated.value.to_string());
        }
    }

    Ok(())
}
