//! Symmetry analysis
//!
//! Shows the eight D4 images of a board and which one is canonical.

use anyhow::Result;
use clap::Args;

use crate::{
    cli::output::{print_board, print_section},
    tictactoe::{Board, D4Transform},
};

#[derive(Args, Debug)]
pub struct SymmetryArgs {
    /// Board as 9 comma-separated cells (0 = empty, 1 = X, 2 = O)
    #[arg(long)]
    pub board: Board,
}

pub fn execute(args: SymmetryArgs) -> Result<()> {
    let ctx = args.board.canonical_context();

    print_section("Symmetry Analysis");
    print_board("Input board", &args.board);
    print_board("Canonical form", ctx.state.board());
    println!("  reached by {}", ctx.transform);

    println!("\nThe D4 group has 8 elements (4 rotations x 2 reflections):\n");
    for (transform, image) in D4Transform::ALL.iter().zip(args.board.images()) {
        let marker = if image == *ctx.state.board() {
            " (canonical)"
        } else {
            ""
        };
        println!("{transform}{marker}");
        println!("{image}\n");
    }

    Ok(())
}
