//! Perspective value command

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::build_selector;
use crate::{
    cli::{
        config::EngineConfig,
        output::{print_board, print_kv, print_section},
    },
    tictactoe::{Board, Player},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PerspectiveArg {
    X,
    O,
}

impl From<PerspectiveArg> for Player {
    fn from(arg: PerspectiveArg) -> Self {
        match arg {
            PerspectiveArg::X => Player::X,
            PerspectiveArg::O => Player::O,
        }
    }
}

#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Board as 9 comma-separated cells (0 = empty, 1 = X, 2 = O)
    #[arg(long)]
    pub board: Board,

    /// Player whose outcome is scored
    #[arg(long, value_enum)]
    pub perspective: PerspectiveArg,
}

pub fn execute(args: ValueArgs, config: &EngineConfig) -> Result<()> {
    args.board.to_move()?;
    let mut selector = build_selector(config)?;
    let perspective = Player::from(args.perspective);
    let canonical = args.board.canonical();
    let value = selector.solver_mut().value(&canonical, perspective)?;

    print_section("Perspective Value");
    print_board("Input board", &args.board);
    print_board("Canonical form", canonical.board());
    print_kv("Perspective", &perspective.to_string());
    print_kv("Value", &value.to_string());

    Ok(())
}
