//! Subcommand implementations

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use super::config::EngineConfig;
use crate::{oracle::MoveSelector, tictactoe::GameGraph};

pub mod best_move;
pub mod graph;
pub mod symmetry;
pub mod value;

/// Build the graph and a selector over it, solving everything up front when configured
pub fn build_selector(config: &EngineConfig) -> Result<MoveSelector> {
    let graph = GameGraph::build().context("game graph construction failed")?;
    let mut selector = MoveSelector::new(Arc::new(graph));

    if config.precompute {
        selector
            .solver_mut()
            .solve_all()
            .context("bottom-up solve failed")?;
        info!(
            cached = selector.solver().cached_len(),
            "precomputed all values"
        );
    }

    Ok(selector)
}
