//! Memoized minimax over the game graph

use std::{collections::HashMap, sync::Arc};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::PerspectiveValue;
use crate::{
    Error, Result,
    tictactoe::{CELL_COUNT, CanonicalBoard, GameGraph, GraphNode, Player},
};

type CacheKey = (CanonicalBoard, Player);

/// Minimax evaluator owning its memo table
///
/// The cache is keyed by `(board, perspective)`: the same board is worth
/// different amounts to X and to O, and one solver answers for both.
/// Entries are never invalidated since the graph never changes.
#[derive(Debug, Clone)]
pub struct MinimaxSolver {
    graph: Arc<GameGraph>,
    cache: HashMap<CacheKey, PerspectiveValue>,
}

impl MinimaxSolver {
    pub fn new(graph: Arc<GameGraph>) -> Self {
        Self {
            graph,
            cache: HashMap::new(),
        }
    }

    pub fn graph(&self) -> &Arc<GameGraph> {
        &self.graph
    }

    /// Number of memoized `(board, perspective)` pairs
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, board: &CanonicalBoard, perspective: Player) -> bool {
        self.cache.contains_key(&(*board, perspective))
    }

    /// Value of `board` for `perspective`, computing and caching it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBoard`] when `board` is not a graph node.
    pub fn value(
        &mut self,
        board: &CanonicalBoard,
        perspective: Player,
    ) -> Result<PerspectiveValue> {
        if let Some(&value) = self.cache.get(&(*board, perspective)) {
            return Ok(value);
        }

        let graph = Arc::clone(&self.graph);
        let children = graph.successors(board).ok_or_else(|| Error::UnknownBoard {
            board: board.encode(),
        })?;

        let value = match terminal_value(board, perspective) {
            Some(value) => value,
            None => {
                let mut child_values = Vec::with_capacity(children.len());
                for child in children {
                    child_values.push(self.value(child, perspective)?);
                }
                fold(board, perspective, child_values)?
            }
        };

        self.cache.insert((*board, perspective), value);
        Ok(value)
    }

    /// Fill the cache for every node and both perspectives, bottom-up.
    ///
    /// Levels are processed from full boards down to the empty board. A node
    /// only depends on the level above it, which is finalized by then, so each
    /// level is evaluated in parallel against a read-only cache.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsolvedSuccessor`] if a successor was not finalized
    /// before its parent's level.
    pub fn solve_all(&mut self) -> Result<()> {
        let graph = Arc::clone(&self.graph);

        for level in (0..=CELL_COUNT).rev() {
            let layer: Vec<_> = graph.nodes_at_level(level).collect();
            let cache = &self.cache;

            let solved = layer
                .par_iter()
                .flat_map_iter(|&(board, node)| {
                    Player::BOTH
                        .into_iter()
                        .map(move |perspective| solve_from_cache(board, node, perspective, cache))
                })
                .collect::<Result<Vec<_>>>()?;

            debug!(level, solved = solved.len(), "solved level");
            self.cache.extend(solved);
        }

        debug!(cached = self.cache.len(), "solved every node");
        Ok(())
    }
}

/// Evaluate one node against a cache that already holds its successors
fn solve_from_cache(
    board: &CanonicalBoard,
    node: &GraphNode,
    perspective: Player,
    cache: &HashMap<CacheKey, PerspectiveValue>,
) -> Result<(CacheKey, PerspectiveValue)> {
    let value = match terminal_value(board, perspective) {
        Some(value) => value,
        None => {
            let child_values = node
                .children
                .iter()
                .map(|child| {
                    cache
                        .get(&(*child, perspective))
                        .copied()
                        .ok_or_else(|| Error::UnsolvedSuccessor {
                            board: child.encode(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            fold(board, perspective, child_values)?
        }
    };
    Ok(((*board, perspective), value))
}

/// Value of a finished game, or `None` while moves remain.
///
/// The perspective player's own line is checked first.
pub fn terminal_value(board: &CanonicalBoard, perspective: Player) -> Option<PerspectiveValue> {
    if board.has_won(perspective) {
        Some(PerspectiveValue::Win)
    } else if board.has_won(perspective.opponent()) {
        Some(PerspectiveValue::Loss)
    } else if board.is_terminal() {
        Some(PerspectiveValue::Draw)
    } else {
        None
    }
}

/// Combine successor values: the mover maximizes its own outcome, the
/// opponent minimizes it.
fn fold(
    board: &CanonicalBoard,
    perspective: Player,
    child_values: Vec<PerspectiveValue>,
) -> Result<PerspectiveValue> {
    let mover = board.to_move()?;
    let best = if mover == perspective {
        child_values.into_iter().max()
    } else {
        child_values.into_iter().min()
    };

    Ok(best.unwrap_or_else(|| {
        warn!(
            board = %board.encode(),
            "non-terminal board has no successors; scoring as draw"
        );
        PerspectiveValue::Draw
    }))
}
