//! Best-move selection for arbitrary boards

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::{MinimaxSolver, PerspectiveValue};
use crate::{
    Error, Result,
    tictactoe::{Board, CanonicalBoard, GameGraph, Player},
};

/// A successor of the queried position together with its value for the mover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatedMove {
    pub successor: CanonicalBoard,
    pub value: PerspectiveValue,
}

/// The move chosen for a raw board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveChoice {
    /// Canonical form of the queried board
    pub canonical: CanonicalBoard,
    /// Player to move
    pub mover: Player,
    /// Chosen canonical successor
    pub successor: CanonicalBoard,
    /// Value of the successor for the mover
    pub value: PerspectiveValue,
    /// Cell to play in the queried board's own orientation
    pub position: usize,
}

/// Picks optimal successors, breaking ties by the smallest canonical board
#[derive(Debug, Clone)]
pub struct MoveSelector {
    solver: MinimaxSolver,
}

impl MoveSelector {
    pub fn new(graph: Arc<GameGraph>) -> Self {
        Self::with_solver(MinimaxSolver::new(graph))
    }

    pub fn with_solver(solver: MinimaxSolver) -> Self {
        Self { solver }
    }

    pub fn graph(&self) -> &Arc<GameGraph> {
        self.solver.graph()
    }

    pub fn solver(&self) -> &MinimaxSolver {
        &self.solver
    }

    pub fn solver_mut(&mut self) -> &mut MinimaxSolver {
        &mut self.solver
    }

    /// Best canonical successor of `raw`, or `None` on a terminal board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPieceCounts`] when no player to move can be
    /// derived from `raw`.
    pub fn best_move(&mut self, raw: &Board) -> Result<Option<CanonicalBoard>> {
        Ok(self.choose(raw)?.map(|choice| choice.successor))
    }

    /// Like [`best_move`](Self::best_move), with the value and the cell to play.
    pub fn choose(&mut self, raw: &Board) -> Result<Option<MoveChoice>> {
        let canonical = raw.canonical();
        let mover = canonical.to_move()?;

        let Some(best) = self.rate_canonical(&canonical, mover)?.into_iter().next() else {
            debug!(board = %raw.encode(), "terminal board; no move");
            return Ok(None);
        };

        let position = position_in_raw(raw, mover, &best.successor)?;
        debug!(
            board = %raw.encode(),
            successor = %best.successor.encode(),
            value = best.value.as_f64(),
            position,
            "selected move"
        );

        Ok(Some(MoveChoice {
            canonical,
            mover,
            successor: best.successor,
            value: best.value,
            position,
        }))
    }

    /// Every successor of `raw` with its value for the mover, best first.
    ///
    /// Ties are ordered by ascending canonical board, so the first entry is
    /// the move [`best_move`](Self::best_move) returns.
    pub fn rate_moves(&mut self, raw: &Board) -> Result<Vec<RatedMove>> {
        let canonical = raw.canonical();
        let mover = canonical.to_move()?;
        self.rate_canonical(&canonical, mover)
    }

    fn rate_canonical(
        &mut self,
        canonical: &CanonicalBoard,
        mover: Player,
    ) -> Result<Vec<RatedMove>> {
        let graph = Arc::clone(self.solver.graph());
        let successors = graph
            .successors(canonical)
            .ok_or_else(|| Error::UnknownBoard {
                board: canonical.encode(),
            })?;

        let mut rated = Vec::with_capacity(successors.len());
        for successor in successors {
            rated.push(RatedMove {
                successor: *successor,
                value: self.solver.value(successor, mover)?,
            });
        }
        rated.sort_by(|a, b| b.value.cmp(&a.value).then(a.successor.cmp(&b.successor)));
        Ok(rated)
    }
}

/// Lowest empty cell of `raw` whose move lands on `successor` after canonicalization
fn position_in_raw(raw: &Board, mover: Player, successor: &CanonicalBoard) -> Result<usize> {
    for pos in raw.empty_positions() {
        if raw.place(pos, mover)?.canonical() == *successor {
            return Ok(pos);
        }
    }
    Err(Error::UnknownBoard {
        board: successor.encode(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn selector() -> MoveSelector {
        MoveSelector::new(Arc::new(GameGraph::build().unwrap()))
    }

    #[test]
    fn empty_board_opens_in_a_corner_for_a_draw() {
        let mut selector = selector();
        let choice = selector.choose(&Board::new()).unwrap().unwrap();

        assert_eq!(choice.canonical, GameGraph::root());
        assert_eq!(choice.mover, Player::X);
        assert_eq!(choice.successor.level(), 1);
        assert_eq!(choice.successor, board("0,0,0,0,0,0,0,0,1").canonical());
        assert_eq!(choice.value, PerspectiveValue::Draw);
        assert_eq!(choice.position, 0);
    }

    #[test]
    fn takes_the_winning_cell() {
        // XX.
        // OO.
        // ...
        let raw = board("1,1,0,2,2,0,0,0,0");
        let mut selector = selector();
        let choice = selector.choose(&raw).unwrap().unwrap();

        assert_eq!(choice.value, PerspectiveValue::Win);
        assert_eq!(choice.position, 2);
        assert_eq!(
            choice.successor,
            board("1,1,1,2,2,0,0,0,0").canonical()
        );
    }

    #[test]
    fn blocks_an_open_line() {
        // XX.
        // .O.
        // ...   O to move
        let raw = board("1,1,0,0,2,0,0,0,0");
        let mut selector = selector();
        let choice = selector.choose(&raw).unwrap().unwrap();

        assert_eq!(choice.mover, Player::O);
        assert_eq!(choice.position, 2);
        assert_eq!(choice.value, PerspectiveValue::Draw);
    }

    #[test]
    fn terminal_board_has_no_move() {
        let mut selector = selector();
        assert_eq!(selector.best_move(&board("1,1,1,2,2,0,0,0,0")).unwrap(), None);
        assert_eq!(selector.best_move(&board("1,2,1,1,2,2,2,1,1")).unwrap(), None);
    }

    #[test]
    fn unbalanced_board_is_rejected() {
        let mut selector = selector();
        let err = selector.best_move(&board("1,1,1,0,0,0,0,0,0")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPieceCounts {
                x_count: 3,
                o_count: 0
            }
        ));
    }

    #[test]
    fn ratings_are_best_first_with_ties_by_board() {
        let mut selector = selector();
        let ratings = selector.rate_moves(&Board::new()).unwrap();
        assert_eq!(ratings.len(), 3);
        assert!(ratings.iter().all(|r| r.value == PerspectiveValue::Draw));
        assert!(ratings.windows(2).all(|w| w[0].successor < w[1].successor));

        let best = selector.best_move(&Board::new()).unwrap();
        assert_eq!(best, Some(ratings[0].successor));
    }

    #[test]
    fn symmetric_inputs_choose_the_same_successor() {
        let mut selector = selector();
        let a = selector.best_move(&board("1,0,0,0,2,0,0,0,0")).unwrap();
        let b = selector.best_move(&board("0,0,0,0,2,0,0,0,1")).unwrap();
        assert_eq!(a, b);
    }
}
