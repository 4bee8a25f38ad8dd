//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, symmetry::D4Transform};
use crate::{Error, Result};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A cell on the Tic-Tac-Toe board
///
/// The declaration order fixes the total order `Empty < X < O` used for
/// lexicographic board comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Integer code used by the comma-separated wire format
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::X),
            2 => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game. X always opens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players, X first
    pub const BOTH: [Player; 2] = [Player::X, Player::O];

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        self.into()
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// Nine cells in row-major order
///
/// Boards compare lexicographically over the flattened cells. The player to
/// move is not stored: it follows from the piece counts (see [`Board::to_move`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    pub fn piece_counts(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Number of occupied cells (0-9)
    pub fn level(&self) -> usize {
        CELL_COUNT - self.piece_counts().empty
    }

    /// Player to move under alternating play with X opening.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPieceCounts`] when X does not equal O or lead it by one.
    pub fn to_move(&self) -> Result<Player> {
        let count = self.piece_counts();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Whether the piece counts are reachable by alternating play
    pub fn has_valid_counts(&self) -> bool {
        self.to_move().is_ok()
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a player's mark and return the new board
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Result<Board> {
        if pos >= CELL_COUNT || !self.is_empty(pos) {
            return Err(Error::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = player.to_cell();
        Ok(next)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one.
    ///
    /// Boards where both players hold a line are not reachable in play; X is
    /// reported for them.
    pub fn winner(&self) -> Option<Player> {
        Player::BOTH.into_iter().find(|&p| self.has_won(p))
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        Board::from_cells(t.apply_to_cells(&self.cells))
    }

    /// Comma-separated integer encoding, e.g. `0,0,1,0,2,0,0,0,0`
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.code().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Compact row-separated rendering, e.g. `X.. / .O. / ...`
    pub fn compact(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse the wire format: nine comma-separated integers in {0, 1, 2}.
    /// Whitespace around tokens is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split(',').map(str::trim).collect();
        if tokens.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: tokens.len(),
                input: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (position, token) in tokens.into_iter().enumerate() {
            cells[position] = token
                .parse::<u8>()
                .ok()
                .and_then(Cell::from_code)
                .ok_or_else(|| Error::InvalidCellToken {
                    token: token.to_string(),
                    position,
                    input: s.to_string(),
                })?;
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
