//! Tic-Tac-Toe rules, symmetry reduction and the game graph

pub mod board;
pub mod game_graph;
pub mod lines;
pub mod symmetry;

pub use board::{Board, CELL_COUNT, Cell, PieceCount, Player};
pub use game_graph::{
    CANONICAL_NODE_COUNT, EDGE_COUNT, GameGraph, GraphNode, LEVEL_HISTOGRAM,
    MAX_CANONICAL_CHILDREN, RAW_BOARD_COUNT, REACHABLE_NODE_COUNT,
};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use symmetry::{CanonicalBoard, CanonicalContext, D4Transform};
