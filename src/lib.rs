//! Provably optimal Tic-Tac-Toe
//!
//! This crate provides:
//! - Board rules and D4 symmetry canonicalization
//! - The complete symmetry-reduced game graph, layered by level
//! - A memoized minimax solver keyed by (board, perspective)
//! - Deterministic best-move selection for arbitrary boards
//! - JSON export of the graph for visualization front ends

pub mod cli;
pub mod error;
pub mod export;
pub mod oracle;
pub mod tictactoe;

pub use error::{Error, Result};
pub use oracle::{MinimaxSolver, MoveChoice, MoveSelector, PerspectiveValue, RatedMove};
pub use tictactoe::{Board, CanonicalBoard, Cell, GameGraph, Player};
