//! Minimax oracle over the symmetry-reduced game graph

pub mod selector;
pub mod solver;
pub mod value;

pub use selector::{MoveChoice, MoveSelector, RatedMove};
pub use solver::{MinimaxSolver, terminal_value};
pub use value::PerspectiveValue;
