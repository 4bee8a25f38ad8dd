//! Game-theoretic value of a board for a named player

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome a perspective player can force under optimal play by both sides
///
/// Ordered `Loss < Draw < Win`, so the maximizing and minimizing folds of
/// minimax are plain `max`/`min`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PerspectiveValue {
    Loss,
    Draw,
    Win,
}

impl PerspectiveValue {
    /// Numeric form: 0.0, 0.5 or 1.0
    pub fn as_f64(self) -> f64 {
        match self {
            PerspectiveValue::Loss => 0.0,
            PerspectiveValue::Draw => 0.5,
            PerspectiveValue::Win => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerspectiveValue::Loss => "forced loss",
            PerspectiveValue::Draw => "forced draw",
            PerspectiveValue::Win => "forced win",
        }
    }
}

impl fmt::Display for PerspectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.as_f64(), self.label())
    }
}
