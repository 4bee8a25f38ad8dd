//! D4 symmetry group operations for board canonicalization

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, CELL_COUNT, Cell};

/// Gather tables for the eight D4 elements: `image[i] = cells[PERMUTATIONS[k][i]]`.
///
/// Index `k = 2 * (rotation / 90) + reflection`, rotations counter-clockwise,
/// reflection (left-right mirror) applied after the rotation.
const PERMUTATIONS: [[usize; CELL_COUNT]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    [2, 1, 0, 5, 4, 3, 8, 7, 6],
    [2, 5, 8, 1, 4, 7, 0, 3, 6],
    [8, 5, 2, 7, 4, 1, 6, 3, 0],
    [8, 7, 6, 5, 4, 3, 2, 1, 0],
    [6, 7, 8, 3, 4, 5, 0, 1, 2],
    [6, 3, 0, 7, 4, 1, 8, 5, 2],
    [0, 3, 6, 1, 4, 7, 2, 5, 8],
];

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Counter-clockwise rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to mirror left-right after rotating
    pub reflection: bool,
}

impl D4Transform {
    /// All 8 D4 transforms, identity first
    pub const ALL: [D4Transform; 8] = [
        D4Transform::new(0, false),
        D4Transform::new(0, true),
        D4Transform::new(90, false),
        D4Transform::new(90, true),
        D4Transform::new(180, false),
        D4Transform::new(180, true),
        D4Transform::new(270, false),
        D4Transform::new(270, true),
    ];

    const fn new(rotation: u16, reflection: bool) -> Self {
        D4Transform {
            rotation,
            reflection,
        }
    }

    /// Create identity transform
    pub const fn identity() -> Self {
        Self::new(0, false)
    }

    fn permutation(&self) -> &'static [usize; CELL_COUNT] {
        let index = 2 * usize::from(self.rotation / 90 % 4) + usize::from(self.reflection);
        &PERMUTATIONS[index]
    }

    /// Apply transform to an array of cells
    pub fn apply_to_cells(&self, cells: &[Cell; CELL_COUNT]) -> [Cell; CELL_COUNT] {
        let perm = self.permutation();
        std::array::from_fn(|i| cells[perm[i]])
    }
}

impl fmt::Display for D4Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotate {}°", self.rotation)?;
        if self.reflection {
            write!(f, ", mirror")?;
        }
        Ok(())
    }
}

/// A board in canonical form: the lexicographically smallest of its 8 images.
///
/// Only obtainable through [`Board::canonical`], so holding one is proof that
/// the reduction happened.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CanonicalBoard(Board);

impl CanonicalBoard {
    pub fn board(&self) -> &Board {
        &self.0
    }

    pub fn into_board(self) -> Board {
        self.0
    }
}

impl std::ops::Deref for CanonicalBoard {
    type Target = Board;

    fn deref(&self) -> &Board {
        &self.0
    }
}

impl fmt::Display for CanonicalBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Canonical board together with the transform that produced it
#[derive(Debug, Clone, Copy)]
pub struct CanonicalContext {
    pub state: CanonicalBoard,
    pub transform: D4Transform,
}

impl Board {
    /// All 8 symmetry images, in [`D4Transform::ALL`] order
    pub fn images(&self) -> [Board; 8] {
        D4Transform::ALL.map(|t| self.transform(&t))
    }

    /// Get the canonical (lexicographically minimal) form under D4 symmetry
    pub fn canonical(&self) -> CanonicalBoard {
        self.canonical_context().state
    }

    /// Canonical form plus the first transform (in [`D4Transform::ALL`] order) reaching it
    pub fn canonical_context(&self) -> CanonicalContext {
        let mut best = *self;
        let mut best_transform = D4Transform::identity();

        for transform in D4Transform::ALL.iter().skip(1) {
            let image = self.transform(transform);
            if image < best {
                best = image;
                best_transform = *transform;
            }
        }

        CanonicalContext {
            state: CanonicalBoard(best),
            transform: best_transform,
        }
    }

    /// Whether this board already is its own canonical form
    pub fn is_canonical(&self) -> bool {
        self.canonical().board() == self
    }
}
