//! Symmetry-reduced game graph over every canonical board
//!
//! Nodes are the canonical boards whose piece counts are reachable by
//! alternating play (X equal to O or one ahead). Edges link each non-terminal
//! node to the distinct canonical boards one move away. Every edge raises the
//! level (occupied cell count) by exactly one, so the graph is a DAG layered
//! by level.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use super::{
    CanonicalBoard,
    board::{Board, CELL_COUNT, Cell},
};
use crate::{Error, Result};

/// Distinct raw boards: every cell independently empty, X or O
pub const RAW_BOARD_COUNT: usize = 19_683;

/// Canonical boards with X equal to O or one ahead
pub const CANONICAL_NODE_COUNT: usize = 850;

/// Canonical single-move transitions out of non-terminal nodes
pub const EDGE_COUNT: usize = 2_096;

/// Canonical boards reachable from the empty board through the edges
pub const REACHABLE_NODE_COUNT: usize = 765;

/// Node count per level 0..=9
pub const LEVEL_HISTOGRAM: [usize; CELL_COUNT + 1] = [1, 3, 12, 38, 108, 174, 228, 174, 89, 23];

/// Upper bound on distinct canonical children of one board
pub const MAX_CANONICAL_CHILDREN: usize = 7;

/// A node of the game graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// Number of occupied cells
    pub level: usize,
    /// Canonical successors in ascending board order; empty for terminal boards
    pub children: Vec<CanonicalBoard>,
}

/// Immutable game graph, built once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct GameGraph {
    nodes: BTreeMap<CanonicalBoard, GraphNode>,
}

impl GameGraph {
    /// Enumerate all raw boards, reduce them by symmetry and link successors.
    ///
    /// # Errors
    ///
    /// Fails with a builder defect ([`Error::is_builder_defect`]) when a board
    /// yields zero or more than [`MAX_CANONICAL_CHILDREN`] canonical children,
    /// or when the node count differs from [`CANONICAL_NODE_COUNT`].
    pub fn build() -> Result<Self> {
        let canonical: BTreeSet<CanonicalBoard> =
            raw_boards().map(|board| board.canonical()).collect();
        debug!(
            classes = canonical.len(),
            "reduced raw boards to symmetry classes"
        );

        let mut nodes = BTreeMap::new();
        for board in canonical.into_iter().filter(|b| b.has_valid_counts()) {
            let children = if board.is_terminal() {
                Vec::new()
            } else {
                canonical_children(&board)?
            };
            nodes.insert(
                board,
                GraphNode {
                    level: board.level(),
                    children,
                },
            );
        }

        if nodes.len() != CANONICAL_NODE_COUNT {
            return Err(Error::UnexpectedNodeCount {
                expected: CANONICAL_NODE_COUNT,
                got: nodes.len(),
            });
        }

        let graph = GameGraph { nodes };
        info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "built game graph"
        );
        Ok(graph)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.children.len()).sum()
    }

    pub fn contains(&self, board: &CanonicalBoard) -> bool {
        self.nodes.contains_key(board)
    }

    /// The empty board, the single initial node
    pub fn root() -> CanonicalBoard {
        Board::new().canonical()
    }

    pub fn node(&self, board: &CanonicalBoard) -> Option<&GraphNode> {
        self.nodes.get(board)
    }

    pub fn level(&self, board: &CanonicalBoard) -> Option<usize> {
        self.node(board).map(|node| node.level)
    }

    /// Direct successors, or `None` when the board is not a node
    pub fn successors(&self, board: &CanonicalBoard) -> Option<&[CanonicalBoard]> {
        self.node(board).map(|node| node.children.as_slice())
    }

    /// Nodes in ascending board order
    pub fn nodes(&self) -> impl Iterator<Item = (&CanonicalBoard, &GraphNode)> {
        self.nodes.iter()
    }

    /// Edges as (source, target) pairs
    pub fn edges(&self) -> impl Iterator<Item = (&CanonicalBoard, &CanonicalBoard)> {
        self.nodes
            .iter()
            .flat_map(|(source, node)| node.children.iter().map(move |target| (source, target)))
    }

    pub fn nodes_at_level(
        &self,
        level: usize,
    ) -> impl Iterator<Item = (&CanonicalBoard, &GraphNode)> {
        self.nodes.iter().filter(move |(_, node)| node.level == level)
    }

    /// Node count per level 0..=9
    pub fn level_histogram(&self) -> [usize; CELL_COUNT + 1] {
        let mut histogram = [0; CELL_COUNT + 1];
        for node in self.nodes.values() {
            histogram[node.level] += 1;
        }
        histogram
    }

    /// Every node reachable from `board` through one or more edges
    pub fn descendants(&self, board: &CanonicalBoard) -> BTreeSet<CanonicalBoard> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<CanonicalBoard> =
            self.successors(board).map(<[_]>::to_vec).unwrap_or_default();

        while let Some(next) = stack.pop() {
            if !seen.insert(next) {
                continue;
            }
            if let Some(children) = self.successors(&next) {
                stack.extend(children.iter().filter(|c| !seen.contains(*c)));
            }
        }

        seen
    }

    /// The drill-down view: `board` plus its descendants, with their edges
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBoard`] when `board` is not a node.
    pub fn subgraph(&self, board: &CanonicalBoard) -> Result<GameGraph> {
        let root = self.node(board).ok_or_else(|| Error::UnknownBoard {
            board: board.encode(),
        })?;

        let mut nodes = BTreeMap::new();
        nodes.insert(*board, root.clone());
        for descendant in self.descendants(board) {
            if let Some(node) = self.node(&descendant) {
                nodes.insert(descendant, node.clone());
            }
        }

        Ok(GameGraph { nodes })
    }
}

/// All 3^9 raw boards, in base-3 counting order
fn raw_boards() -> impl Iterator<Item = Board> {
    (0..RAW_BOARD_COUNT).map(|index| {
        let mut n = index;
        let mut cells = [Cell::Empty; CELL_COUNT];
        for slot in (0..CELL_COUNT).rev() {
            cells[slot] = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            n /= 3;
        }
        Board::from_cells(cells)
    })
}

/// Distinct canonical boards one move away from a non-terminal board
fn canonical_children(board: &CanonicalBoard) -> Result<Vec<CanonicalBoard>> {
    let mover = board.to_move()?;
    let mut children = BTreeSet::new();
    for pos in board.empty_positions() {
        children.insert(board.place(pos, mover)?.canonical());
    }

    if children.is_empty() {
        return Err(Error::NoCanonicalChildren {
            board: board.encode(),
        });
    }
    if children.len() > MAX_CANONICAL_CHILDREN {
        return Err(Error::TooManyCanonicalChildren {
            board: board.encode(),
            count: children.len(),
        });
    }

    Ok(children.into_iter().collect())
}
