use std::collections::BTreeSet;

use tictactoe_oracle::tictactoe::{
    Board, CANONICAL_NODE_COUNT, CELL_COUNT, Cell, GameGraph, Player, RAW_BOARD_COUNT,
    REACHABLE_NODE_COUNT,
};

fn enumerate_boards() -> Vec<Board> {
    let mut boards = Vec::with_capacity(3usize.pow(9));
    for index in 0..3usize.pow(9) {
        let mut n = index;
        let mut cells = [Cell::Empty; CELL_COUNT];
        for slot in (0..CELL_COUNT).rev() {
            cells[slot] = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                2 => Cell::O,
                _ => unreachable!(),
            };
            n /= 3;
        }
        boards.push(Board::from_cells(cells));
    }
    boards
}

#[test]
fn verify_state_space_counts() {
    const TURN_VALID_STATES: usize = 6_046;
    const CANONICAL_CLASSES: usize = 2_862;

    let boards = enumerate_boards();
    assert_eq!(boards.len(), RAW_BOARD_COUNT);

    let turn_valid = boards.iter().filter(|b| b.has_valid_counts()).count();
    assert_eq!(turn_valid, TURN_VALID_STATES);

    let classes: BTreeSet<_> = boards.iter().map(|b| b.canonical()).collect();
    assert_eq!(classes.len(), CANONICAL_CLASSES);

    let valid_classes = classes.iter().filter(|b| b.has_valid_counts()).count();
    assert_eq!(valid_classes, CANONICAL_NODE_COUNT);
}

#[test]
fn verify_reachable_counts_from_empty_board() {
    const EXPECTED_PER_LEVEL: [usize; 10] = [1, 3, 12, 38, 108, 174, 204, 153, 57, 15];
    const CANONICAL_TERMINALS: usize = 138;
    const CANONICAL_X_WINS: usize = 91;
    const CANONICAL_O_WINS: usize = 44;
    const CANONICAL_DRAWS: usize = 3;

    let graph = GameGraph::build().expect("graph builds");
    let root = GameGraph::root();
    let mut reachable = graph.descendants(&root);
    reachable.insert(root);
    assert_eq!(reachable.len(), REACHABLE_NODE_COUNT);

    let mut per_level = [0usize; 10];
    for board in &reachable {
        per_level[board.level()] += 1;
    }
    assert_eq!(per_level, EXPECTED_PER_LEVEL);

    let terminals: Vec<_> = reachable.iter().filter(|b| b.is_terminal()).collect();
    assert_eq!(terminals.len(), CANONICAL_TERMINALS);

    let x_wins = terminals
        .iter()
        .filter(|b| b.winner() == Some(Player::X))
        .count();
    let o_wins = terminals
        .iter()
        .filter(|b| b.winner() == Some(Player::O))
        .count();
    let draws = terminals.iter().filter(|b| b.is_draw()).count();

    assert_eq!(x_wins, CANONICAL_X_WINS);
    assert_eq!(o_wins, CANONICAL_O_WINS);
    assert_eq!(draws, CANONICAL_DRAWS);

    // No reachable board has two winners
    assert!(
        reachable
            .iter()
            .all(|b| !(b.has_won(Player::X) && b.has_won(Player::O)))
    );
}
