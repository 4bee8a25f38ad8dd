use tictactoe_oracle::{
    Error,
    tictactoe::{
        Board, CANONICAL_NODE_COUNT, EDGE_COUNT, GameGraph, LEVEL_HISTOGRAM,
        MAX_CANONICAL_CHILDREN,
    },
};

#[test]
fn graph_size_is_a_fixed_constant() {
    let graph = GameGraph::build().unwrap();
    assert_eq!(graph.len(), CANONICAL_NODE_COUNT);
    assert_eq!(graph.edge_count(), EDGE_COUNT);
    assert_eq!(graph.level_histogram(), LEVEL_HISTOGRAM);
    assert_eq!(graph.edges().count(), EDGE_COUNT);
}

#[test]
fn every_edge_climbs_exactly_one_level() {
    let graph = GameGraph::build().unwrap();
    for (source, target) in graph.edges() {
        let source_level = graph.level(source).unwrap();
        let target_level = graph.level(target).expect("edge target is a node");
        assert_eq!(
            target_level,
            source_level + 1,
            "edge {} -> {} skips a level",
            source.encode(),
            target.encode()
        );
    }
}

#[test]
fn node_levels_match_filled_cells() {
    let graph = GameGraph::build().unwrap();
    for (board, node) in graph.nodes() {
        assert_eq!(node.level, board.level());
        assert!(board.is_canonical());
        assert!(board.has_valid_counts());
    }
}

#[test]
fn non_terminal_nodes_have_one_to_seven_children() {
    let graph = GameGraph::build().unwrap();
    for (board, node) in graph.nodes() {
        if board.is_terminal() {
            assert!(node.children.is_empty(), "{} is terminal", board.encode());
        } else {
            assert!(!node.children.is_empty());
            assert!(node.children.len() <= MAX_CANONICAL_CHILDREN);
        }
    }
}

#[test]
fn graph_includes_moves_for_every_legal_placement() {
    let graph = GameGraph::build().unwrap();

    for (board, node) in graph.nodes() {
        if board.is_terminal() {
            continue;
        }
        let mover = board.to_move().unwrap();
        for pos in board.empty_positions() {
            let next = board.place(pos, mover).unwrap().canonical();
            assert!(
                node.children.contains(&next),
                "missing move from {} at position {pos}",
                board.encode()
            );
        }
    }
}

#[test]
fn drill_down_subgraph_is_closed_under_successors() {
    let graph = GameGraph::build().unwrap();
    let corner: Board = "1,0,0,0,2,0,0,0,0".parse().unwrap();
    let sub = graph.subgraph(&corner.canonical()).unwrap();

    for (_, target) in sub.edges() {
        assert!(sub.contains(target));
    }
    assert_eq!(sub.level_histogram()[..2], [0, 0]);
    assert_eq!(sub.level_histogram()[2], 1);
}

#[test]
fn unbalanced_root_is_not_a_node() {
    let graph = GameGraph::build().unwrap();
    let unbalanced: Board = "2,2,0,0,0,0,0,0,0".parse().unwrap();
    let err = graph.subgraph(&unbalanced.canonical()).unwrap_err();
    assert!(matches!(err, Error::UnknownBoard { .. }));
}
