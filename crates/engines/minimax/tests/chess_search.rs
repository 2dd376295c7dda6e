//! Move selection on real chess positions.

use chess_core::{legal_moves, move_to_uci, GameState, Position};
use minimax_engine::{search_root, select_move, Pruning};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid test FEN")
}

fn best_uci(fen: &str, depth: u8) -> Option<String> {
    let mut p = pos(fen);
    select_move(&mut p, depth).unwrap().map(move_to_uci)
}

#[test]
fn test_white_takes_hanging_queen() {
    let fen = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1";
    assert_eq!(best_uci(fen, 1).as_deref(), Some("d1d5"));
    assert_eq!(best_uci(fen, 2).as_deref(), Some("d1d5"));
}

#[test]
fn test_black_takes_hanging_queen() {
    let fen = "3rk3/8/8/8/3Q4/8/8/4K3 b - - 0 1";
    assert_eq!(best_uci(fen, 1).as_deref(), Some("d8d4"));
    assert_eq!(best_uci(fen, 2).as_deref(), Some("d8d4"));
}

#[test]
fn test_avoids_losing_the_queen_at_depth_two() {
    // Qxa7 grabs a pawn but the rook on a8 takes the queen back.
    let fen = "r3k3/p7/8/8/8/8/8/Q3K3 w - - 0 1";
    let mv = best_uci(fen, 2).unwrap();
    assert_ne!(mv, "a1a7");
    assert_eq!(best_uci(fen, 1).as_deref(), Some("a1a7"));
}

#[test]
fn test_no_move_when_game_is_over() {
    // Checkmated and stalemated sides both get `None`.
    assert_eq!(
        best_uci("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4", 3),
        None
    );
    assert_eq!(best_uci("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", 3), None);
}

#[test]
fn test_selected_move_is_legal() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ] {
        let mut p = pos(fen);
        let mv = select_move(&mut p, 2).unwrap().expect("position has moves");
        assert!(legal_moves(&p).contains(&mv), "{fen}: {mv:?} is not legal");
    }
}

#[test]
fn test_search_leaves_position_unchanged() {
    let mut p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = p.clone();
    let moves_before = p.legal_moves();

    select_move(&mut p, 3).unwrap();

    assert_eq!(p, before);
    assert_eq!(p.legal_moves(), moves_before);
    assert_eq!(GameState::side_to_move(&p), GameState::side_to_move(&before));
}

#[test]
fn test_repeated_calls_agree() {
    let mut p = Position::startpos();
    let first = select_move(&mut p, 3).unwrap();
    let second = select_move(&mut p, 3).unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_alpha_beta_visits_fewer_nodes() {
    let mut p = Position::startpos();
    let pruned = search_root(&mut p, 3, Pruning::AlphaBeta).unwrap();
    let plain = search_root(&mut p, 3, Pruning::Disabled).unwrap();

    assert_eq!(pruned.best_move, plain.best_move);
    assert!(pruned.nodes < plain.nodes);
    // 1 + 20 + 400 + 8902
    assert_eq!(plain.nodes, 9_323);
}
