//! Alpha-beta must pick the same move with the same score as plain minimax.
//!
//! Positions come from seeded random playouts so failures reproduce.

use chess_core::{move_to_uci, GameState, Position};
use minimax_engine::{search_root, Pruning};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_position(rng: &mut StdRng) -> Position {
    let mut pos = Position::startpos();
    for _ in 0..rng.gen_range(0..24) {
        let moves = pos.legal_moves();
        match moves.choose(rng) {
            Some(&mv) if !pos.is_terminal() => pos.apply_move(mv),
            _ => break,
        }
    }
    pos
}

#[test]
fn test_pruned_and_plain_search_agree() {
    let mut rng = StdRng::seed_from_u64(20_241_019);
    for round in 0..8 {
        let mut pos = random_position(&mut rng);
        let before = pos.clone();
        let max_depth = if round < 4 { 3 } else { 2 };

        for depth in 1..=max_depth {
            let pruned = search_root(&mut pos, depth, Pruning::AlphaBeta).unwrap();
            let plain = search_root(&mut pos, depth, Pruning::Disabled).unwrap();

            assert_eq!(
                pruned.best_move,
                plain.best_move,
                "depth {depth} at {} (pruned {:?}, plain {:?})",
                pos.to_fen(),
                pruned.mv().map(move_to_uci),
                plain.mv().map(move_to_uci),
            );
            assert!(pruned.nodes <= plain.nodes);
            assert_eq!(pos, before);
        }
    }
}
