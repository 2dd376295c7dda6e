//! Random playouts through the `GameState` surface: every apply paired
//! with an undo must restore the exact starting state.

use chess_core::{GameState, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn test_random_playouts_unwind_to_start() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let start = Position::startpos();
        let mut pos = start.clone();
        let mut applied = 0;

        for _ in 0..60 {
            if pos.is_terminal() {
                break;
            }
            let moves = pos.legal_moves();
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            pos.apply_move(mv);
            applied += 1;
        }

        assert_eq!(pos.played_moves().count(), applied);
        for _ in 0..applied {
            pos.undo_last_move();
        }
        assert_eq!(pos, start);
    }
}

#[test]
fn test_legal_moves_does_not_disturb_state() {
    let mut pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    let before = pos.clone();
    let first = pos.legal_moves();
    assert!(!pos.is_terminal());
    assert_eq!(pos.legal_moves(), first);
    assert_eq!(pos, before);
}
