use crate::board::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Position};
use crate::types::*;

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Legal moves of `pos` in a new vector.
///
/// Legality is checked by playing each candidate, so this works on a scratch
/// copy of the mailbox and leaves `pos` borrowed immutably.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Moves come out in square order (a1..h8), then per-piece direction order,
/// so the sequence is stable for a given position.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

/// Whether the side to move has any legal move, stopping at the first one.
pub fn has_legal_move(pos: &mut Position) -> bool {
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(pos, &mut pseudo);
    let mover = pos.side_to_move;
    pseudo.into_iter().any(|mv| {
        let undo = pos.make_move(mv);
        let legal = !pos.in_check(mover);
        pos.unmake_move(mv, undo);
        legal
    })
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    for from in 0..64u8 {
        let Some(pc) = pos.piece_at(from).filter(|p| p.color == us) else {
            continue;
        };
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, us, out),
            PieceKind::Knight => gen_rays(pos, from, &KNIGHT_DELTAS, 1, out),
            PieceKind::Bishop => gen_rays(pos, from, &DIAGONALS, 7, out),
            PieceKind::Rook => gen_rays(pos, from, &ORTHOGONALS, 7, out),
            PieceKind::Queen => {
                gen_rays(pos, from, &DIAGONALS, 7, out);
                gen_rays(pos, from, &ORTHOGONALS, 7, out);
            }
            PieceKind::King => {
                gen_rays(pos, from, &KING_DELTAS, 1, out);
                gen_castle(pos, from, us, out);
            }
        }
    }
}

/// Pushes a pawn move, expanded into the four promotions on the last rank.
fn push_pawn_move(from: u8, to: u8, us: Color, out: &mut Vec<Move>) {
    if rank_of(to) != us.promotion_rank() {
        out.push(Move::new(from, to));
        return;
    }
    out.extend(PROMOTIONS.map(|kind| Move::promotion(from, to, kind)));
}

fn gen_pawn(pos: &Position, from: u8, us: Color, out: &mut Vec<Move>) {
    let (file, rank, dir) = (file_of(from), rank_of(from), us.forward());

    if let Some(one) = sq(file, rank + dir)
        && pos.piece_at(one).is_none()
    {
        push_pawn_move(from, one, us, out);

        if rank == us.pawn_rank()
            && let Some(two) = sq(file, rank + 2 * dir)
            && pos.piece_at(two).is_none()
        {
            out.push(Move::new(from, two));
        }
    }

    for to in [file - 1, file + 1].into_iter().filter_map(|f| sq(f, rank + dir)) {
        match pos.piece_at(to) {
            Some(victim) if victim.color != us => push_pawn_move(from, to, us, out),
            None if pos.en_passant == Some(to) => out.push(Move::en_passant(from, to)),
            _ => {}
        }
    }
}

/// Walks each direction up to `reach` squares, stopping at the first piece
/// and including it when it belongs to the opponent. Knights and kings use
/// a reach of 1.
fn gen_rays(pos: &Position, from: u8, dirs: &[(i8, i8)], reach: i8, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    for &(df, dr) in dirs {
        for step in 1..=reach {
            let Some(to) = sq(file_of(from) + df * step, rank_of(from) + dr * step) else {
                break;
            };
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != us {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}

/// One castling option: the right that allows it, the king's destination,
/// squares that must be empty and squares the king crosses.
struct CastleRoute {
    allowed: bool,
    king_to: u8,
    empty: &'static [u8],
    crossed: [u8; 2],
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let (king_home, routes) = match c {
        Color::White => (
            4u8,
            [
                CastleRoute {
                    allowed: pos.castling.wk,
                    king_to: 6,
                    empty: &[5, 6],
                    crossed: [5, 6],
                },
                CastleRoute {
                    allowed: pos.castling.wq,
                    king_to: 2,
                    empty: &[3, 2, 1],
                    crossed: [3, 2],
                },
            ],
        ),
        Color::Black => (
            60u8,
            [
                CastleRoute {
                    allowed: pos.castling.bk,
                    king_to: 62,
                    empty: &[61, 62],
                    crossed: [61, 62],
                },
                CastleRoute {
                    allowed: pos.castling.bq,
                    king_to: 58,
                    empty: &[59, 58, 57],
                    crossed: [59, 58],
                },
            ],
        ),
    };
    // Can't castle out of check either.
    if from != king_home || pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    for route in routes {
        if route.allowed
            && route.empty.iter().all(|&s| pos.piece_at(s).is_none())
            && route
                .crossed
                .iter()
                .all(|&s| !pos.is_square_attacked(s, enemy))
        {
            out.push(Move::castle(from, route.king_to));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
