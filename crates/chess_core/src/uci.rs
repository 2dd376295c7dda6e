use thiserror::Error;

use crate::board::{FenError, Position};
use crate::movegen::legal_moves;
use crate::types::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UciError {
    #[error("expected `startpos` or `fen` after `position`")]
    MissingSetup,
    #[error(transparent)]
    Fen(#[from] FenError),
    #[error("illegal or malformed move `{0}`")]
    IllegalMove(String),
}

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.symbol());
    }
    s
}

/// Resolves long algebraic text (`e2e4`, `e7e8q`) against the legal moves of
/// `pos`, so castle and en-passant flags come out right. A promotion without
/// a piece letter promotes to a queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        Some(ch) => Some(PieceKind::from_symbol(ch)?),
        None => None,
    };

    legal_moves(pos).into_iter().find(|m| {
        m.from == from
            && m.to == to
            && match m.promo {
                Some(kind) => kind == promo.unwrap_or(PieceKind::Queen),
                None => promo.is_none(),
            }
    })
}

/// Applies the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
///
/// `pos` is left untouched on error.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), UciError> {
    let moves_at = args.iter().position(|&a| a == "moves").unwrap_or(args.len());
    let mut next = match args.first() {
        Some(&"startpos") => Position::startpos(),
        Some(&"fen") => Position::from_fen(&args[1..moves_at].join(" "))?,
        _ => return Err(UciError::MissingSetup),
    };

    for txt in args.iter().skip(moves_at + 1) {
        let mv = parse_uci_move(&next, txt).ok_or_else(|| UciError::IllegalMove(txt.to_string()))?;
        next.push_move(mv);
    }
    *pos = next;
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
