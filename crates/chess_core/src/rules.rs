//! Game-over detection and the [`GameState`] binding for [`Position`].

use crate::board::Position;
use crate::movegen::{has_legal_move, legal_moves_into};
use crate::types::*;
use crate::{BoardCell, GameState};

/// Why a game has ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move is mated; `winner` delivered the mate.
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl Position {
    /// 100 half-moves without a capture or pawn move.
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    /// Bare kings, a lone minor piece against a bare king, or any number of
    /// bishops that all stand on the same square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut knights = 0;
        let mut bishop_shades = [false; 2];
        for (idx, cell) in self.board.iter().enumerate() {
            let Some(pc) = cell else { continue };
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop => {
                    let s = idx as u8;
                    bishop_shades[((file_of(s) + rank_of(s)) % 2) as usize] = true;
                }
                _ => return false,
            }
        }
        let shades = bishop_shades.iter().filter(|&&seen| seen).count();
        match knights {
            0 => shades <= 1,
            1 => shades == 0,
            _ => false,
        }
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.in_check(self.side_to_move) && !has_legal_move(self)
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check(self.side_to_move) && !has_legal_move(self)
    }

    /// Reports how the game ended, or `None` while it is still in progress.
    pub fn outcome(&mut self) -> Option<Outcome> {
        if !has_legal_move(self) {
            return Some(if self.in_check(self.side_to_move) {
                Outcome::Checkmate {
                    winner: self.side_to_move.other(),
                }
            } else {
                Outcome::Stalemate
            });
        }
        if self.is_fifty_move_draw() {
            return Some(Outcome::FiftyMoveRule);
        }
        if self.is_insufficient_material() {
            return Some(Outcome::InsufficientMaterial);
        }
        if self.is_threefold_repetition() {
            return Some(Outcome::ThreefoldRepetition);
        }
        None
    }
}

impl GameState for Position {
    type Move = Move;

    fn legal_moves(&mut self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        legal_moves_into(self, &mut out);
        out
    }

    fn apply_move(&mut self, mv: Move) {
        self.push_move(mv);
    }

    fn undo_last_move(&mut self) {
        self.pop_move();
    }

    fn is_terminal(&mut self) -> bool {
        self.outcome().is_some()
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn cell(&self, row: usize, col: usize) -> Option<BoardCell> {
        let pc = self.piece_at(sq_from_row_col(row, col)?)?;
        Some(BoardCell {
            symbol: pc.kind.symbol(),
            color: pc.color,
        })
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
