//! Material plus centrality evaluation.
//!
//! Scores are always from White's point of view: positive favors White,
//! negative favors Black.

use chess_core::{BoardCell, Color, GameState};

use crate::error::SearchError;

/// A position score in pawn units.
pub type Score = f64;

/// Material value per piece letter. Kings carry no material.
const PIECE_VALUES: [(char, Score); 6] = [
    ('p', 1.0),
    ('n', 2.9),
    ('b', 3.0),
    ('r', 5.0),
    ('q', 9.0),
    ('k', 0.0),
];

/// Bonus for standing on central and advanced cells, indexed by display row
/// (row 0 at the top) for White and by the mirrored row for Black.
const POSITION_VALUES: [[Score; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.2, 0.5, 0.6, 0.7, 0.8, 0.7, 0.5, 0.2],
    [0.1, 0.5, 0.6, 0.7, 0.8, 0.7, 0.5, 0.1],
    [0.0, 0.4, 0.5, 0.7, 0.7, 0.5, 0.4, 0.0],
    [0.0, 0.4, 0.5, 0.7, 0.7, 0.5, 0.4, 0.0],
    [0.0, 0.4, 0.5, 0.5, 0.5, 0.5, 0.4, 0.0],
    [0.0, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

/// The two components of [`evaluate`], kept apart for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalTerms {
    /// Piece values, positive for White and negative for Black.
    pub material: Score,
    /// Sum of centrality bonuses for both sides.
    pub positional: Score,
}

impl EvalTerms {
    pub fn total(&self) -> Score {
        self.material + self.positional
    }
}

/// Material value of the piece written as `symbol`.
pub fn piece_value(symbol: char) -> Result<Score, SearchError> {
    PIECE_VALUES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, v)| *v)
        .ok_or(SearchError::UnknownPieceKind(symbol))
}

/// Centrality bonus for a piece of `color` on display cell `row`/`col`.
///
/// Black reads the table upside down. The bonus is added for both colors
/// and is never negated for Black, so it always pushes the total up.
pub fn positional_bonus(row: usize, col: usize, color: Color) -> Score {
    match color {
        Color::White => POSITION_VALUES[row][col],
        Color::Black => POSITION_VALUES[7 - row][col],
    }
}

/// Signed material and unsigned positional bonus for one occupied cell.
fn cell_terms(row: usize, col: usize, cell: BoardCell) -> Result<(Score, Score), SearchError> {
    let value = piece_value(cell.symbol)?;
    let signed = match cell.color {
        Color::White => value,
        Color::Black => -value,
    };
    Ok((signed, positional_bonus(row, col, cell.color)))
}

fn occupied<S: GameState + ?Sized>(pos: &S) -> impl Iterator<Item = (usize, usize, BoardCell)> + '_ {
    (0..8).flat_map(move |row| (0..8).filter_map(move |col| pos.cell(row, col).map(|c| (row, col, c))))
}

/// Evaluates the current piece placement.
///
/// Pure: depends on nothing but the cells of `pos`.
///
/// # Errors
/// [`SearchError::UnknownPieceKind`] if any cell holds a letter outside
/// `p n b r q k`.
pub fn evaluate<S: GameState + ?Sized>(pos: &S) -> Result<Score, SearchError> {
    let mut total = 0.0;
    for (row, col, cell) in occupied(pos) {
        let (material, bonus) = cell_terms(row, col, cell)?;
        total += material + bonus;
    }
    Ok(total)
}

/// Same walk as [`evaluate`], with material and positional sums split out.
pub fn evaluate_terms<S: GameState + ?Sized>(pos: &S) -> Result<EvalTerms, SearchError> {
    let mut terms = EvalTerms {
        material: 0.0,
        positional: 0.0,
    };
    for (row, col, cell) in occupied(pos) {
        let (material, bonus) = cell_terms(row, col, cell)?;
        terms.material += material;
        terms.positional += bonus;
    }
    Ok(terms)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
