pub mod board;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use movegen::*;
pub use perft::perft;
pub use rules::Outcome;
pub use types::*;
pub use uci::*;

// =============================================================================
// GameState: the rules surface that game-tree searchers drive
// =============================================================================

/// Contents of one occupied board cell as seen by an evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell {
    /// Lowercase piece letter (`p`, `n`, `b`, `r`, `q`, `k` for chess).
    pub symbol: char,
    pub color: Color,
}

/// A mutable, reversible game position.
///
/// Searchers never copy a state. They walk the tree by pairing every
/// `apply_move` with exactly one `undo_last_move`, so the state handed to a
/// search is unchanged once it returns. Methods that may need to play moves
/// internally (legality filtering, mate detection) take `&mut self`.
pub trait GameState {
    /// Opaque move token produced by `legal_moves`.
    type Move: Copy + PartialEq + std::fmt::Debug;

    /// Legal moves for the side to move, in a stable order for a given state.
    fn legal_moves(&mut self) -> Vec<Self::Move>;

    fn apply_move(&mut self, mv: Self::Move);

    /// Reverts the most recent `apply_move`.
    fn undo_last_move(&mut self);

    /// Whether the game is over (no continuation, or a drawn/decided state).
    fn is_terminal(&mut self) -> bool;

    fn side_to_move(&self) -> Color;

    /// Piece on the cell at `row`/`col`, where row 0 is the top row as the
    /// board is displayed (rank 8 in chess) and row 7 the bottom.
    fn cell(&self, row: usize, col: usize) -> Option<BoardCell>;
}
