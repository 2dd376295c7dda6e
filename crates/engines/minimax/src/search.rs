//! Fixed-depth minimax with optional alpha-beta pruning.
//!
//! White maximizes and Black minimizes the White-relative score from
//! [`evaluate`]. One routine serves both sides and both pruning modes; the
//! [`Objective`] carries the comparison direction.

use chess_core::{Color, GameState};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::eval::{evaluate, Score};

/// Bound used before any move has been scored. Never a leaf score.
pub const SCORE_SENTINEL: Score = f64::INFINITY;

/// Which way the side to move pushes the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    /// White maximizes, Black minimizes.
    pub fn for_side(side: Color) -> Self {
        match side {
            Color::White => Objective::Maximize,
            Color::Black => Objective::Minimize,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Objective::Maximize => Objective::Minimize,
            Objective::Minimize => Objective::Maximize,
        }
    }

    /// Starting value that any real score improves on.
    pub fn worst(self) -> Score {
        match self {
            Objective::Maximize => -SCORE_SENTINEL,
            Objective::Minimize => SCORE_SENTINEL,
        }
    }

    /// Strict comparison, so ties keep the earlier score.
    pub fn improves(self, candidate: Score, best: Score) -> bool {
        match self {
            Objective::Maximize => candidate > best,
            Objective::Minimize => candidate < best,
        }
    }

    /// Raises alpha (maximizer) or lowers beta (minimizer) to `score`.
    fn tighten(self, window: &mut Window, score: Score) {
        match self {
            Objective::Maximize => window.alpha = window.alpha.max(score),
            Objective::Minimize => window.beta = window.beta.min(score),
        }
    }
}

/// The alpha-beta bounds passed down the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// Best score the maximizer can already guarantee.
    pub alpha: Score,
    /// Best score the minimizer can already guarantee.
    pub beta: Score,
}

impl Window {
    pub fn full() -> Self {
        Self {
            alpha: -SCORE_SENTINEL,
            beta: SCORE_SENTINEL,
        }
    }

    /// No remaining sibling can change the parent's choice.
    pub fn is_closed(&self) -> bool {
        self.beta <= self.alpha
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::full()
    }
}

/// Whether the tree walk cuts off branches that cannot change the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pruning {
    #[default]
    AlphaBeta,
    /// Plain minimax: every branch is walked to full depth.
    Disabled,
}

/// Result of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<M> {
    /// Best move and its score, `None` if there are no legal moves.
    pub best_move: Option<(M, Score)>,
    /// Depth searched in plies.
    pub depth: u8,
    /// Positions visited, root included.
    pub nodes: u64,
}

impl<M: Copy> SearchOutcome<M> {
    pub fn mv(&self) -> Option<M> {
        self.best_move.map(|(mv, _)| mv)
    }

    pub fn score(&self) -> Option<Score> {
        self.best_move.map(|(_, score)| score)
    }
}

/// Scores `pos` by looking `depth` plies ahead.
///
/// `objective` belongs to the side to move in `pos`. Depth 0 and terminal
/// positions are scored statically, as is a position the rules report as
/// ongoing but without legal moves. Every applied move is undone before
/// returning, errors included.
pub fn search<S: GameState + ?Sized>(
    pos: &mut S,
    depth: u8,
    objective: Objective,
    mut window: Window,
    pruning: Pruning,
    nodes: &mut u64,
) -> Result<Score, SearchError> {
    *nodes += 1;

    if depth == 0 || pos.is_terminal() {
        return evaluate(&*pos);
    }

    let moves = pos.legal_moves();
    if moves.is_empty() {
        return evaluate(&*pos);
    }

    let mut best = objective.worst();
    for mv in moves {
        pos.apply_move(mv);
        let score = search(pos, depth - 1, objective.flip(), window, pruning, nodes);
        pos.undo_last_move();
        let score = score?;

        if objective.improves(score, best) {
            best = score;
        }
        if pruning == Pruning::AlphaBeta {
            objective.tighten(&mut window, best);
            if window.is_closed() {
                break;
            }
        }
    }
    Ok(best)
}

/// Searches every root move of `pos` and reports the best one for the side
/// to move.
///
/// Root moves are tried in the order the rules produce them; a later move
/// replaces the current best only if it is strictly better. The window
/// narrowed by earlier root moves is passed to later ones.
pub fn search_root<S: GameState + ?Sized>(
    pos: &mut S,
    depth: u8,
    pruning: Pruning,
) -> Result<SearchOutcome<S::Move>, SearchError> {
    let objective = Objective::for_side(pos.side_to_move());
    let mut nodes = 1;
    let mut window = Window::full();
    let mut best: Option<(S::Move, Score)> = None;

    for mv in pos.legal_moves() {
        pos.apply_move(mv);
        let score = search(
            pos,
            depth.saturating_sub(1),
            objective.flip(),
            window,
            pruning,
            &mut nodes,
        );
        pos.undo_last_move();
        let score = score?;
        trace!(?mv, score, "root move scored");

        let best_score = best.map_or(objective.worst(), |(_, s)| s);
        if objective.improves(score, best_score) {
            best = Some((mv, score));
            if pruning == Pruning::AlphaBeta {
                objective.tighten(&mut window, score);
            }
        }
    }

    debug!(
        depth,
        nodes,
        ?objective,
        best = ?best,
        "search finished"
    );
    Ok(SearchOutcome {
        best_move: best,
        depth,
        nodes,
    })
}

/// Picks the move judged best for the side to move, searching `depth` plies
/// with alpha-beta pruning.
///
/// Returns `Ok(None)` when the side to move has no legal move. `pos` is
/// left exactly as it was passed in.
pub fn select_move<S: GameState + ?Sized>(
    pos: &mut S,
    depth: u8,
) -> Result<Option<S::Move>, SearchError> {
    Ok(search_root(pos, depth, Pruning::AlphaBeta)?.mv())
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
