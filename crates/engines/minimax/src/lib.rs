//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over any [`GameState`], scored
//! by a material plus centrality evaluation from White's point of view.
//!
//! The engine never copies positions. It applies and undoes moves on the
//! handle it is given, so a caller must not touch that position while a
//! search runs; the `&mut` borrow enforces this.

mod config;
mod error;
mod eval;
mod search;

use chess_core::GameState;
use tracing::{info, warn};

pub use config::{EngineConfig, DEFAULT_DEPTH};
pub use error::{ConfigError, SearchError};
pub use eval::{evaluate, evaluate_terms, piece_value, positional_bonus, EvalTerms, Score};
pub use search::{
    search, search_root, select_move, Objective, Pruning, SearchOutcome, Window, SCORE_SENTINEL,
};

/// Minimax engine configured with a fixed depth.
///
/// Holds no state between searches apart from the node count of the last
/// one, so repeated calls on an unchanged position give the same move.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: EngineConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(EngineConfig {
            depth,
            ..EngineConfig::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns the engine's name for UCI identification
    pub fn name(&self) -> &str {
        "Minimax v1.0"
    }

    /// Returns the engine's author for UCI identification
    pub fn author(&self) -> &str {
        "starter-chess"
    }

    /// Searches `pos` at the configured depth and pruning mode.
    pub fn search<S: GameState + ?Sized>(
        &mut self,
        pos: &mut S,
    ) -> Result<SearchOutcome<S::Move>, SearchError> {
        self.nodes = 0;
        let outcome = search_root(pos, self.config.depth, self.config.pruning)?;
        self.nodes = outcome.nodes;
        Ok(outcome)
    }

    /// Best move for the side to move, or `None` if there is no legal move.
    pub fn select_move<S: GameState + ?Sized>(
        &mut self,
        pos: &mut S,
    ) -> Result<Option<S::Move>, SearchError> {
        Ok(self.search(pos)?.mv())
    }

    /// Selects a move and plays it on `pos`.
    ///
    /// Returns the move played, or `None` (leaving `pos` untouched) when the
    /// game is over for the side to move.
    pub fn play_move<S: GameState + ?Sized>(
        &mut self,
        pos: &mut S,
    ) -> Result<Option<S::Move>, SearchError> {
        let outcome = self.search(pos)?;
        match outcome.best_move {
            Some((mv, score)) => {
                pos.apply_move(mv);
                info!(?mv, score, nodes = outcome.nodes, "engine move");
                Ok(Some(mv))
            }
            None => {
                warn!("game over or no legal moves");
                Ok(None)
            }
        }
    }
}
