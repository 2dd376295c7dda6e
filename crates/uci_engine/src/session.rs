//! One UCI conversation: the current position plus the engine that plays it.
//!
//! Commands are handled one line at a time and `go` searches synchronously,
//! so nothing else is read while the engine thinks.

use std::io::Write;

use chess_core::{move_to_uci, set_position_from_uci, Position};
use minimax_engine::{EngineConfig, MinimaxEngine};
use tracing::{debug, error, warn};

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 8;

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    pos: Position,
    engine: MinimaxEngine,
}

impl Session {
    pub fn new(mut config: EngineConfig) -> Self {
        config.depth = config.depth.clamp(MIN_DEPTH, MAX_DEPTH);
        Self {
            pos: Position::startpos(),
            engine: MinimaxEngine::new(config),
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn depth(&self) -> u8 {
        self.engine.config().depth
    }

    /// Handles one input line, writing any reply to `out`.
    ///
    /// Malformed commands are logged and ignored; only write failures are
    /// returned as errors.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> std::io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min {MIN_DEPTH} max {MAX_DEPTH}",
                    self.depth()
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "ucinewgame" => self.pos = Position::startpos(),
            "position" => {
                if let Err(e) = set_position_from_uci(&mut self.pos, args) {
                    warn!(error = %e, "ignoring position command");
                }
            }
            "go" => self.go(args, out)?,
            "d" => writeln!(out, "{}", self.pos.to_fen())?,
            "quit" => return Ok(Flow::Quit),
            other => debug!(command = other, "unknown command"),
        }
        Ok(Flow::Continue)
    }

    /// `setoption name Depth value N`
    fn set_option(&mut self, args: &[&str]) {
        let name = args
            .iter()
            .skip_while(|&&a| a != "name")
            .nth(1)
            .copied();
        let value = args
            .iter()
            .skip_while(|&&a| a != "value")
            .nth(1)
            .and_then(|v| v.parse::<u8>().ok());

        match (name, value) {
            (Some(n), Some(d)) if n.eq_ignore_ascii_case("depth") => {
                self.engine.set_depth(d.clamp(MIN_DEPTH, MAX_DEPTH));
            }
            _ => warn!(?args, "unsupported setoption"),
        }
    }

    /// Fixed-depth search. Time controls are ignored; `depth N` overrides
    /// the configured depth for this search only.
    fn go(&mut self, args: &[&str], out: &mut impl Write) -> std::io::Result<()> {
        let configured = self.depth();
        let override_depth = args
            .iter()
            .skip_while(|&&a| a != "depth")
            .nth(1)
            .and_then(|v| v.parse::<u8>().ok());
        if let Some(d) = override_depth {
            self.engine.set_depth(d.clamp(MIN_DEPTH, MAX_DEPTH));
        }

        let best = match self.engine.select_move(&mut self.pos) {
            Ok(mv) => mv,
            Err(e) => {
                error!(error = %e, "search failed");
                None
            }
        };
        self.engine.set_depth(configured);

        match best {
            Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv)),
            None => writeln!(out, "bestmove 0000"),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
