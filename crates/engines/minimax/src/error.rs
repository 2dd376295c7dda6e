//! Error types for evaluation, search and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a search.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A board cell holds a piece letter outside the value table.
    #[error("unknown piece kind '{0}' on the board")]
    UnknownPieceKind(char),
}

/// Failures while loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid engine config: {0}")]
    Parse(#[from] toml::de::Error),
}
