use std::path::PathBuf;

use chess_core::ChessError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelfPlayError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid game record: {0}")]
    Record(#[from] serde_json::Error),

    #[error("unknown engine '{0}' (expected classical or random)")]
    UnknownEngine(String),

    #[error("{engine} returned no move with {legal} legal moves available")]
    NoMoveReturned { engine: String, legal: usize },

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Chess(#[from] ChessError),
}

pub type SelfPlayResult<T> = Result<T, SelfPlayError>;
