//! Error types for position setup and move lookup.
//!
//! Applying and undoing moves never fails: the caller is trusted to play
//! moves from the legal set. Errors only arise at the edges, when text has
//! to be turned into a position or a move, or when a search is asked for a
//! move in a finished game.

use thiserror::Error;

/// Problems found while reading a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character '{0}'")]
    PieceChar(char),

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling character '{0}'")]
    CastlingChar(char),

    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),

    #[error("missing {0} king")]
    MissingKing(&'static str),
}

/// Errors surfaced by the core API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The position is checkmate or stalemate, so there is no move to pick.
    #[error("no legal moves: the game is over")]
    NoLegalMoves,

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("'{0}' is not a legal move in this position")]
    IllegalMove(String),

    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),
}

/// Result type alias for core operations
pub type ChessResult<T> = Result<T, ChessError>;
