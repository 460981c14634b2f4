pub mod board;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use fen::STARTING_FEN;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use types::*;

/// Fresh game: standard setup, white to move, all castling rights.
pub fn new_game() -> Position {
    Position::new_game()
}

// =============================================================================
// Engine trait: implemented by the search engines (classical, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the side to move's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// Searching is synchronous and works on a private copy of the position, so
/// the caller's game state (including its checkmate/stalemate flags) is left
/// untouched.
pub trait Engine: Send {
    /// Search the position to a fixed depth.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `depth` - Search depth in plies
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
