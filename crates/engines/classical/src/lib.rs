//! Classical Chess Engine
//!
//! Negamax with alpha-beta pruning over a material and piece-square
//! evaluation, with an optional capture-only quiescence search at the
//! leaves. This is the strongest built-in opponent for self-play.

mod eval;
mod ordering;
mod search;

use chess_core::{Engine, Position, SearchResult};

pub use eval::{evaluate, piece_value, pst, MATE_SCORE};
pub use ordering::{move_order_score, order_moves};
pub use search::{best_move, find_best_move, SearchConfig, Searcher, INFINITY};

/// Classical chess engine using negamax with alpha-beta pruning.
///
/// This engine uses:
/// - Negamax search with alpha-beta pruning
/// - Material plus piece-square evaluation
/// - Static move ordering (captures and positional gains first)
/// - Capture-only quiescence search at the leaves
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    searcher: Searcher,
}

impl ClassicalEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.searcher.config
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.searcher.config.depth = depth;
        let mut tmp = pos.clone();

        let found = self.searcher.find_best_move(&mut tmp).ok();

        SearchResult {
            best_move: found.map(|(mv, _)| mv),
            score: found.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.searcher.nodes(),
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }
}
