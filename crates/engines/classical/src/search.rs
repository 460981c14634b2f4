//! Negamax search with alpha-beta pruning and an optional capture-only
//! quiescence extension.

use serde::{Deserialize, Serialize};
use tracing::debug;

use chess_core::{legal_moves_into, ChessError, ChessResult, Move, Position};

use crate::eval::{evaluate, MATE_SCORE};
use crate::ordering::{order_moves, queen_promotions_only};

/// Outer bound of the alpha-beta window, well clear of any mate score.
pub const INFINITY: i32 = 1_000_000;

/// Fixed-depth search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Full-width depth in plies.
    pub depth: u8,
    /// Resolve captures at the leaves instead of evaluating statically.
    pub quiescence: bool,
    /// Ply budget for the capture search below the leaves.
    pub quiescence_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            quiescence: true,
            quiescence_depth: 4,
        }
    }
}

/// Runs searches with one configuration and counts visited nodes.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    pub config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    /// Nodes visited by the last `find_best_move`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the best move for the side to move at `config.depth`.
    ///
    /// Fails with `ChessError::NoLegalMoves` on a finished game. The
    /// position is searched in place and handed back exactly as it came in,
    /// terminal flags included.
    pub fn find_best_move(&mut self, pos: &mut Position) -> ChessResult<(Move, i32)> {
        self.nodes = 0;
        let flags = (pos.is_checkmate, pos.is_stalemate);
        let result = self.search_root(pos);
        pos.is_checkmate = flags.0;
        pos.is_stalemate = flags.1;
        result
    }

    fn search_root(&mut self, pos: &mut Position) -> ChessResult<(Move, i32)> {
        let depth = self.config.depth.max(1);

        let mut moves = Vec::with_capacity(64);
        legal_moves_into(pos, &mut moves);
        if moves.is_empty() {
            return Err(ChessError::NoLegalMoves);
        }
        queen_promotions_only(&mut moves);
        order_moves(&mut moves);

        let mut best = moves[0];
        let mut best_score = -INFINITY;
        let mut alpha = -INFINITY;
        let beta = INFINITY;

        for mv in moves {
            pos.make_move(&mv);
            self.nodes += 1;
            let score = -self.negamax(pos, -beta, -alpha, depth - 1);
            pos.undo_move();

            debug!(mv = %mv, score, "root move");

            if score > best_score {
                best_score = score;
                best = mv;
            }
            if score > alpha {
                alpha = score;
            }
        }

        debug!(
            best = %best,
            score = best_score,
            depth,
            nodes = self.nodes,
            "search finished"
        );
        Ok((best, best_score))
    }

    /// Score of `pos` for the side to move, `depth` plies deep.
    ///
    /// Mates found closer to the root score higher, so the shortest mate
    /// wins and the longest defence is preferred.
    pub fn negamax(&mut self, pos: &mut Position, mut alpha: i32, beta: i32, depth: u8) -> i32 {
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(pos, &mut moves);

        if moves.is_empty() {
            return if pos.is_checkmate {
                -(MATE_SCORE + depth as i32)
            } else {
                0
            };
        }

        if depth == 0 {
            return if self.config.quiescence {
                self.quiescence(pos, alpha, beta, self.config.quiescence_depth)
            } else {
                evaluate(pos)
            };
        }

        queen_promotions_only(&mut moves);
        order_moves(&mut moves);

        let mut best = -INFINITY;
        for mv in moves {
            pos.make_move(&mv);
            self.nodes += 1;
            let score = -self.negamax(pos, -beta, -alpha, depth - 1);
            pos.undo_move();

            if score > best {
                best = score;
            }
            if score >= beta {
                return score; // Beta cutoff
            }
            if score > alpha {
                alpha = score;
            }
        }
        best
    }

    /// Capture-only search below the horizon. The static score is a lower
    /// bound since the side to move may decline every capture.
    pub fn quiescence(&mut self, pos: &mut Position, mut alpha: i32, beta: i32, depth: u8) -> i32 {
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(pos, &mut moves);

        let stand_pat = evaluate(pos);
        if moves.is_empty() {
            return stand_pat;
        }
        if stand_pat >= beta {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }
        if depth == 0 {
            return alpha;
        }

        moves.retain(|mv| mv.is_capture());
        queen_promotions_only(&mut moves);
        order_moves(&mut moves);

        for mv in moves {
            pos.make_move(&mv);
            self.nodes += 1;
            let score = -self.quiescence(pos, -beta, -alpha, depth - 1);
            pos.undo_move();

            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}

/// Best move and its score at a fixed depth with the default settings
/// otherwise.
pub fn find_best_move(pos: &mut Position, depth: u8) -> ChessResult<(Move, i32)> {
    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    Searcher::new(config).find_best_move(pos)
}

/// Synchronous fixed-depth move choice for callers that only want the move.
pub fn best_move(pos: &mut Position, depth: u8) -> ChessResult<Move> {
    find_best_move(pos, depth).map(|(mv, _)| mv)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
