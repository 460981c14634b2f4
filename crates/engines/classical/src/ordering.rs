//! Static move ordering. Scores are only used to sort; they never feed
//! back into the evaluation.

use std::cmp::Reverse;

use chess_core::{Move, Piece, PieceKind};

use crate::eval::{piece_score, pst};

/// Cheap estimate of how much `mv` gains: the moving piece's piece-square
/// delta, the full value of whatever it captures and, for promotions, the
/// material gained over the pawn.
pub fn move_order_score(mv: &Move) -> i32 {
    let color = mv.moved.color;
    let mut score = if mv.is_promotion {
        piece_score(Piece::new(color, mv.promotion), mv.to) - piece_score(mv.moved, mv.from)
    } else {
        pst(color, mv.moved.kind, mv.to) - pst(color, mv.moved.kind, mv.from)
    };

    if let Some(cap) = mv.captured {
        let at = if mv.is_en_passant {
            mv.en_passant_victim()
        } else {
            mv.to
        };
        score += piece_score(cap, at);
    }
    score
}

/// Sorts best-first. Ties keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| Reverse(move_order_score(mv)));
}

/// Drops the under-promotion variants; the search only plays queens.
pub fn queen_promotions_only(moves: &mut Vec<Move>) {
    moves.retain(|mv| !mv.is_promotion || mv.promotion == PieceKind::Queen);
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
