use crate::{
    board::Position,
    error::{ChessError, ChessResult},
    types::*,
};

/// Two-square coordinate notation for a move, e.g. `e2e3`.
pub fn algebraic_notation(mv: &Move) -> String {
    mv.notation()
}

/// Coordinate notation with a trailing promotion letter when the move
/// promotes, e.g. `a7a8n`.
pub fn long_notation(mv: &Move) -> String {
    let mut s = mv.notation();
    if mv.is_promotion {
        s.push(mv.promotion.letter().to_ascii_lowercase());
    }
    s
}

pub fn parse_square(text: &str) -> ChessResult<Square> {
    Square::parse(text).ok_or_else(|| ChessError::InvalidSquare(text.to_string()))
}

/// Matches coordinate text such as `e2e4` or `e7e8n` against the legal moves
/// of `pos`. Matching goes through move equality, so flags come from the
/// generated move; a fifth character picks the promotion piece.
pub fn find_legal_move(pos: &mut Position, text: &str) -> ChessResult<Move> {
    let text = text.trim();
    if text.len() < 4 || text.len() > 5 || !text.is_ascii() {
        return Err(ChessError::IllegalMove(text.to_string()));
    }
    let from = parse_square(&text[0..2])?;
    let to = parse_square(&text[2..4])?;
    let promo = match text[4..].chars().next() {
        Some(c) => Some(
            PieceKind::from_letter(c)
                .filter(|k| PieceKind::PROMOTIONS.contains(k))
                .ok_or_else(|| ChessError::IllegalMove(text.to_string()))?,
        ),
        None => None,
    };

    let wanted = Move::new(from, to, pos).ok_or_else(|| ChessError::IllegalMove(text.to_string()))?;
    let legal = pos.legal_moves();
    // A promotion letter only makes sense on a move that promotes.
    let found = legal
        .iter()
        .find(|m| {
            **m == wanted
                && match promo {
                    Some(k) => m.is_promotion && m.promotion == k,
                    None => true,
                }
        })
        .copied();
    found.ok_or_else(|| ChessError::IllegalMove(text.to_string()))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
