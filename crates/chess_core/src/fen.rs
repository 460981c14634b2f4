use crate::{
    board::{CastlingRights, Position},
    error::FenError,
    types::*,
};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Forsyth-Edwards Notation parser used by tests and the command line.
    /// Move clocks are accepted but not tracked.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let mut pos = Position::empty();

        // FEN lists rank 8 first, which is row 0 here.
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        let mut kings = [false; 2];
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as u8;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_letter(ch).ok_or(FenError::PieceChar(ch))?;
                    if col >= 8 {
                        return Err(FenError::RankWidth { rank: 8 - row });
                    }
                    pos.put(Square::at(row as u8, col), Piece::new(color, kind));
                    if kind == PieceKind::King {
                        kings[color.idx()] = true;
                    }
                    col += 1;
                }
                if col > 8 {
                    return Err(FenError::RankWidth { rank: 8 - row });
                }
            }
            if col != 8 {
                return Err(FenError::RankWidth { rank: 8 - row });
            }
        }
        if !kings[Color::White.idx()] {
            return Err(FenError::MissingKing("white"));
        }
        if !kings[Color::Black.idx()] {
            return Err(FenError::MissingKing("black"));
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wks = true,
                    'Q' => castling.wqs = true,
                    'k' => castling.bks = true,
                    'q' => castling.bqs = true,
                    _ => return Err(FenError::CastlingChar(c)),
                }
            }
        }
        pos.set_castling(castling);

        let en_passant = if parts[3] == "-" {
            None
        } else {
            let bad = || FenError::EnPassant(parts[3].to_string());
            let target = Square::parse(parts[3]).ok_or_else(bad)?;
            if !en_passant_consistent(&pos, target) {
                return Err(bad());
            }
            Some(target)
        };
        pos.set_en_passant(en_passant);

        Ok(pos)
    }
}

/// The target must be the square an enemy pawn just skipped: on the third
/// rank from the enemy side, empty along with the square it left, and the
/// pawn standing right past it.
fn en_passant_consistent(pos: &Position, target: Square) -> bool {
    let us = pos.side_to_move;
    let them = us.other();
    // Rows step the way the enemy pawn moved.
    let step = them.forward();
    if target.row() as i8 != them.pawn_row() as i8 + step {
        return false;
    }
    let (Some(origin), Some(landed)) = (target.offset(-step, 0), target.offset(step, 0)) else {
        return false;
    };
    pos.piece_at(target).is_none()
        && pos.piece_at(origin).is_none()
        && pos.piece_at(landed) == Some(Piece::new(them, PieceKind::Pawn))
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
