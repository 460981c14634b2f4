use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::movegen::attack_targets_into;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wks: bool,
    pub wqs: bool,
    pub bks: bool,
    pub bqs: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wks: true,
        wqs: true,
        bks: true,
        bqs: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wks: false,
        wqs: false,
        bks: false,
        bqs: false,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wks,
            Color::Black => self.bks,
        }
    }

    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.wqs,
            Color::Black => self.bqs,
        }
    }

    fn revoke_all(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wks = false;
                self.wqs = false;
            }
            Color::Black => {
                self.bks = false;
                self.bqs = false;
            }
        }
    }

    /// Drops the right tied to the rook that starts on `sq`, if any.
    fn revoke_rook(&mut self, c: Color, sq: Square) {
        if sq.row() != c.back_row() {
            return;
        }
        match (c, sq.col()) {
            (Color::White, 0) => self.wqs = false,
            (Color::White, 7) => self.wks = false,
            (Color::Black, 0) => self.bqs = false,
            (Color::Black, 7) => self.bks = false,
            _ => {}
        }
    }
}

/// Mutable game state. Rows run from the eighth rank (row 0) to the first
/// rank (row 7).
#[derive(Clone, Debug)]
pub struct Position {
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub white_king: Square,
    pub black_king: Square,
    pub castling: CastlingRights,
    /// One snapshot per ply plus the initial one; the top always equals
    /// `castling`.
    pub castling_history: Vec<CastlingRights>,
    pub en_passant: Option<Square>,
    /// Same discipline as `castling_history`.
    pub en_passant_history: Vec<Option<Square>>,
    pub history: Vec<Move>,
    /// Only valid right after legal move generation.
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    /// Result of the last public `legal_moves` call with the history
    /// length it was generated at. Backs the membership check in `apply`.
    /// Only `apply` and `undo` drop it; raw make/undo pairs such as a
    /// search leave it in place.
    last_legal: Option<(usize, Vec<Move>)>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Board with no pieces, white to move and no castling rights. King
    /// squares point at the home squares until kings are placed.
    pub fn empty() -> Self {
        Position {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            white_king: Square::at(7, 4),
            black_king: Square::at(0, 4),
            castling: CastlingRights::NONE,
            castling_history: vec![CastlingRights::NONE],
            en_passant: None,
            en_passant_history: vec![None],
            history: Vec::new(),
            is_checkmate: false,
            is_stalemate: false,
            last_legal: None,
        }
    }

    pub fn new_game() -> Self {
        let mut p = Position::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as u8;
            p.put(Square::at(0, col), Piece::new(Color::Black, kind));
            p.put(Square::at(1, col), Piece::new(Color::Black, PieceKind::Pawn));
            p.put(Square::at(6, col), Piece::new(Color::White, PieceKind::Pawn));
            p.put(Square::at(7, col), Piece::new(Color::White, kind));
        }
        p.set_castling(CastlingRights::ALL);
        p
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row() as usize][sq.col() as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row() as usize][sq.col() as usize] = pc;
    }

    /// Places a piece during setup, keeping the king cache in sync.
    pub fn put(&mut self, sq: Square, pc: Piece) {
        self.set_piece(sq, Some(pc));
        if pc.kind == PieceKind::King {
            self.set_king_square(pc.color, sq);
        }
    }

    /// Replaces the rights during setup. Only valid before any move is made.
    pub fn set_castling(&mut self, rights: CastlingRights) {
        self.castling = rights;
        self.castling_history = vec![rights];
    }

    /// Replaces the en-passant target during setup.
    pub fn set_en_passant(&mut self, target: Option<Square>) {
        self.en_passant = target;
        self.en_passant_history = vec![target];
    }

    pub fn king_square(&self, c: Color) -> Square {
        match c {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    fn set_king_square(&mut self, c: Color, sq: Square) {
        match c {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// Legal moves for the side to move. Refreshes the checkmate and
    /// stalemate flags.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        crate::movegen::legal_moves_into(self, &mut out);
        self.last_legal = Some((self.history.len(), out.clone()));
        out
    }

    /// Plays a move taken from the last `legal_moves` result. Legality is
    /// the caller's responsibility; debug builds check membership whenever
    /// the cached set was generated for the current ply.
    pub fn apply(&mut self, mv: &Move) {
        let ply = self.history.len();
        debug_assert!(
            self.last_legal
                .as_ref()
                .filter(|(at, _)| *at == ply)
                .map_or(true, |(_, legal)| legal.contains(mv)),
            "move {mv} is not in the last generated legal set"
        );
        self.last_legal = None;
        self.make_move(mv);
    }

    /// Takes back the most recent move; `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Move> {
        self.last_legal = None;
        self.undo_move()
    }

    pub fn in_check(&mut self, c: Color) -> bool {
        let king = self.king_square(c);
        self.with_side(c).square_under_attack(king)
    }

    /// True when the opponent of the side to move attacks `target`.
    ///
    /// Switches the turn to the opponent, collects what its pieces attack
    /// and switches back before returning.
    pub fn square_under_attack(&mut self, target: Square) -> bool {
        let them = self.side_to_move.other();
        let guard = self.with_side(them);
        let mut targets = Vec::with_capacity(64);
        attack_targets_into(&guard, &mut targets);
        targets.contains(&target)
    }

    /// Temporarily hands the turn to `c`; the previous side is restored when
    /// the guard drops.
    pub fn with_side(&mut self, c: Color) -> SideGuard<'_> {
        let saved = self.side_to_move;
        self.side_to_move = c;
        SideGuard { pos: self, saved }
    }

    /// Plays `mv` until the guard drops, then takes it back.
    pub fn probe(&mut self, mv: &Move) -> MoveProbe<'_> {
        self.make_move(mv);
        MoveProbe { pos: self }
    }

    /// Raw move application used by generation and search.
    pub fn make_move(&mut self, mv: &Move) {
        let color = mv.moved.color;

        self.set_piece(mv.from, None);
        let placed = if mv.is_promotion {
            Piece::new(color, mv.promotion)
        } else {
            mv.moved
        };
        self.set_piece(mv.to, Some(placed));

        if mv.is_en_passant {
            self.set_piece(mv.en_passant_victim(), None);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = mv.castle_rook_squares();
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        if mv.moved.kind == PieceKind::King {
            self.set_king_square(color, mv.to);
        }

        self.en_passant = if mv.moved.kind == PieceKind::Pawn
            && mv.from.row().abs_diff(mv.to.row()) == 2
        {
            Some(Square::at((mv.from.row() + mv.to.row()) / 2, mv.from.col()))
        } else {
            None
        };
        self.en_passant_history.push(self.en_passant);

        match mv.moved.kind {
            PieceKind::King => self.castling.revoke_all(color),
            PieceKind::Rook => self.castling.revoke_rook(color, mv.from),
            _ => {}
        }
        if let Some(cap) = mv.captured {
            if cap.kind == PieceKind::Rook && !mv.is_en_passant {
                self.castling.revoke_rook(cap.color, mv.to);
            }
        }
        self.castling_history.push(self.castling);

        self.history.push(*mv);
        self.side_to_move = color.other();
    }

    /// Exact inverse of `make_move` for the most recent entry in `history`.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        let color = mv.moved.color;

        self.side_to_move = color;
        self.set_piece(mv.from, Some(mv.moved));
        if mv.is_en_passant {
            self.set_piece(mv.to, None);
            self.set_piece(mv.en_passant_victim(), mv.captured);
        } else {
            self.set_piece(mv.to, mv.captured);
        }

        if mv.is_castle {
            let (rook_from, rook_to) = mv.castle_rook_squares();
            let rook = self.piece_at(rook_to);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, rook);
        }

        if mv.moved.kind == PieceKind::King {
            self.set_king_square(color, mv.from);
        }

        self.castling_history.pop();
        if let Some(&prev) = self.castling_history.last() {
            self.castling = prev;
        }
        self.en_passant_history.pop();
        if let Some(&prev) = self.en_passant_history.last() {
            self.en_passant = prev;
        }

        Some(mv)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            let cells: Vec<String> = row
                .iter()
                .map(|pc| pc.map_or_else(|| "--".to_string(), |p| p.to_string()))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

pub struct SideGuard<'a> {
    pos: &'a mut Position,
    saved: Color,
}

impl Deref for SideGuard<'_> {
    type Target = Position;
    fn deref(&self) -> &Position {
        self.pos
    }
}

impl DerefMut for SideGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for SideGuard<'_> {
    fn drop(&mut self) {
        self.pos.side_to_move = self.saved;
    }
}

pub struct MoveProbe<'a> {
    pos: &'a mut Position,
}

impl Deref for MoveProbe<'_> {
    type Target = Position;
    fn deref(&self) -> &Position {
        self.pos
    }
}

impl DerefMut for MoveProbe<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for MoveProbe<'_> {
    fn drop(&mut self) {
        self.pos.undo_move();
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
