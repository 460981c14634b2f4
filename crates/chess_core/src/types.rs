use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a single pawn push. Row 0 is the eighth rank.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    pub fn promotion_row(self) -> u8 {
        self.other().back_row()
    }
    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Promotion targets, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.letter())
    }
}

/// A board square. Row 0 is the eighth rank, column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Builds a square from coordinates known to be on the board.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square off the board");
        Self { row, col }
    }

    pub fn new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::new(self.row as i8 + dr, self.col as i8 + dc)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// Coordinate name such as `e2`.
    pub fn name(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{file}{rank}")
    }

    pub fn parse(text: &str) -> Option<Self> {
        let b = text.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Self {
            row: b'8' - r,
            col: f - b'a',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// One ply, recorded with everything needed to take it back.
///
/// Equality and hashing only look at the two squares: at most one move
/// connects an ordered pair of squares in a position, except for the four
/// promotion variants, which are deliberately interchangeable when matching
/// a from/to gesture against the legal set.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promotion: PieceKind,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl Move {
    /// Builds the move from `from` to `to` as it would be played in `pos`,
    /// inferring castling, en passant and promotion from the position.
    /// Returns `None` when `from` is empty.
    pub fn new(from: Square, to: Square, pos: &Position) -> Option<Self> {
        let moved = pos.piece_at(from)?;
        let mv = Self::quiet_or_capture(from, to, moved, pos.piece_at(to));
        let mv = match moved.kind {
            PieceKind::King if from.col().abs_diff(to.col()) == 2 && from.row() == to.row() => {
                mv.castling()
            }
            PieceKind::Pawn
                if from.col() != to.col()
                    && mv.captured.is_none()
                    && pos.en_passant == Some(to) =>
            {
                mv.en_passant()
            }
            _ => mv,
        };
        Some(mv)
    }

    pub(crate) fn quiet_or_capture(
        from: Square,
        to: Square,
        moved: Piece,
        captured: Option<Piece>,
    ) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
            promotion: PieceKind::Queen,
            is_en_passant: false,
            is_castle: false,
            is_promotion: moved.kind == PieceKind::Pawn
                && to.row() == moved.color.promotion_row(),
        }
    }

    pub(crate) fn en_passant(mut self) -> Self {
        self.is_en_passant = true;
        self.captured = Some(Piece::new(self.moved.color.other(), PieceKind::Pawn));
        self
    }

    pub(crate) fn castling(mut self) -> Self {
        self.is_castle = true;
        self
    }

    /// Same move with another promotion piece. Only meaningful when
    /// `is_promotion` is set; pawns and kings are rejected in favour of a queen.
    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion = match kind {
            PieceKind::Pawn | PieceKind::King => PieceKind::Queen,
            k => k,
        };
        self
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Compact key derived from the four coordinates.
    pub fn id(&self) -> u16 {
        self.from.row() as u16 * 1000
            + self.from.col() as u16 * 100
            + self.to.row() as u16 * 10
            + self.to.col() as u16
    }

    /// Square of the pawn removed by an en-passant capture: beside the
    /// origin, on the destination file.
    pub fn en_passant_victim(&self) -> Square {
        Square::at(self.from.row(), self.to.col())
    }

    /// Rook origin and destination for a castling move.
    pub fn castle_rook_squares(&self) -> (Square, Square) {
        let row = self.from.row();
        if self.to.col() > self.from.col() {
            (Square::at(row, 7), Square::at(row, 5))
        } else {
            (Square::at(row, 0), Square::at(row, 3))
        }
    }

    /// Two-square coordinate notation, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
