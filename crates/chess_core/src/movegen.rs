use crate::{board::Position, types::*};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];
const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

/// What the generator is collecting.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Pseudo-legal moves.
    Moves,
    /// Squares attacked by the side to move. Pawns report both diagonals,
    /// occupied or not, and never their pushes.
    Attacks,
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Every candidate is played, checked for leaving the mover's king attacked
/// and taken back, so the position is unchanged on return apart from the
/// checkmate and stalemate flags, which describe the side to move.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_legal_moves_into(pos, out);
    castle_moves_into(pos, out);

    let mover = pos.side_to_move;
    out.retain(|mv| {
        let mut probe = pos.probe(mv);
        let illegal = probe.in_check(mover);
        !illegal
    });

    if out.is_empty() {
        let in_check = pos.in_check(mover);
        pos.is_checkmate = in_check;
        pos.is_stalemate = !in_check;
    } else {
        pos.is_checkmate = false;
        pos.is_stalemate = false;
    }
}

/// Moves that follow piece movement rules for the side to move, without
/// checking king safety and without castling.
pub fn pseudo_legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_legal_moves_into(pos, &mut out);
    out
}

pub fn pseudo_legal_moves_into(pos: &Position, out: &mut Vec<Move>) {
    generate(pos, Mode::Moves, out);
}

/// Destination squares of every attack by the side to move. Used by
/// attack detection, never recurses into legality checks.
pub(crate) fn attack_targets_into(pos: &Position, out: &mut Vec<Square>) {
    let mut moves = Vec::with_capacity(64);
    generate(pos, Mode::Attacks, &mut moves);
    out.extend(moves.iter().map(|mv| mv.to));
}

fn generate(pos: &Position, mode: Mode, out: &mut Vec<Move>) {
    for from in Square::all() {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc, mode, out),
            PieceKind::Knight => gen_steps(pos, from, pc, &KNIGHT_OFFSETS, out),
            PieceKind::Bishop => gen_slider(pos, from, pc, &BISHOP_DIRS, out),
            PieceKind::Rook => gen_slider(pos, from, pc, &ROOK_DIRS, out),
            PieceKind::Queen => {
                gen_slider(pos, from, pc, &ROOK_DIRS, out);
                gen_slider(pos, from, pc, &BISHOP_DIRS, out);
            }
            PieceKind::King => gen_steps(pos, from, pc, &KING_OFFSETS, out),
        }
    }
}

/// Pushes the move, expanded into one move per promotion piece when the
/// pawn reaches the far rank.
fn push_pawn_move(mv: Move, out: &mut Vec<Move>) {
    if mv.is_promotion {
        out.extend(PieceKind::PROMOTIONS.iter().map(|&k| mv.with_promotion(k)));
    } else {
        out.push(mv);
    }
}

fn gen_pawn(pos: &Position, from: Square, pc: Piece, mode: Mode, out: &mut Vec<Move>) {
    let dir = pc.color.forward();

    if mode == Mode::Attacks {
        for dc in [-1, 1] {
            if let Some(to) = from.offset(dir, dc) {
                out.push(Move::quiet_or_capture(from, to, pc, pos.piece_at(to)));
            }
        }
        return;
    }

    // forward 1, then 2 from the starting row
    if let Some(to) = from.offset(dir, 0) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(Move::quiet_or_capture(from, to, pc, None), out);

            if from.row() == pc.color.pawn_row() {
                if let Some(to2) = from.offset(2 * dir, 0) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::quiet_or_capture(from, to2, pc, None));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            match pos.piece_at(to) {
                Some(target) if target.color != pc.color => {
                    push_pawn_move(Move::quiet_or_capture(from, to, pc, Some(target)), out);
                }
                None if pos.en_passant == Some(to) => {
                    out.push(Move::quiet_or_capture(from, to, pc, None).en_passant());
                }
                _ => {}
            }
        }
    }
}

fn gen_steps(pos: &Position, from: Square, pc: Piece, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match pos.piece_at(to) {
                None => out.push(Move::quiet_or_capture(from, to, pc, None)),
                Some(t) if t.color != pc.color => {
                    out.push(Move::quiet_or_capture(from, to, pc, Some(t)))
                }
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, pc: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match pos.piece_at(to) {
                None => out.push(Move::quiet_or_capture(from, to, pc, None)),
                Some(t) if t.color != pc.color => {
                    out.push(Move::quiet_or_capture(from, to, pc, Some(t)));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

/// Castling candidates for the side to move. The king may not start on,
/// pass through or land on an attacked square.
pub fn castle_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    let c = pos.side_to_move;
    let row = c.back_row();
    let king_from = Square::at(row, 4);
    let king = Piece::new(c, PieceKind::King);
    let rook = Some(Piece::new(c, PieceKind::Rook));

    if pos.piece_at(king_from) != Some(king) {
        return;
    }
    if !pos.castling.kingside(c) && !pos.castling.queenside(c) {
        return;
    }
    if pos.square_under_attack(king_from) {
        return;
    }

    let empty = |pos: &Position, cols: &[u8]| {
        cols.iter()
            .all(|&col| pos.piece_at(Square::at(row, col)).is_none())
    };

    // King side: e->g, f and g empty and safe
    if pos.castling.kingside(c)
        && pos.piece_at(Square::at(row, 7)) == rook
        && empty(&*pos, &[5, 6])
        && !pos.square_under_attack(Square::at(row, 5))
        && !pos.square_under_attack(Square::at(row, 6))
    {
        out.push(Move::quiet_or_capture(king_from, Square::at(row, 6), king, None).castling());
    }

    // Queen side: e->c, d, c and b empty; d and c safe
    if pos.castling.queenside(c)
        && pos.piece_at(Square::at(row, 0)) == rook
        && empty(&*pos, &[1, 2, 3])
        && !pos.square_under_attack(Square::at(row, 3))
        && !pos.square_under_attack(Square::at(row, 2))
    {
        out.push(Move::quiet_or_capture(king_from, Square::at(row, 2), king, None).castling());
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
