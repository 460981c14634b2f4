use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &mut Position, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        legal_moves_into(pos, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter() {
            pos.make_move(mv);
            nodes += inner(pos, depth - 1, rest);
            pos.undo_move();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}

/// Per-root-move node counts, sorted by coordinate notation. Handy for
/// pinning down generator bugs against a reference engine. Depth 0 has no
/// root moves to split on and yields an empty list.
pub fn perft_divide(pos: &mut Position, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    let mut out: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            pos.make_move(mv);
            let n = perft(pos, depth - 1);
            pos.undo_move();
            (crate::notation::long_notation(mv), n)
        })
        .collect();
    out.sort();
    out
}
