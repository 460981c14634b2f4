use std::time::Instant;

use rayon::prelude::*;

use chess_core::{perft, perft_divide, Position, STARTING_FEN};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 50_000;

/// Reference positions with published node counts per depth.
const CASES: &[(&str, &[(u8, u64)])] = &[
    (STARTING_FEN, &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)]),
    (
        // Kiwipete
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        // En-passant and discovered checks along the fourth rank
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    ),
    (
        // Promotions, captures into promotion, castling rights lost by capture
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[(1, 6), (2, 264), (3, 9_467)],
    ),
    (
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[(1, 44), (2, 1_486)],
    ),
];

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().enumerate().for_each(|(idx, (fen, depths))| {
        let mut ran_depths = Vec::new();
        let mut total_nodes: u64 = 0;
        let case_start = Instant::now();

        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for case {} (expected {} nodes) - set {}=1 to run all.",
                    depth,
                    idx + 1,
                    expected,
                    FULL_PERFT_ENV
                );
                continue;
            }
            let mut pos = Position::from_fen(fen).unwrap();
            let got = perft(&mut pos, depth);
            assert!(
                got == expected,
                "Perft mismatch for FEN '{}' at depth {}: expected {}, got {}",
                fen,
                depth,
                expected,
                got
            );

            ran_depths.push(depth);
            total_nodes += got;
        }

        if !ran_depths.is_empty() {
            println!(
                "Case {:03} done: depths {:?}, total nodes {}, elapsed {:.3?}",
                idx + 1,
                ran_depths,
                total_nodes,
                case_start.elapsed()
            );
        }
    });
}

#[test]
fn perft_divide_sums_to_perft() {
    let mut pos = Position::new_game();
    let divide = perft_divide(&mut pos, 3);
    assert_eq!(divide.len(), 20);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8_902);
    assert_eq!(
        divide.iter().find(|(m, _)| m == "e2e4").map(|(_, n)| *n),
        Some(600)
    );
}

#[test]
fn perft_divide_matches_perft_at_shallow_depths() {
    let mut pos = Position::new_game();
    assert!(perft_divide(&mut pos, 0).is_empty());
    assert_eq!(perft(&mut pos, 0), 1);

    let divide = perft_divide(&mut pos, 1);
    assert!(divide.iter().all(|(_, n)| *n == 1));
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), perft(&mut pos, 1));
}

#[test]
fn perft_leaves_position_intact() {
    let mut pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .unwrap();
    let board = pos.board;
    let castling = pos.castling;
    perft(&mut pos, 2);
    assert_eq!(pos.board, board);
    assert_eq!(pos.castling, castling);
    assert!(pos.history.is_empty());
    assert_eq!(pos.castling_history.len(), 1);
    assert_eq!(pos.en_passant_history.len(), 1);
}
