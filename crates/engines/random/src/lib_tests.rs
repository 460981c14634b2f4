use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let pos = Position::new_game();

    let result = engine.search(&pos, 1);

    assert!(result.best_move.is_some());

    let mut pos_copy = pos.clone();
    let legal_moves = pos_copy.legal_moves();
    assert!(legal_moves.contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    // Scholar's mate
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    let result = engine.search(&pos, 1);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.search(&pos, 1);

    assert!(result.best_move.is_none());
}

#[test]
fn seeded_engines_agree() {
    let pos = Position::new_game();
    let mut a = RandomEngine::with_seed(7);
    let mut b = RandomEngine::with_seed(7);
    for _ in 0..5 {
        assert_eq!(
            a.search(&pos, 1).best_move.map(|m| m.id()),
            b.search(&pos, 1).best_move.map(|m| m.id())
        );
    }
}

#[test]
fn random_game_keeps_rules_consistent() {
    let mut engine = RandomEngine::with_seed(42);
    let mut pos = Position::new_game();
    for _ in 0..120 {
        let legal = pos.legal_moves();
        if legal.is_empty() {
            break;
        }
        let mv = engine.search(&pos, 1).best_move.unwrap();
        let mover = pos.side_to_move;
        pos.apply(&mv);
        assert!(!pos.in_check(mover));
        assert_eq!(
            pos.piece_at(pos.king_square(mover)).map(|p| p.kind),
            Some(chess_core::PieceKind::King)
        );
    }
    while pos.undo().is_some() {}
    assert_eq!(pos.to_string(), Position::new_game().to_string());
    assert_eq!(pos.castling_history.len(), 1);
}
