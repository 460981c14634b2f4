use super::*;
use crate::config::{create_engine, EngineKind};
use classical_engine::SearchConfig;

fn config(white: EngineKind, black: EngineKind, max_plies: u32) -> MatchConfig {
    MatchConfig {
        white,
        black,
        search: SearchConfig {
            depth: 1,
            quiescence: false,
            quiescence_depth: 0,
        },
        max_plies,
        record_path: None,
        seed: Some(3),
    }
}

#[test]
fn test_random_game_respects_ply_limit() {
    let cfg = config(EngineKind::Random, EngineKind::Random, 30);
    let mut white = create_engine(cfg.white, cfg.search, Some(1));
    let mut black = create_engine(cfg.black, cfg.search, Some(2));

    let record = play_game(&cfg, white.as_mut(), black.as_mut()).unwrap();
    assert!(record.plies <= 30);
    assert_eq!(record.plies, record.moves.len());
    if record.plies < 30 {
        assert_ne!(record.outcome, Outcome::Unfinished);
    } else {
        assert_eq!(record.outcome, Outcome::Unfinished);
    }
}

#[test]
fn test_record_replays_to_same_position() {
    let cfg = config(EngineKind::Classical, EngineKind::Random, 16);
    let mut white = create_engine(cfg.white, cfg.search, None);
    let mut black = create_engine(cfg.black, cfg.search, Some(9));

    let record = play_game(&cfg, white.as_mut(), black.as_mut()).unwrap();
    let pos = record.replay().unwrap();
    assert_eq!(pos.history.len(), record.plies);
    assert_eq!(record.white, "Classical v1.0");
    assert_eq!(record.black, "Random v1.0");
}

#[test]
fn test_zero_ply_limit_stops_immediately() {
    let cfg = config(EngineKind::Random, EngineKind::Random, 0);
    let mut white = create_engine(cfg.white, cfg.search, Some(1));
    let mut black = create_engine(cfg.black, cfg.search, Some(1));

    let record = play_game(&cfg, white.as_mut(), black.as_mut()).unwrap();
    assert_eq!(record.outcome, Outcome::Unfinished);
    assert!(record.moves.is_empty());
}

#[test]
fn test_outcome_display() {
    assert_eq!(Outcome::WhiteWins.to_string(), "1-0");
    assert_eq!(Outcome::BlackWins.to_string(), "0-1");
    assert_eq!(Outcome::Stalemate.to_string(), "1/2-1/2");
    assert_eq!(Outcome::Unfinished.to_string(), "*");
}

#[test]
fn test_terminal_outcome_from_flags() {
    let mut mate =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    mate.legal_moves();
    assert_eq!(Outcome::terminal(&mate), Outcome::BlackWins);

    let mut stale = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    stale.legal_moves();
    assert_eq!(Outcome::terminal(&stale), Outcome::Stalemate);
}
