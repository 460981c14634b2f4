//! Plays one engine-vs-engine game through the public position API.

use std::fmt;
use std::path::Path;

use chess_core::{long_notation, Color, Engine, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::MatchConfig;
use crate::error::{SelfPlayError, SelfPlayResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    /// Stopped at the ply limit with the game still going.
    Unfinished,
}

impl Outcome {
    /// Result once legal generation came back empty for the side to move.
    fn terminal(pos: &Position) -> Outcome {
        if pos.is_checkmate {
            match pos.side_to_move {
                Color::White => Outcome::BlackWins,
                Color::Black => Outcome::WhiteWins,
            }
        } else {
            Outcome::Stalemate
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Stalemate => "1/2-1/2",
            Outcome::Unfinished => "*",
        };
        f.write_str(s)
    }
}

/// Everything needed to replay a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// Coordinate notation, promotion letter appended.
    pub moves: Vec<String>,
    pub outcome: Outcome,
    pub plies: usize,
}

impl GameRecord {
    /// Save the record as pretty JSON.
    pub fn save(&self, path: &Path) -> SelfPlayResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SelfPlayError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> SelfPlayResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SelfPlayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Replays the moves from the initial position.
    pub fn replay(&self) -> SelfPlayResult<Position> {
        let mut pos = Position::new_game();
        for text in &self.moves {
            let mv = chess_core::find_legal_move(&mut pos, text)?;
            pos.apply(&mv);
        }
        Ok(pos)
    }
}

/// Plays from the initial position until mate, stalemate or
/// `config.max_plies`, asking `white` and `black` for moves in turn.
pub fn play_game(
    config: &MatchConfig,
    white: &mut dyn Engine,
    black: &mut dyn Engine,
) -> SelfPlayResult<GameRecord> {
    let mut pos = Position::new_game();
    white.new_game();
    black.new_game();

    info!(white = white.name(), black = black.name(), "game started");

    let mut moves = Vec::new();
    let outcome = loop {
        let legal = pos.legal_moves();
        if legal.is_empty() {
            break Outcome::terminal(&pos);
        }
        if moves.len() >= config.max_plies as usize {
            warn!(plies = moves.len(), "ply limit reached, stopping game");
            break Outcome::Unfinished;
        }

        let result = match pos.side_to_move {
            Color::White => white.search(&pos, config.search.depth),
            Color::Black => black.search(&pos, config.search.depth),
        };
        let chosen = result.best_move.ok_or_else(|| SelfPlayError::NoMoveReturned {
            engine: match pos.side_to_move {
                Color::White => white.name().to_string(),
                Color::Black => black.name().to_string(),
            },
            legal: legal.len(),
        })?;

        // Pick the generated move so flags and promotion come from the legal set.
        let mv = legal
            .iter()
            .find(|m| **m == chosen && m.promotion == chosen.promotion)
            .copied()
            .ok_or_else(|| chess_core::ChessError::IllegalMove(long_notation(&chosen)))?;

        debug!(
            ply = moves.len() + 1,
            mv = %long_notation(&mv),
            score = result.score,
            nodes = result.nodes,
            "move played"
        );
        pos.apply(&mv);
        moves.push(long_notation(&mv));
    };

    info!(%outcome, plies = moves.len(), "game finished");

    Ok(GameRecord {
        white: white.name().to_string(),
        black: black.name().to_string(),
        plies: moves.len(),
        moves,
        outcome,
    })
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
