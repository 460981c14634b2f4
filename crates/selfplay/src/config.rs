//! Match configuration, loadable from TOML.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chess_core::Engine;
use classical_engine::{ClassicalEngine, SearchConfig};
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

use crate::error::{SelfPlayError, SelfPlayResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Classical,
    Random,
}

impl FromStr for EngineKind {
    type Err = SelfPlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classical" | "classic" => Ok(EngineKind::Classical),
            "random" => Ok(EngineKind::Random),
            _ => Err(SelfPlayError::UnknownEngine(s.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Classical => write!(f, "classical"),
            EngineKind::Random => write!(f, "random"),
        }
    }
}

/// Configuration for a single self-play game.
///
/// ```toml
/// white = "classical"
/// black = "random"
/// max_plies = 120
/// record_path = "game.json"
///
/// [search]
/// depth = 4
/// quiescence = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub white: EngineKind,
    pub black: EngineKind,
    /// Settings for every classical engine in the game.
    pub search: SearchConfig,
    /// Plies before the game is adjudicated unfinished.
    pub max_plies: u32,
    /// Where to write the JSON game record, if anywhere.
    pub record_path: Option<PathBuf>,
    /// Seed for random engines; fresh entropy when unset.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            white: EngineKind::Classical,
            black: EngineKind::Random,
            search: SearchConfig::default(),
            max_plies: 200,
            record_path: None,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn from_toml(text: &str) -> SelfPlayResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> SelfPlayResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SelfPlayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}

/// Builds an engine of the given kind. `seed` only affects random engines.
pub fn create_engine(kind: EngineKind, search: SearchConfig, seed: Option<u64>) -> Box<dyn Engine> {
    match kind {
        EngineKind::Classical => Box::new(ClassicalEngine::new(search)),
        EngineKind::Random => match seed {
            Some(s) => Box::new(RandomEngine::with_seed(s)),
            None => Box::new(RandomEngine::new()),
        },
    }
}
