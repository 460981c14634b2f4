//! Self-play driver for the chess engines.
//!
//! Drives the core the way an interactive front end would: ask for the
//! legal moves, apply the chosen one, read the checkmate and stalemate
//! flags. Games can be configured from TOML and recorded as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Classical engine against the random baseline, depth 3
//! cargo run -p selfplay -- play --white classical --black random --depth 3
//!
//! # Node counts per root move
//! cargo run -p selfplay -- perft 4
//! ```

mod config;
mod error;
mod game;

pub use config::*;
pub use error::*;
pub use game::*;
