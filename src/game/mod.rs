//! Match simulation
//!
//! This module drives a match: players, the shared pool, the flip sequence
//! and turn resolution with steal-before-build priority.

pub mod config;
mod engine;
mod event;
mod player;

pub use config::{
    ConfigError, DEFAULT_DISTRIBUTION, DEFAULT_MIN_WORD_LENGTH, DEFAULT_PLAYERS, DEFAULT_SEED,
    MatchConfig, parse_distribution, parse_players,
};
pub use engine::Match;
pub use event::{MatchEvent, MatchResult, Standing, TurnAction};
pub use player::Player;
