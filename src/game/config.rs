//! Match configuration
//!
//! Everything that determines a match besides the dictionary: the roster, the
//! letter supply, the seed and the shuffle mode.

use crate::core::{ALPHABET_SIZE, LetterSet, ShuffleMode, flip_order};
use std::fmt;

/// Classic letter supply, `a` first (150 tiles)
pub const DEFAULT_DISTRIBUTION: LetterSet = LetterSet::from_counts([
    12, 3, 5, 6, 18, 3, 6, 4, 11, 2, 2, 7, 4, 9, 10, 4, 2, 10, 8, 9, 5, 2, 2, 2, 2, 2,
]);

pub const DEFAULT_SEED: i64 = 1_234_567_891;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;

pub const DEFAULT_PLAYERS: [&str; 3] = ["Alice", "Bob", "Charlie"];

/// Error type for invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    WrongLetterCount(usize),
    InvalidCount { letter: char, value: String },
    EmptyPlayerName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLetterCount(n) => {
                write!(f, "Distribution needs {ALPHABET_SIZE} counts, got {n}")
            }
            Self::InvalidCount { letter, value } => {
                write!(f, "Invalid count {value:?} for letter '{letter}' (expected 0-255)")
            }
            Self::EmptyPlayerName => write!(f, "Player names must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for a single match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Player names in turn order
    pub players: Vec<String>,
    /// Total supply of each letter
    pub distribution: LetterSet,
    pub seed: i64,
    pub shuffle: ShuffleMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS.iter().map(ToString::to_string).collect(),
            distribution: DEFAULT_DISTRIBUTION,
            seed: DEFAULT_SEED,
            shuffle: ShuffleMode::default(),
        }
    }
}

impl MatchConfig {
    /// Same configuration with a different seed
    #[must_use]
    pub fn with_seed(&self, seed: i64) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// The letters this configuration flips, in order
    #[must_use]
    pub fn flip_order(&self) -> Vec<u8> {
        flip_order(&self.distribution, self.seed, self.shuffle)
    }
}

/// Parse 26 comma-separated letter counts, `a` first
///
/// # Errors
/// Returns `ConfigError` if there are not exactly 26 counts or a count is not
/// an integer in 0-255.
///
/// # Examples
/// ```
/// use yoink::game::parse_distribution;
///
/// let bag = parse_distribution("1,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,0").unwrap();
/// assert_eq!(bag.to_string(), "act");
/// ```
pub fn parse_distribution(text: &str) -> Result<LetterSet, ConfigError> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != ALPHABET_SIZE {
        return Err(ConfigError::WrongLetterCount(fields.len()));
    }

    let mut counts = [0u8; ALPHABET_SIZE];
    for ((count, field), letter) in counts.iter_mut().zip(&fields).zip('a'..='z') {
        *count = field.parse().map_err(|_| ConfigError::InvalidCount {
            letter,
            value: (*field).to_string(),
        })?;
    }

    Ok(LetterSet::from_counts(counts))
}

/// Parse a comma-separated roster
///
/// # Errors
/// Returns `ConfigError::EmptyPlayerName` if any name is blank.
pub fn parse_players(text: &str) -> Result<Vec<String>, ConfigError> {
    text.split(',')
        .map(str::trim)
        .map(|name| {
            if name.is_empty() {
                Err(ConfigError::EmptyPlayerName)
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}
