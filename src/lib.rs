//! Yoink
//!
//! A word-stealing tile game simulator. Letters are flipped into a shared pool
//! one at a time; players build words from the pool or steal each other's
//! words by extending them into longer anagrams.
//!
//! # Quick Start
//!
//! ```rust
//! use yoink::dictionary::WordIndex;
//! use yoink::game::{Match, MatchConfig};
//!
//! let index = WordIndex::build(["rate", "tears", "stare", "neat"], 4);
//! let result = Match::from_config(&index, &MatchConfig::default()).run();
//!
//! for standing in &result.standings {
//!     println!("{}: {}", standing.name, standing.score);
//! }
//! ```

// Core domain types
pub mod core;

// Anagram dictionary
pub mod dictionary;

// Match simulation
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
