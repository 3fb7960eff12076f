//! Core domain types for the word-stealing game
//!
//! This module contains the letter multiset algebra, dictionary word entries
//! and flip order generation. Everything here is pure and deterministic.

mod flip;
mod letters;
mod word;

pub use flip::{ShuffleMode, flip_order, pseudo_noise};
pub use letters::{ALPHABET_SIZE, LetterError, LetterSet};
pub use word::{WordEntry, WordId};
