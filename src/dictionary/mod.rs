//! Anagram dictionary
//!
//! Indexes a word list by anagram group and word length, and answers the two
//! questions a player asks on every turn: what can I build from the pool, and
//! what can I steal.

mod index;
mod search;

pub use index::{AnagramGroup, IndexStats, WordIndex};
