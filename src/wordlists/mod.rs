//! Word lists for building the dictionary
//!
//! Provides an embedded starter list compiled into the binary, plus loaders
//! for newline-delimited word files.

mod embedded;
pub mod loader;

pub use embedded::{STARTER, STARTER_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_count_matches_const() {
        assert_eq!(STARTER.len(), STARTER_COUNT);
    }

    #[test]
    fn starter_words_are_lowercase_letters() {
        for &word in STARTER {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn starter_builds_an_index() {
        let index = crate::dictionary::WordIndex::build(STARTER, 4);
        assert!(index.len() > 100);
        assert_eq!(index.stats().invalid, 0);
        assert!(index.find_word("tears").is_some());
    }
}
