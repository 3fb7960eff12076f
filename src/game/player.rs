//! Player state
//!
//! A player owns dictionary words by id. Words are kept longest first, with
//! equal lengths in the order they were claimed.

use crate::core::{WordEntry, WordId};
use crate::dictionary::WordIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    words: Vec<WordId>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned words, longest first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[WordId] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn owns(&self, id: WordId) -> bool {
        self.words.contains(&id)
    }

    /// Take ownership of `word`
    ///
    /// The word goes after every owned word of the same or greater length.
    pub fn claim(&mut self, word: &WordEntry, index: &WordIndex) {
        let position = self
            .words
            .partition_point(|&owned| index.entry(owned).length() >= word.length());
        self.words.insert(position, word.id());
    }

    /// Give up ownership of `id`; returns false if it was not owned
    pub fn release(&mut self, id: WordId) -> bool {
        match self.words.iter().position(|&owned| owned == id) {
            Some(position) => {
                self.words.remove(position);
                true
            }
            None => false,
        }
    }

    /// Sum of the lengths of all owned words
    #[must_use]
    pub fn score(&self, index: &WordIndex) -> usize {
        self.words.iter().map(|&id| index.entry(id).length()).sum()
    }

    /// Owned words as text, longest first
    #[must_use]
    pub fn word_texts<'a>(&self, index: &'a WordIndex) -> Vec<&'a str> {
        self.words.iter().map(|&id| index.entry(id).text()).collect()
    }
}
