//! Dictionary word representation
//!
//! A `WordEntry` is created once when the dictionary is built and never
//! mutated afterwards. Players refer to entries by `WordId`.

use super::{LetterError, LetterSet};
use std::fmt;

/// Stable identifier of a dictionary word
///
/// The id is the entry's position in the dictionary's sorted word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(pub(crate) u32);

impl WordId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An immutable dictionary word with its letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    id: WordId,
    text: String,
    letters: LetterSet,
}

impl WordEntry {
    /// Create an entry for `text`, counting its letters
    ///
    /// # Errors
    /// Returns `LetterError` if `text` is not made only of `a..=z`.
    pub(crate) fn new(id: WordId, text: String) -> Result<Self, LetterError> {
        let letters = LetterSet::from_text(&text)?;
        Ok(Self { id, text, letters })
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> WordId {
        self.id
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    pub(crate) fn set_id(&mut self, id: WordId) {
        self.id = id;
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_counts_letters() {
        let entry = WordEntry::new(WordId(3), "steal".to_string()).unwrap();
        assert_eq!(entry.id(), WordId(3));
        assert_eq!(entry.id().index(), 3);
        assert_eq!(entry.text(), "steal");
        assert_eq!(entry.length(), 5);
        assert_eq!(entry.letters(), &LetterSet::from_text("least").unwrap());
    }

    #[test]
    fn entry_rejects_invalid_text() {
        assert!(WordEntry::new(WordId(0), "o'clock".to_string()).is_err());
        assert!(WordEntry::new(WordId(0), "two words".to_string()).is_err());
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new(WordId(0), "yoink".to_string()).unwrap();
        assert_eq!(format!("{entry}"), "yoink");
    }
}
