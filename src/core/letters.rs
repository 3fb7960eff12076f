//! Letter multiset representation
//!
//! A `LetterSet` counts how many of each letter `a..=z` are present in a word
//! or in the shared pool. All operations are element-wise over 26 counts.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Multiset of lowercase ASCII letters
///
/// Ordering compares the raw count bytes lexicographically, letter `a` first.
/// The dictionary relies on this order to group anagrams in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet {
    counts: [u8; ALPHABET_SIZE],
}

/// Error type for text that cannot become a `LetterSet`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    InvalidLetter(char),
    CountOverflow(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(c) => {
                write!(f, "Only lowercase letters a-z are allowed, got {c:?}")
            }
            Self::CountOverflow(c) => {
                write!(f, "Too many copies of letter '{c}' (max {})", u8::MAX)
            }
        }
    }
}

impl std::error::Error for LetterError {}

impl LetterSet {
    /// The empty multiset
    pub const EMPTY: Self = Self {
        counts: [0; ALPHABET_SIZE],
    };

    /// Create a multiset directly from per-letter counts (`a` first)
    #[inline]
    #[must_use]
    pub const fn from_counts(counts: [u8; ALPHABET_SIZE]) -> Self {
        Self { counts }
    }

    /// Count the letters of `text`
    ///
    /// # Errors
    /// Returns `LetterError` if `text` contains anything other than `a..=z`,
    /// or more than 255 copies of one letter.
    ///
    /// # Examples
    /// ```
    /// use yoink::core::LetterSet;
    ///
    /// let letters = LetterSet::from_text("banana").unwrap();
    /// assert_eq!(letters.count(b'a'), 3);
    /// assert_eq!(letters.total(), 6);
    ///
    /// assert!(LetterSet::from_text("Banana").is_err());
    /// ```
    pub fn from_text(text: &str) -> Result<Self, LetterError> {
        let mut set = Self::EMPTY;
        for ch in text.chars() {
            if !ch.is_ascii_lowercase() {
                return Err(LetterError::InvalidLetter(ch));
            }
            set.try_add_letter(ch as u8)?;
        }
        Ok(set)
    }

    /// Count a sequence of letter bytes, such as a flip order
    ///
    /// # Errors
    /// Returns `LetterError` if a byte is outside `b'a'..=b'z'`, or a letter
    /// occurs more than 255 times.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LetterError> {
        let mut set = Self::EMPTY;
        for &byte in bytes {
            set.try_add_letter(byte)?;
        }
        Ok(set)
    }

    /// Per-letter counts, `a` first
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }

    /// How many copies of `letter` are present
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: u8) -> u8 {
        self.counts[letter_index(letter)]
    }

    /// Total number of letters (used for size pruning only)
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// True if every letter count in `self` is at most the count in `other`
    #[inline]
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(&other.counts)
            .all(|(mine, theirs)| mine <= theirs)
    }

    /// Element-wise sum, saturating at 255 per letter
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut counts = self.counts;
        for (count, &add) in counts.iter_mut().zip(&other.counts) {
            *count = count.saturating_add(add);
        }
        Self { counts }
    }

    /// Element-wise subtraction
    ///
    /// The caller must ensure `other.is_subset_of(self)`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        debug_assert!(
            other.is_subset_of(self),
            "cannot remove {other} from {self}"
        );
        let mut counts = self.counts;
        for (count, &sub) in counts.iter_mut().zip(&other.counts) {
            *count = count.saturating_sub(sub);
        }
        Self { counts }
    }

    /// Add one copy of `letter`, saturating at 255
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`
    #[inline]
    pub fn add_letter(&mut self, letter: u8) {
        let slot = &mut self.counts[letter_index(letter)];
        *slot = slot.saturating_add(1);
    }

    /// Add one copy of `letter`
    ///
    /// # Errors
    /// Returns `LetterError` if `letter` is not in `b'a'..=b'z'` or its count
    /// is already 255.
    pub fn try_add_letter(&mut self, letter: u8) -> Result<(), LetterError> {
        if !letter.is_ascii_lowercase() {
            return Err(LetterError::InvalidLetter(char::from(letter)));
        }
        let slot = &mut self.counts[letter_index(letter)];
        *slot = slot
            .checked_add(1)
            .ok_or(LetterError::CountOverflow(char::from(letter)))?;
        Ok(())
    }

    /// Remove `other` in place; same precondition as [`LetterSet::difference`]
    #[inline]
    pub fn remove(&mut self, other: &Self) {
        *self = self.difference(other);
    }

    /// Iterate over the individual letters in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.counts
            .iter()
            .zip(b'a'..=b'z')
            .flat_map(|(&count, letter)| std::iter::repeat_n(letter, usize::from(count)))
    }
}

#[inline]
const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
