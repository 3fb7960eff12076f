//! Anagram listing command

use crate::core::WordEntry;
use crate::dictionary::WordIndex;

/// Anagram groups with at least `min_size` members, longest words first
#[must_use]
pub fn list_anagrams(index: &WordIndex, min_size: usize) -> Vec<Vec<&str>> {
    index
        .anagram_groups()
        .filter(|group| group.len() >= min_size)
        .map(|group| group.iter().map(WordEntry::text).collect())
        .collect()
}
