//! Anagram-grouped word index
//!
//! Words are sorted longest first, then by letter counts, so that anagrams sit
//! next to each other and every length class occupies one contiguous run of
//! groups. A size table maps each word length to its run of groups.

use crate::core::{LetterSet, WordEntry, WordId};
use rustc_hash::FxHashSet;
use std::ops::Range;

/// A maximal run of dictionary words sharing one letter multiset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramGroup {
    pub(super) key: LetterSet,
    pub(super) size: usize,
    pub(super) members: Range<usize>,
}

impl AnagramGroup {
    /// Letter multiset shared by every member
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &LetterSet {
        &self.key
    }

    /// Number of letters in each member word
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Positions of the members in the sorted word list
    #[inline]
    #[must_use]
    pub fn members(&self) -> Range<usize> {
        self.members.clone()
    }
}

/// Counts of what happened to the input lines during a build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Words that made it into the index
    pub accepted: usize,
    /// Words shorter than the minimum length
    pub too_short: usize,
    /// Words containing anything other than `a..=z`
    pub invalid: usize,
    /// Repeats of a word already indexed
    pub duplicates: usize,
}

/// Dictionary indexed by anagram group and word length
///
/// Built once, read-only afterwards. Safe to share between threads.
#[derive(Debug, Clone)]
pub struct WordIndex {
    pub(super) words: Vec<WordEntry>,
    pub(super) groups: Vec<AnagramGroup>,
    /// `groups_by_size[n]` is the run of groups whose words have `n` letters
    pub(super) groups_by_size: Vec<Option<Range<usize>>>,
    pub(super) min_word_length: usize,
    stats: IndexStats,
}

impl WordIndex {
    /// Build the index from candidate words
    ///
    /// Lines are trimmed and lowercased; empty lines are ignored. Words shorter
    /// than `min_word_length`, words with non-letter characters and repeated
    /// words are skipped and counted in [`IndexStats`].
    ///
    /// Anagrams keep their input order, so the first listed spelling is the
    /// one chosen when a group matches.
    ///
    /// # Examples
    /// ```
    /// use yoink::dictionary::WordIndex;
    ///
    /// let index = WordIndex::build(["cat", "act", "cats", "at"], 3);
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.group_count(), 2);
    /// assert_eq!(index.stats().too_short, 1);
    /// ```
    pub fn build<I, S>(words: I, min_word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = IndexStats::default();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut entries: Vec<WordEntry> = Vec::new();

        for raw in words {
            let text = raw.as_ref().trim().to_ascii_lowercase();
            if text.is_empty() {
                continue;
            }
            if text.len() < min_word_length {
                stats.too_short += 1;
                continue;
            }
            if seen.contains(&text) {
                stats.duplicates += 1;
                continue;
            }

            match WordEntry::new(WordId(0), text.clone()) {
                Ok(entry) => {
                    seen.insert(text);
                    entries.push(entry);
                }
                Err(_) => stats.invalid += 1,
            }
        }

        // Stable: anagrams stay in input order
        entries.sort_by(|a, b| {
            b.length()
                .cmp(&a.length())
                .then_with(|| a.letters().cmp(b.letters()))
        });
        for (position, entry) in entries.iter_mut().enumerate() {
            entry.set_id(WordId(position as u32));
        }
        stats.accepted = entries.len();

        let groups = group_anagrams(&entries);
        let groups_by_size = index_sizes(&groups);

        Self {
            words: entries,
            groups,
            groups_by_size,
            min_word_length,
            stats,
        }
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of anagram groups
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    #[must_use]
    pub const fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> IndexStats {
        self.stats
    }

    /// Look up a word by id
    ///
    /// # Panics
    /// Panics if `id` was not issued by this index
    #[inline]
    #[must_use]
    pub fn entry(&self, id: WordId) -> &WordEntry {
        &self.words[id.index()]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&WordEntry> {
        self.words.get(id.index())
    }

    /// All words in index order (longest first)
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// All anagram groups in index order
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[AnagramGroup] {
        &self.groups
    }

    /// Members of each anagram group, in index order
    pub fn anagram_groups(&self) -> impl Iterator<Item = &[WordEntry]> + '_ {
        self.groups
            .iter()
            .map(|group| &self.words[group.members.clone()])
    }

    /// Find the indexed entry for `text`
    ///
    /// Uses the sort order to binary search for the word's anagram group.
    #[must_use]
    pub fn find_word(&self, text: &str) -> Option<&WordEntry> {
        let text = text.trim().to_ascii_lowercase();
        let letters = LetterSet::from_text(&text).ok()?;
        let length = text.len();

        let group = self
            .groups
            .binary_search_by(|group| {
                length
                    .cmp(&group.size)
                    .then_with(|| group.key.cmp(&letters))
            })
            .ok()?;

        self.words[self.groups[group].members.clone()]
            .iter()
            .find(|entry| entry.text() == text)
    }

    /// Run of groups whose words have exactly `size` letters
    #[must_use]
    pub fn groups_with_size(&self, size: usize) -> Range<usize> {
        self.groups_by_size
            .get(size)
            .and_then(Clone::clone)
            .unwrap_or(0..0)
    }

    /// Position of the first group whose words have at most `size` letters
    ///
    /// Returns the group count if every group is longer.
    pub(super) fn first_group_with_at_most(&self, size: usize) -> usize {
        let top = size.min(self.groups_by_size.len() - 1);
        self.groups_by_size[..=top]
            .iter()
            .rev()
            .find_map(|run| run.as_ref().map(|run| run.start))
            .unwrap_or(self.groups.len())
    }
}

/// Collapse consecutive equal-letter entries into groups
fn group_anagrams(entries: &[WordEntry]) -> Vec<AnagramGroup> {
    let mut groups: Vec<AnagramGroup> = Vec::new();

    for (position, entry) in entries.iter().enumerate() {
        match groups.last_mut() {
            Some(group) if group.key == *entry.letters() => group.members.end = position + 1,
            _ => groups.push(AnagramGroup {
                key: *entry.letters(),
                size: entry.length(),
                members: position..position + 1,
            }),
        }
    }

    groups
}

/// Map each word length to its contiguous run of groups
fn index_sizes(groups: &[AnagramGroup]) -> Vec<Option<Range<usize>>> {
    let longest = groups.first().map_or(0, |group| group.size);
    let mut by_size: Vec<Option<Range<usize>>> = vec![None; longest + 1];

    for (position, group) in groups.iter().enumerate() {
        by_size[group.size]
            .get_or_insert(position..position)
            .end = position + 1;
    }

    by_size
}
