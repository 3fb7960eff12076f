//! Build and steal queries against the word index
//!
//! Both queries walk groups in index order, longest first, and use the size
//! table to skip every group that is too long (or too short) to qualify.

use super::WordIndex;
use crate::core::{LetterSet, WordEntry};

impl WordIndex {
    /// Find the longest word that can be made entirely from `pool`
    ///
    /// Returns `None` if the pool holds fewer letters than the minimum word
    /// length or nothing fits.
    ///
    /// # Examples
    /// ```
    /// use yoink::core::LetterSet;
    /// use yoink::dictionary::WordIndex;
    ///
    /// let index = WordIndex::build(["cat", "act", "cats"], 3);
    /// let pool = LetterSet::from_text("tac").unwrap();
    ///
    /// let word = index.find_buildable_word(&pool).unwrap();
    /// assert_eq!(word.text(), "cat");
    /// ```
    #[must_use]
    pub fn find_buildable_word(&self, pool: &LetterSet) -> Option<&WordEntry> {
        let available = pool.total();
        if available < self.min_word_length {
            return None;
        }

        let start = self.first_group_with_at_most(available);
        self.groups[start..]
            .iter()
            .find(|group| group.key.is_subset_of(pool))
            .map(|group| &self.words[group.members.start])
    }

    /// Find a word that steals `existing` using letters from `pool`
    ///
    /// A candidate must use every letter of `existing` plus at least one pool
    /// letter, and must not contain `existing` as a substring: "cat" cannot
    /// become "cats" or "scat", though it can become "acts".
    ///
    /// The substring rule also blocks some legitimate steals ("quit" into
    /// "equity"); it never lets an illegitimate one through.
    ///
    /// # Examples
    /// ```
    /// use yoink::core::LetterSet;
    /// use yoink::dictionary::WordIndex;
    ///
    /// let index = WordIndex::build(["cat", "cats", "acts"], 3);
    /// let cat = index.find_word("cat").unwrap();
    /// let pool = LetterSet::from_text("s").unwrap();
    ///
    /// let stolen = index.find_steal_candidate(cat, &pool).unwrap();
    /// assert_eq!(stolen.text(), "acts");
    /// ```
    #[must_use]
    pub fn find_steal_candidate(
        &self,
        existing: &WordEntry,
        pool: &LetterSet,
    ) -> Option<&WordEntry> {
        let reachable = pool.union(existing.letters());

        // Strictly longer than `existing`, at most everything reachable
        let start = self.first_group_with_at_most(reachable.total());
        let end = self.first_group_with_at_most(existing.length());
        if start >= end {
            return None;
        }

        self.groups[start..end]
            .iter()
            .filter(|group| {
                existing.letters().is_subset_of(&group.key) && group.key.is_subset_of(&reachable)
            })
            .find_map(|group| {
                self.words[group.members.clone()].iter().find(|candidate| {
                    candidate.length() > existing.length()
                        && !candidate.text().contains(existing.text())
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(text: &str) -> LetterSet {
        LetterSet::from_text(text).unwrap()
    }

    #[test]
    fn build_prefers_first_listed_anagram() {
        let index = WordIndex::build(["cat", "act", "cats"], 3);
        let word = index.find_buildable_word(&pool("cat")).unwrap();
        assert_eq!(word.text(), "cat");

        let index = WordIndex::build(["act", "cat", "cats"], 3);
        let word = index.find_buildable_word(&pool("cat")).unwrap();
        assert_eq!(word.text(), "act");
    }

    #[test]
    fn build_returns_longest_fit() {
        let index = WordIndex::build(["tea", "seat", "eats", "east", "steak"], 3);
        assert_eq!(index.find_buildable_word(&pool("aestx")).unwrap().text(), "seat");
        assert_eq!(index.find_buildable_word(&pool("aeskt")).unwrap().text(), "steak");
        assert_eq!(index.find_buildable_word(&pool("aetz")).unwrap().text(), "tea");
    }

    #[test]
    fn build_needs_minimum_letters() {
        let index = WordIndex::build(["cat"], 3);
        assert!(index.find_buildable_word(&pool("ca")).is_none());
        assert!(index.find_buildable_word(&LetterSet::EMPTY).is_none());
    }

    #[test]
    fn build_handles_oversized_pool() {
        let index = WordIndex::build(["cat", "dog"], 3);
        let big = pool("abcdefghijklmnopqrstuvwxyzdogs");
        assert_eq!(index.find_buildable_word(&big).unwrap().text(), "dog");
    }

    #[test]
    fn build_finds_nothing_in_unrelated_pool() {
        let index = WordIndex::build(["cat", "dog"], 3);
        assert!(index.find_buildable_word(&pool("xyzzy")).is_none());
    }

    #[test]
    fn steal_blocked_by_substring_rule() {
        let index = WordIndex::build(["cat", "act", "cats"], 3);
        let cat = index.find_word("cat").unwrap();
        assert!(index.find_steal_candidate(cat, &pool("s")).is_none());
    }

    #[test]
    fn steal_blocks_legitimate_change_containing_original() {
        let index = WordIndex::build(["quit", "equity"], 4);
        let quit = index.find_word("quit").unwrap();
        assert!(index.find_steal_candidate(quit, &pool("ey")).is_none());
    }

    #[test]
    fn steal_rearranges_letters() {
        let index = WordIndex::build(["rate", "rates", "tears", "aster"], 4);
        let rate = index.find_word("rate").unwrap();
        // "rates" contains "rate"; the next member of the group is taken
        assert_eq!(
            index.find_steal_candidate(rate, &pool("s")).unwrap().text(),
            "tears"
        );
    }

    #[test]
    fn steal_requires_every_original_letter() {
        let index = WordIndex::build(["rate", "stare"], 4);
        let rate = index.find_word("rate").unwrap();
        assert!(index.find_steal_candidate(rate, &pool("x")).is_none());

        let index = WordIndex::build(["rate", "toast"], 4);
        let rate = index.find_word("rate").unwrap();
        assert!(index.find_steal_candidate(rate, &pool("aosst")).is_none());
    }

    #[test]
    fn steal_prefers_longest_candidate() {
        let index = WordIndex::build(["tale", "slate", "alerts"], 4);
        let tale = index.find_word("tale").unwrap();
        let candidate = index.find_steal_candidate(tale, &pool("rsq")).unwrap();
        assert_eq!(candidate.text(), "alerts");

        // "staler" and "stale" both contain "tale", so "slate" is taken
        let index = WordIndex::build(["tale", "stale", "staler", "slate"], 4);
        let tale = index.find_word("tale").unwrap();
        let candidate = index.find_steal_candidate(tale, &pool("rsq")).unwrap();
        assert_eq!(candidate.text(), "slate");
    }

    #[test]
    fn steal_with_empty_pool_finds_nothing() {
        let index = WordIndex::build(["tale", "late", "stale"], 4);
        let tale = index.find_word("tale").unwrap();
        // "late" is the same length, never a steal
        assert!(index.find_steal_candidate(tale, &LetterSet::EMPTY).is_none());
    }

    #[test]
    fn steal_of_longest_word_finds_nothing() {
        let index = WordIndex::build(["cat", "acts"], 3);
        let acts = index.find_word("acts").unwrap();
        assert!(index.find_steal_candidate(acts, &pool("xyz")).is_none());
    }

    const WORDS: &[&str] = &[
        "ant", "tan", "nat", "ants", "tans", "stand", "sand", "and", "dan", "tad", "date",
        "sated", "stead", "dates", "ate", "eat", "tea", "seat", "east", "teas", "nest", "tens",
        "sent", "dense", "tend", "dent", "stent", "tense", "teens", "eden", "need", "sedan",
    ];

    fn small_pool() -> impl Strategy<Value = LetterSet> {
        prop::collection::vec(prop::sample::select(b"adenst".to_vec()), 0..8).prop_map(|letters| {
            let mut set = LetterSet::EMPTY;
            for letter in letters {
                set.add_letter(letter);
            }
            set
        })
    }

    proptest! {
        #[test]
        fn build_is_sound_and_maximal(pool in small_pool()) {
            let index = WordIndex::build(WORDS, 3);
            let longest_fit = index
                .words()
                .iter()
                .filter(|word| word.letters().is_subset_of(&pool))
                .map(WordEntry::length)
                .max();

            if let Some(word) = index.find_buildable_word(&pool) {
                prop_assert!(word.letters().is_subset_of(&pool));
                prop_assert_eq!(Some(word.length()), longest_fit);
            } else {
                prop_assert_eq!(longest_fit, None);
            }
        }

        #[test]
        fn steal_is_sound_and_complete(pool in small_pool(), pick in 0..WORDS.len()) {
            let index = WordIndex::build(WORDS, 3);
            let existing = index.find_word(WORDS[pick]).unwrap();
            let reachable = pool.union(existing.letters());
            let any_valid = index.words().iter().any(|word| {
                word.length() > existing.length()
                    && !word.text().contains(existing.text())
                    && existing.letters().is_subset_of(word.letters())
                    && word.letters().is_subset_of(&reachable)
            });

            match index.find_steal_candidate(existing, &pool) {
                Some(candidate) => {
                    prop_assert!(candidate.length() > existing.length());
                    prop_assert!(!candidate.text().contains(existing.text()));
                    prop_assert!(existing.letters().is_subset_of(candidate.letters()));
                    prop_assert!(candidate.letters().is_subset_of(&reachable));
                }
                None => prop_assert!(!any_valid),
            }
        }
    }
}
