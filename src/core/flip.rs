//! Flip order generation
//!
//! Expands a letter distribution into the sequence of letters revealed during
//! a match. The order is a pure function of the distribution, the seed and
//! the shuffle mode.

use super::LetterSet;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// How the expanded letter sequence is shuffled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Swap each position with a noise-selected partner over the full range.
    ///
    /// Not a uniform shuffle, but identical to previously recorded runs.
    #[default]
    Replay,
    /// Fisher-Yates shuffle seeded from the seed (uniform, not replay-compatible)
    Uniform,
}

impl ShuffleMode {
    /// Parse a mode name: "replay" (default) or "uniform"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "replay" => Some(Self::Replay),
            "uniform" => Some(Self::Uniform),
            _ => None,
        }
    }

    /// The name accepted by [`ShuffleMode::from_name`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Replay => "replay",
            Self::Uniform => "uniform",
        }
    }
}

/// Produce the flip order for `distribution` under `seed`
///
/// # Examples
/// ```
/// use yoink::core::{LetterSet, ShuffleMode, flip_order};
///
/// let bag = LetterSet::from_text("aabbc").unwrap();
/// let first = flip_order(&bag, 42, ShuffleMode::Replay);
/// let second = flip_order(&bag, 42, ShuffleMode::Replay);
///
/// assert_eq!(first, second);
/// assert_eq!(first.len(), 5);
/// ```
#[must_use]
pub fn flip_order(distribution: &LetterSet, seed: i64, mode: ShuffleMode) -> Vec<u8> {
    let mut letters: Vec<u8> = distribution.letters().collect();

    match mode {
        ShuffleMode::Replay => {
            let len = letters.len();
            for i in 0..len {
                let j = pseudo_noise(i, seed) as usize % len;
                letters.swap(i, j);
            }
        }
        ShuffleMode::Uniform => {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            letters.shuffle(&mut rng);
        }
    }

    letters
}

/// Integer mixing of a position and a seed
///
/// Only the low 32 bits of `i * 7349 + seed * 3797` survive, so the
/// arithmetic is done directly in wrapping `u32`.
#[must_use]
pub fn pseudo_noise(i: usize, seed: i64) -> u32 {
    let mut x = (i as u32)
        .wrapping_mul(7349)
        .wrapping_add((seed as u32).wrapping_mul(3797));
    x ^= x >> 13;
    x = x.wrapping_mul(0x5bd1_e995);
    x ^= x >> 15;
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(text: &str) -> LetterSet {
        LetterSet::from_text(text).unwrap()
    }

    fn as_set(letters: &[u8]) -> LetterSet {
        let mut set = LetterSet::EMPTY;
        for &letter in letters {
            set.add_letter(letter);
        }
        set
    }

    #[test]
    fn noise_matches_reference_values() {
        // i = 0, seed = 0 mixes to zero
        assert_eq!(pseudo_noise(0, 0), 0);

        // i = 1, seed = 0: x = 7349; 7349 >> 13 == 0
        let x: u32 = 7349u32.wrapping_mul(0x5bd1_e995);
        assert_eq!(pseudo_noise(1, 0), x ^ (x >> 15));
    }

    #[test]
    fn noise_uses_low_32_bits_of_seed() {
        let seed = 1_234_567_891_i64;
        assert_eq!(pseudo_noise(7, seed), pseudo_noise(7, seed + (1_i64 << 32)));
        assert_eq!(pseudo_noise(7, -1), pseudo_noise(7, i64::from(u32::MAX)));
    }

    #[test]
    fn replay_order_is_deterministic() {
        let distribution = bag("aaaabbbcccddeeeeeeeffg");
        let first = flip_order(&distribution, 1_234_567_891, ShuffleMode::Replay);
        let second = flip_order(&distribution, 1_234_567_891, ShuffleMode::Replay);
        assert_eq!(first, second);
    }

    #[test]
    fn replay_order_is_a_permutation() {
        let distribution = bag("aaaabbbcccddeeeeeeeffgxyz");
        let order = flip_order(&distribution, 99, ShuffleMode::Replay);
        assert_eq!(as_set(&order), distribution);
    }

    #[test]
    fn replay_swaps_follow_noise() {
        let distribution = bag("abc");
        let mut expected = b"abc".to_vec();
        for i in 0..3 {
            let j = pseudo_noise(i, 5) as usize % 3;
            expected.swap(i, j);
        }
        assert_eq!(flip_order(&distribution, 5, ShuffleMode::Replay), expected);
    }

    #[test]
    fn uniform_order_is_deterministic_permutation() {
        let distribution = bag("aaaabbbcccddeeeeeeeffg");
        let first = flip_order(&distribution, 7, ShuffleMode::Uniform);
        let second = flip_order(&distribution, 7, ShuffleMode::Uniform);
        assert_eq!(first, second);
        assert_eq!(as_set(&first), distribution);
    }

    #[test]
    fn empty_distribution_flips_nothing() {
        assert!(flip_order(&LetterSet::EMPTY, 1, ShuffleMode::Replay).is_empty());
        assert!(flip_order(&LetterSet::EMPTY, 1, ShuffleMode::Uniform).is_empty());
    }

    #[test]
    fn shuffle_mode_names() {
        assert_eq!(ShuffleMode::from_name("replay"), Some(ShuffleMode::Replay));
        assert_eq!(ShuffleMode::from_name("uniform"), Some(ShuffleMode::Uniform));
        assert_eq!(ShuffleMode::from_name("fair"), None);
        assert_eq!(ShuffleMode::default(), ShuffleMode::Replay);

        for mode in [ShuffleMode::Replay, ShuffleMode::Uniform] {
            assert_eq!(ShuffleMode::from_name(mode.name()), Some(mode));
        }
    }
}
