//! Play command
//!
//! Runs a single match and reports the full event log.

use crate::dictionary::WordIndex;
use crate::game::{Match, MatchConfig, MatchResult};
use std::time::{Duration, Instant};

/// Result of playing one match
pub struct PlayResult {
    pub seed: i64,
    pub result: MatchResult,
    pub duration: Duration,
}

/// Play a full match with the given configuration
#[must_use]
pub fn play_match(index: &WordIndex, config: &MatchConfig) -> PlayResult {
    let start = Instant::now();
    let result = Match::from_config(index, config).run();

    PlayResult {
        seed: config.seed,
        result,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::STARTER;

    #[test]
    fn play_flips_every_letter() {
        let index = WordIndex::build(STARTER, 4);
        let config = MatchConfig::default();

        let played = play_match(&index, &config);

        assert_eq!(played.seed, config.seed);
        assert_eq!(played.result.flips(), config.distribution.total());
        assert_eq!(played.result.standings.len(), 3);
        assert!(played.result.builds() > 0);
    }

    #[test]
    fn play_is_reproducible() {
        let index = WordIndex::build(STARTER, 4);
        let config = MatchConfig::default().with_seed(31);

        let first = play_match(&index, &config);
        let second = play_match(&index, &config);
        assert_eq!(first.result, second.result);
    }
}
