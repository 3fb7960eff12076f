//! Tournament command
//!
//! Plays many matches with consecutive seeds in parallel, sharing one
//! dictionary, and aggregates the results per player.

use crate::dictionary::WordIndex;
use crate::game::{Match, MatchConfig, MatchResult};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// What one match contributes to the tournament totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub seed: i64,
    pub scores: Vec<usize>,
    pub leaders: Vec<usize>,
    pub steals: usize,
    pub builds: usize,
}

impl MatchSummary {
    fn new(seed: i64, result: &MatchResult) -> Self {
        Self {
            seed,
            scores: result.standings.iter().map(|s| s.score).collect(),
            leaders: result.leaders(),
            steals: result.steals(),
            builds: result.builds(),
        }
    }
}

/// Per-player tournament totals
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    /// Matches won outright
    pub wins: usize,
    /// Matches where the top score was shared
    pub shared: usize,
    pub total_score: usize,
    pub average_score: f64,
    pub best_score: usize,
}

/// Statistics from a tournament
#[derive(Debug)]
pub struct TournamentResult {
    pub matches: usize,
    pub first_seed: i64,
    pub players: Vec<PlayerRecord>,
    pub average_steals: f64,
    pub average_builds: f64,
    /// Seed and score of the highest-scoring single performance
    pub best_match: Option<(i64, usize)>,
    pub duration: Duration,
    pub matches_per_second: f64,
}

/// Run `count` matches with seeds `base.seed`, `base.seed + 1`, ...
///
/// Matches run in parallel; results are aggregated in seed order, so the
/// statistics do not depend on scheduling.
#[must_use]
pub fn run_tournament(
    index: &WordIndex,
    base: &MatchConfig,
    count: usize,
    show_progress: bool,
) -> TournamentResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let summaries: Vec<MatchSummary> = (0..count)
        .into_par_iter()
        .map(|offset| {
            let seed = base.seed.wrapping_add(offset as i64);
            let result = Match::from_config(index, &base.with_seed(seed)).run();
            pb.inc(1);
            MatchSummary::new(seed, &result)
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(base, &summaries, start.elapsed())
}

/// Aggregate per-match summaries into tournament statistics
#[must_use]
pub fn summarize(
    base: &MatchConfig,
    summaries: &[MatchSummary],
    duration: Duration,
) -> TournamentResult {
    let mut players: Vec<PlayerRecord> = base
        .players
        .iter()
        .map(|name| PlayerRecord {
            name: name.clone(),
            wins: 0,
            shared: 0,
            total_score: 0,
            average_score: 0.0,
            best_score: 0,
        })
        .collect();

    let mut best_match: Option<(i64, usize)> = None;

    for summary in summaries {
        for (record, &score) in players.iter_mut().zip(&summary.scores) {
            record.total_score += score;
            record.best_score = record.best_score.max(score);
            if best_match.is_none_or(|(_, best)| score > best) {
                best_match = Some((summary.seed, score));
            }
        }

        match summary.leaders.as_slice() {
            [] => {}
            [winner] => players[*winner].wins += 1,
            tied => {
                for &player in tied {
                    players[player].shared += 1;
                }
            }
        }
    }

    let matches = summaries.len();
    let per_match = |total: usize| {
        if matches == 0 {
            0.0
        } else {
            total as f64 / matches as f64
        }
    };

    for record in &mut players {
        record.average_score = per_match(record.total_score);
    }

    TournamentResult {
        matches,
        first_seed: base.seed,
        players,
        average_steals: per_match(summaries.iter().map(|s| s.steals).sum()),
        average_builds: per_match(summaries.iter().map(|s| s.builds).sum()),
        best_match,
        duration,
        matches_per_second: matches as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
