//! Match events and results

use crate::core::{LetterSet, WordId};

/// What a player did on a successful turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    /// Took `stolen` from player `victim`, adding `added` from the pool to
    /// make `result`
    Steal {
        victim: usize,
        stolen: WordId,
        added: LetterSet,
        result: WordId,
    },
    /// Made `word` entirely from pool letters
    Build { word: WordId },
}

/// Everything that happens during a match, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// A letter was flipped; `pool` is the pool after adding it
    Flip { turn: usize, letter: u8, pool: LetterSet },
    /// A player acted
    Action { player: usize, action: TurnAction },
    /// No player can act until the next flip; `holdings[p]` lists player
    /// `p`'s words
    Settled {
        turn: usize,
        holdings: Vec<Vec<WordId>>,
    },
}

/// A player's final position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub score: usize,
    /// Owned words, longest first
    pub words: Vec<String>,
}

/// Outcome of a full match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub events: Vec<MatchEvent>,
    /// One entry per player, in turn order
    pub standings: Vec<Standing>,
}

impl MatchResult {
    /// Number of steals during the match
    #[must_use]
    pub fn steals(&self) -> usize {
        self.count_actions(|action| matches!(action, TurnAction::Steal { .. }))
    }

    /// Number of words built from the pool during the match
    #[must_use]
    pub fn builds(&self) -> usize {
        self.count_actions(|action| matches!(action, TurnAction::Build { .. }))
    }

    /// Number of letters flipped
    #[must_use]
    pub fn flips(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, MatchEvent::Flip { .. }))
            .count()
    }

    /// Players sharing the top score (empty if there are no players)
    #[must_use]
    pub fn leaders(&self) -> Vec<usize> {
        let Some(best) = self.standings.iter().map(|s| s.score).max() else {
            return Vec::new();
        };
        self.standings
            .iter()
            .enumerate()
            .filter(|(_, standing)| standing.score == best)
            .map(|(player, _)| player)
            .collect()
    }

    fn count_actions(&self, keep: impl Fn(&TurnAction) -> bool) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, MatchEvent::Action { action, .. } if keep(action)))
            .count()
    }
}
