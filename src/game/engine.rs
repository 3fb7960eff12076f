//! Match engine
//!
//! Owns the pool and the players for one match, flips letters in order and
//! resolves turns. Steals are always tried before builds.

use super::config::MatchConfig;
use super::event::{MatchEvent, MatchResult, Standing, TurnAction};
use super::player::Player;
use crate::core::{LetterError, LetterSet, WordEntry};
use crate::dictionary::WordIndex;
use rustc_hash::FxHashSet;

/// A single match in progress
///
/// The dictionary is borrowed read-only, so any number of matches can share
/// one index.
pub struct Match<'a> {
    index: &'a WordIndex,
    flips: Vec<u8>,
    flipped: usize,
    pool: LetterSet,
    players: Vec<Player>,
    events: Vec<MatchEvent>,
}

impl<'a> Match<'a> {
    /// Create a match that will flip `flips` (letters `a..=z`) in order
    ///
    /// # Errors
    /// Returns `LetterError` if a flip is not a letter `a..=z`, or one letter
    /// is flipped more than 255 times.
    ///
    /// # Examples
    /// ```
    /// use yoink::dictionary::WordIndex;
    /// use yoink::game::Match;
    ///
    /// let index = WordIndex::build(["cat", "tac"], 3);
    /// let result = Match::new(&index, b"cat".to_vec(), ["Alice", "Bob"])
    ///     .unwrap()
    ///     .run();
    ///
    /// assert_eq!(result.builds(), 1);
    /// assert_eq!(result.standings[1].words, vec!["cat"]);
    /// ```
    pub fn new<I, S>(
        index: &'a WordIndex,
        flips: Vec<u8>,
        names: I,
    ) -> Result<Self, LetterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Pool counts never exceed the flipped counts checked here
        LetterSet::from_bytes(&flips)?;
        Ok(Self::with_flips(index, flips, names))
    }

    /// Create a match from a configuration
    #[must_use]
    pub fn from_config(index: &'a WordIndex, config: &MatchConfig) -> Self {
        // The distribution already bounds every letter count
        Self::with_flips(index, config.flip_order(), config.players.iter().cloned())
    }

    fn with_flips<I, S>(index: &'a WordIndex, flips: Vec<u8>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            index,
            flips,
            flipped: 0,
            pool: LetterSet::EMPTY,
            players: names.into_iter().map(Player::new).collect(),
            events: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &LetterSet {
        &self.pool
    }

    #[inline]
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[inline]
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Letters flipped so far, in order
    #[inline]
    #[must_use]
    pub fn flipped(&self) -> &[u8] {
        &self.flips[..self.flipped]
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.flipped == self.flips.len()
    }

    /// Let `player` take at most one action
    ///
    /// Opponents are tried in turn order starting after `player`, each
    /// opponent's longest words first. The first word that can be stolen is
    /// stolen. Only if nothing can be stolen does the player build the longest
    /// word the pool allows.
    ///
    /// # Panics
    /// Panics if `player` is out of range
    pub fn attempt_turn(&mut self, player: usize) -> Option<TurnAction> {
        let index = self.index;

        let action = if let Some((victim, stolen, result)) = self.find_steal(player) {
            let added = result.letters().difference(stolen.letters());
            self.pool.remove(&added);
            self.players[victim].release(stolen.id());
            self.players[player].claim(result, index);
            TurnAction::Steal {
                victim,
                stolen: stolen.id(),
                added,
                result: result.id(),
            }
        } else {
            let word = index.find_buildable_word(&self.pool)?;
            self.pool.remove(word.letters());
            self.players[player].claim(word, index);
            TurnAction::Build { word: word.id() }
        };

        self.events.push(MatchEvent::Action {
            player,
            action: action.clone(),
        });
        Some(action)
    }

    /// First stealable word among `player`'s opponents
    ///
    /// Returns the victim, the word to steal and the word it becomes.
    fn find_steal(&self, player: usize) -> Option<(usize, &'a WordEntry, &'a WordEntry)> {
        let index = self.index;
        let count = self.players.len();

        (1..count)
            .map(|offset| (player + offset) % count)
            .find_map(|victim| {
                self.players[victim].words().iter().find_map(|&id| {
                    let existing = index.entry(id);
                    index
                        .find_steal_candidate(existing, &self.pool)
                        .map(|result| (victim, existing, result))
                })
            })
    }

    /// Flip the next letter and resolve turns until nobody can act
    ///
    /// Returns false once every letter has been flipped.
    pub fn step(&mut self) -> bool {
        let Some(&letter) = self.flips.get(self.flipped) else {
            return false;
        };
        let turn = self.flipped;
        self.flipped += 1;

        self.pool.add_letter(letter);
        self.events.push(MatchEvent::Flip {
            turn,
            letter,
            pool: self.pool,
        });

        self.resolve_turns(turn);

        self.events.push(MatchEvent::Settled {
            turn,
            holdings: self
                .players
                .iter()
                .map(|player| player.words().to_vec())
                .collect(),
        });
        true
    }

    /// Offer turns round-robin until every player has failed in a row
    fn resolve_turns(&mut self, turn: usize) {
        let count = self.players.len();
        if count == 0 {
            return;
        }

        let mut idle: FxHashSet<usize> = FxHashSet::default();
        let mut player = (turn + 1) % count;
        while idle.len() < count {
            if self.attempt_turn(player).is_some() {
                // someone who failed before may succeed now
                idle.clear();
            } else {
                idle.insert(player);
            }
            player = (player + 1) % count;
        }
    }

    /// Current score and words of every player, in turn order
    #[must_use]
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|player| Standing {
                name: player.name().to_string(),
                score: player.score(self.index),
                words: player
                    .word_texts(self.index)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }

    /// Play every remaining flip and report the outcome
    #[must_use]
    pub fn run(mut self) -> MatchResult {
        while self.step() {}

        MatchResult {
            standings: self.standings(),
            events: self.events,
        }
    }
}
