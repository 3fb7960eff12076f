//! Command implementations

pub mod anagrams;
pub mod play;
pub mod query;
pub mod tournament;

pub use anagrams::list_anagrams;
pub use play::{PlayResult, play_match};
pub use query::{QueryResult, StealAnswer, run_query};
pub use tournament::{PlayerRecord, TournamentResult, run_tournament};
