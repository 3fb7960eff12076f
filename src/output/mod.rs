//! Terminal output formatting
//!
//! Match narration and pretty-printing of command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_anagrams, print_index_summary, print_match_events, print_play_result,
    print_query_result, print_standings, print_tournament_result,
};
