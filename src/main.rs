//! Yoink - CLI
//!
//! Simulates the word-stealing tile game and explores its dictionary.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use yoink::{
    commands::{list_anagrams, play_match, run_query, run_tournament},
    core::ShuffleMode,
    dictionary::WordIndex,
    game::{
        DEFAULT_MIN_WORD_LENGTH, DEFAULT_PLAYERS, DEFAULT_SEED, MatchConfig, parse_distribution,
        parse_players,
    },
    output::{
        print_anagrams, print_index_summary, print_play_result, print_query_result,
        print_tournament_result,
    },
    wordlists::loader::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "yoink",
    about = "Word-stealing tile game simulator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'starter' (default, embedded) or path to a word-per-line file
    #[arg(short = 'd', long, global = true, default_value = "starter")]
    dictionary: String,

    /// Shortest word that may be built or stolen
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_word_length: usize,
}

/// Options shared by every command that plays matches
#[derive(clap::Args)]
struct MatchArgs {
    /// Seed for the flip order
    #[arg(short, long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    seed: i64,

    /// Comma-separated player names, in turn order
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS.join(","))]
    players: String,

    /// 26 comma-separated letter counts, 'a' first (default: classic 150-tile bag)
    #[arg(long)]
    distribution: Option<String>,

    /// Shuffle: 'replay' (default, matches earlier runs) or 'uniform'
    #[arg(long, default_value_t = ShuffleMode::default().name().to_string())]
    shuffle: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match with turn-by-turn narration (default)
    Play {
        #[command(flatten)]
        game: MatchArgs,

        /// Only print the final standings
        #[arg(short, long)]
        quiet: bool,
    },

    /// Play many matches on consecutive seeds and summarize
    Tournament {
        #[command(flatten)]
        game: MatchArgs,

        /// Number of matches to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// List the dictionary's anagram groups
    Anagrams {
        /// Only show groups with at least this many words
        #[arg(long, default_value = "2")]
        min_size: usize,
    },

    /// Ask what can be built from a pool, or what a word can be stolen into
    Query {
        /// Letters in the pool
        #[arg(long)]
        pool: String,

        /// Word to steal using the pool
        #[arg(long)]
        steal: Option<String>,
    },
}

impl Default for MatchArgs {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            players: DEFAULT_PLAYERS.join(","),
            distribution: None,
            shuffle: ShuffleMode::default().name().to_string(),
        }
    }
}

impl MatchArgs {
    fn to_config(&self) -> Result<MatchConfig> {
        let defaults = MatchConfig::default();
        let distribution = match &self.distribution {
            Some(text) => parse_distribution(text)?,
            None => defaults.distribution,
        };
        let shuffle = ShuffleMode::from_name(&self.shuffle)
            .ok_or_else(|| anyhow!("Unknown shuffle mode '{}'", self.shuffle))?;

        Ok(MatchConfig {
            players: parse_players(&self.players)?,
            distribution,
            seed: self.seed,
            shuffle,
        })
    }
}

/// Load and index the dictionary named by the -d flag
fn load_index(name: &str, min_word_length: usize) -> Result<WordIndex> {
    let words =
        load_dictionary(name).with_context(|| format!("Failed to read dictionary '{name}'"))?;
    let index = WordIndex::build(words, min_word_length);
    print_index_summary(name, &index);
    Ok(index)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let index = load_index(&cli.dictionary, cli.min_word_length)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        game: MatchArgs::default(),
        quiet: false,
    });

    match command {
        Commands::Play { game, quiet } => run_play_command(&index, &game, quiet),
        Commands::Tournament { game, count } => run_tournament_command(&index, &game, count),
        Commands::Anagrams { min_size } => {
            print_anagrams(&list_anagrams(&index, min_size));
            Ok(())
        }
        Commands::Query { pool, steal } => run_query_command(&index, &pool, steal.as_deref()),
    }
}

fn run_play_command(index: &WordIndex, game: &MatchArgs, quiet: bool) -> Result<()> {
    let config = game.to_config()?;
    let played = play_match(index, &config);
    print_play_result(&played, index, !quiet);
    Ok(())
}

fn run_tournament_command(index: &WordIndex, game: &MatchArgs, count: usize) -> Result<()> {
    let config = game.to_config()?;
    println!(
        "Running {count} matches with {} players...",
        config.players.len()
    );
    let result = run_tournament(index, &config, count, true);
    print_tournament_result(&result);
    Ok(())
}

fn run_query_command(index: &WordIndex, pool: &str, steal: Option<&str>) -> Result<()> {
    let result = run_query(index, pool, steal).map_err(|e| anyhow!(e))?;
    print_query_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["yoink", "play"]).unwrap();
        let Some(Commands::Play { game, .. }) = cli.command else {
            panic!("expected play command");
        };

        assert_eq!(game.to_config().unwrap(), MatchConfig::default());
        assert_eq!(cli.min_word_length, DEFAULT_MIN_WORD_LENGTH);
    }

    #[test]
    fn implicit_play_uses_config_defaults() {
        let config = MatchArgs::default().to_config().unwrap();
        assert_eq!(config, MatchConfig::default());
    }
}
