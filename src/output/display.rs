//! Display functions for command results

use super::formatters::{create_progress_bar, format_pool, format_words};
use crate::commands::{PlayResult, QueryResult, TournamentResult};
use crate::dictionary::WordIndex;
use crate::game::{MatchEvent, MatchResult, Standing, TurnAction};
use colored::Colorize;

const TURN_INDENT: &str = "   ";

/// Print what went into the dictionary
pub fn print_index_summary(source: &str, index: &WordIndex) {
    let stats = index.stats();
    println!(
        "📚 Dictionary: {} ({} words, {} anagram groups, min length {})",
        source.bright_yellow(),
        index.len(),
        index.group_count(),
        index.min_word_length()
    );

    if stats.too_short + stats.invalid + stats.duplicates > 0 {
        println!(
            "   {}",
            format!(
                "skipped {} too short, {} invalid, {} duplicate",
                stats.too_short, stats.invalid, stats.duplicates
            )
            .bright_black()
        );
    }
}

/// Print the result of playing a match
pub fn print_play_result(played: &PlayResult, index: &WordIndex, narrate: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Match with seed {}",
        played.seed.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if narrate {
        print_match_events(&played.result, index);
    }

    print_standings(&played.result);

    println!(
        "\n   {} steals, {} new words, {} flips in {:.2}ms",
        played.result.steals(),
        played.result.builds(),
        played.result.flips(),
        played.duration.as_secs_f64() * 1000.0
    );
}

/// Narrate every flip and action of a match
pub fn print_match_events(result: &MatchResult, index: &WordIndex) {
    let name = |player: usize| result.standings[player].name.as_str();

    for event in &result.events {
        match event {
            MatchEvent::Flip { turn, letter, pool } => {
                println!(
                    "\nturn {turn}: flipped '{}', letters in play: '{}'",
                    (*letter as char).to_string().bright_yellow().bold(),
                    format_pool(pool)
                );
            }
            MatchEvent::Action { player, action } => match action {
                TurnAction::Steal {
                    victim,
                    stolen,
                    added,
                    result,
                } => println!(
                    "{TURN_INDENT}{} {} steals '{}' from {} using new letters '{}' to create '{}'",
                    "STEAL!".red().bold(),
                    name(*player).bold(),
                    index.entry(*stolen).text(),
                    name(*victim).bold(),
                    added,
                    index.entry(*result).text().bright_green()
                ),
                TurnAction::Build { word } => println!(
                    "{TURN_INDENT}{} {} makes word '{}'",
                    "NEW WORD!".green().bold(),
                    name(*player).bold(),
                    index.entry(*word).text().bright_green()
                ),
            },
            MatchEvent::Settled { holdings, .. } => {
                for (player, words) in holdings.iter().enumerate() {
                    let texts: Vec<&str> = words.iter().map(|&id| index.entry(id).text()).collect();
                    println!(
                        "{TURN_INDENT}{}: {}",
                        name(player),
                        format_words(&texts).bright_black()
                    );
                }
            }
        }
    }
}

/// Print final scores, leaders highlighted
pub fn print_standings(result: &MatchResult) {
    println!("\n🏆 {}", "Final Standings".bright_cyan().bold());

    if result.standings.is_empty() {
        println!("   No players");
        return;
    }

    let leaders = result.leaders();
    for (player, Standing { name, score, words }) in result.standings.iter().enumerate() {
        let line = format!("{name:<12} score: {score:3}");
        if leaders.contains(&player) {
            println!("   {}  words: {}", line.green().bold(), format_words(words));
        } else {
            println!("   {line}  words: {}", format_words(words));
        }
    }
}

/// Print anagram groups, one per line
pub fn print_anagrams(groups: &[Vec<&str>]) {
    for group in groups {
        println!("{}", group.join(" "));
    }
    println!(
        "\n{}",
        format!("{} anagram groups", groups.len()).bright_black()
    );
}

/// Print the answer to a dictionary query
pub fn print_query_result(result: &QueryResult) {
    println!("\n🔎 Pool: '{}'", format_pool(&result.pool).bright_yellow());

    match &result.build {
        Some(word) => println!("   Longest new word: {}", word.bright_green().bold()),
        None => println!("   Longest new word: {}", "none".bright_black()),
    }

    if let Some(steal) = &result.steal {
        match (&steal.result, &steal.added) {
            (Some(word), Some(added)) => println!(
                "   Steal '{}' using '{}' to create {}",
                steal.word,
                added,
                word.bright_green().bold()
            ),
            _ => println!(
                "   Steal '{}': {}",
                steal.word,
                "no candidate".bright_black()
            ),
        }
    }
}

/// Print tournament statistics
pub fn print_tournament_result(result: &TournamentResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOURNAMENT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Matches:".bright_cyan().bold());
    println!("   Matches played:   {}", result.matches);
    println!(
        "   Seeds:            {}..{}",
        result.first_seed,
        result.first_seed.wrapping_add(result.matches as i64)
    );
    println!("   Avg steals:       {:.2}", result.average_steals);
    println!("   Avg new words:    {:.2}", result.average_builds);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Matches/second:   {:.1}", result.matches_per_second);

    println!("\n🏆 {}", "Players:".bright_cyan().bold());
    let top_average = result
        .players
        .iter()
        .map(|p| p.average_score)
        .fold(0.0_f64, f64::max);
    for record in &result.players {
        let bar = create_progress_bar(record.average_score, top_average, 30);
        println!(
            "   {:<12} {} avg {}  wins {:3}  shared {:3}  best {:3}",
            record.name,
            bar.green(),
            format!("{:6.2}", record.average_score).bright_yellow(),
            record.wins,
            record.shared,
            record.best_score
        );
    }

    if let Some((seed, score)) = result.best_match {
        println!(
            "\n✨ Best single score: {} (seed {seed})",
            score.to_string().green().bold()
        );
    }
}
