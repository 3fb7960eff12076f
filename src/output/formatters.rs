//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Format a letter multiset, or "-" when it is empty
#[must_use]
pub fn format_pool(pool: &LetterSet) -> String {
    if pool.is_empty() {
        "-".to_string()
    } else {
        pool.to_string()
    }
}

/// Join words with spaces, or "(none)" when there are none
#[must_use]
pub fn format_words<S: AsRef<str>>(words: &[S]) -> String {
    if words.is_empty() {
        return "(none)".to_string();
    }
    words.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_formats_sorted_letters() {
        let pool = LetterSet::from_text("tsae").unwrap();
        assert_eq!(format_pool(&pool), "aest");
        assert_eq!(format_pool(&LetterSet::EMPTY), "-");
    }

    #[test]
    fn words_join_with_spaces() {
        assert_eq!(format_words(&["tears", "cat"]), "tears cat");
        assert_eq!(format_words::<&str>(&[]), "(none)");
        assert_eq!(format_words(&["solo".to_string()]), "solo");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
