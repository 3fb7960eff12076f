//! Query command
//!
//! Asks the dictionary what can be built from a pool, and optionally what a
//! given word could be stolen into.

use crate::core::LetterSet;
use crate::dictionary::WordIndex;

/// Outcome of a steal lookup
pub struct StealAnswer {
    pub word: String,
    pub result: Option<String>,
    /// Pool letters the steal would use
    pub added: Option<LetterSet>,
}

/// Result of a dictionary query
pub struct QueryResult {
    pub pool: LetterSet,
    pub build: Option<String>,
    pub steal: Option<StealAnswer>,
}

/// Query the index for a pool and an optional word to steal
///
/// # Errors
///
/// Returns an error if the pool contains anything but letters, or the word to
/// steal is not in the dictionary.
pub fn run_query(
    index: &WordIndex,
    pool_text: &str,
    steal: Option<&str>,
) -> Result<QueryResult, String> {
    let pool = LetterSet::from_text(&pool_text.trim().to_ascii_lowercase())
        .map_err(|e| format!("Invalid pool: {e}"))?;

    let build = index
        .find_buildable_word(&pool)
        .map(|word| word.text().to_string());

    let steal = steal
        .map(|text| {
            let existing = index
                .find_word(text)
                .ok_or_else(|| format!("'{}' is not in the dictionary", text.trim()))?;
            let candidate = index.find_steal_candidate(existing, &pool);
            Ok::<_, String>(StealAnswer {
                word: existing.text().to_string(),
                result: candidate.map(|c| c.text().to_string()),
                added: candidate.map(|c| c.letters().difference(existing.letters())),
            })
        })
        .transpose()?;

    Ok(QueryResult { pool, build, steal })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> WordIndex {
        WordIndex::build(["cat", "act", "cats", "acts", "rate", "tears"], 3)
    }

    #[test]
    fn query_build_only() {
        let result = run_query(&index(), "TAC", None).unwrap();
        assert_eq!(result.pool, LetterSet::from_text("act").unwrap());
        assert_eq!(result.build.as_deref(), Some("cat"));
        assert!(result.steal.is_none());
    }

    #[test]
    fn query_steal() {
        let result = run_query(&index(), "s", Some("rate")).unwrap();
        assert!(result.build.is_none());

        let steal = result.steal.unwrap();
        assert_eq!(steal.word, "rate");
        assert_eq!(steal.result.as_deref(), Some("tears"));
        assert_eq!(steal.added, Some(LetterSet::from_text("s").unwrap()));
    }

    #[test]
    fn query_steal_blocked() {
        let index = WordIndex::build(["cat", "cats"], 3);
        let steal = run_query(&index, "s", Some("cat")).unwrap().steal.unwrap();
        assert!(steal.result.is_none());
        assert!(steal.added.is_none());
    }

    #[test]
    fn query_rejects_bad_input() {
        assert!(run_query(&index(), "ab1", None).is_err());
        assert!(run_query(&index(), "s", Some("zebra")).is_err());
    }
}
