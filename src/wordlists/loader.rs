//! Word list loading utilities
//!
//! Reads newline-delimited word lists from files or readers. Lines are only
//! trimmed here; validation happens when the dictionary is built.

use super::STARTER;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use yoink::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    words_from_reader(BufReader::new(file))
}

/// Read one word per line, skipping blank lines
///
/// # Errors
///
/// Returns an I/O error if reading fails or a line is not valid UTF-8.
pub fn words_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_string());
        }
    }
    Ok(words)
}

/// Resolve a dictionary name: "starter" for the embedded list, otherwise a path
///
/// # Errors
///
/// Returns an I/O error if the path cannot be read.
pub fn load_dictionary(name: &str) -> io::Result<Vec<String>> {
    match name {
        "starter" => Ok(STARTER.iter().map(ToString::to_string).collect()),
        path => load_from_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_skips_blank_lines() {
        let input = Cursor::new("cat\n\n  dog  \r\n\t\nbird");
        let words = words_from_reader(input).unwrap();
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn reader_empty() {
        let words = words_from_reader(Cursor::new("")).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let input = Cursor::new(vec![b'c', b'a', 0xff, b'\n']);
        assert!(words_from_reader(input).is_err());
    }

    #[test]
    fn starter_dictionary_by_name() {
        let words = load_dictionary("starter").unwrap();
        assert_eq!(words.len(), STARTER.len());
    }

    #[test]
    fn missing_file_is_an_error() {
        let error = load_dictionary("/nonexistent/yoink/words.txt").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}
