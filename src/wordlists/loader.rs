//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordBankError;
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, one word per line
///
/// Blank lines are ignored. Lines that are not valid words are skipped with a warning,
/// so a stray entry does not take the whole list down. Order is preserved.
///
/// # Errors
///
/// Returns `WordBankError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordBankError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordBankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(&content, &path.display().to_string());
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

fn words_from_lines(content: &str, origin: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(origin, line = line_no + 1, entry = trimmed, "skipping word: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::loader::words_from_slice;
/// use daily_wordle::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_lines_skips_blank_and_invalid() {
        let words = words_from_lines("Crane\n\n  slate  \nab\nirat3\nirate\n", "test");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_file_reads_words_in_order() {
        let path = std::env::temp_dir().join(format!(
            "daily_wordle_loader_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "mango\nallow\n\napple").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["mango", "allow", "apple"]);
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, WordBankError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
