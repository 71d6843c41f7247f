//! Word list loading utilities
//!
//! Word list files are UTF-8 text with one word per line. Surrounding
//! whitespace is trimmed and blank lines are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use pendu::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionnaire.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Parse newline-delimited words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use pendu::wordlists::loader::words_from_slice;
/// use pendu::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s.trim()).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_words() {
        let input = &["forêt", "cœur", "arc-en-ciel"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "forêt");
        assert_eq!(words[1].text(), "cœur");
        assert_eq!(words[2].text(), "arc-en-ciel");
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let words = words_from_slice(&["été", "", "  ", "île"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "île");
    }

    #[test]
    fn words_from_text_trims_and_skips_blank_lines() {
        let words = words_from_text("  forêt \n\n\r\nmaïs\r\n   \npomme de terre\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["forêt", "maïs", "pomme de terre"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/nonexistent/pendu/words.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("pendu-loader-{}.txt", std::process::id()));
        fs::write(&path, "château\n\nnœud\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "château");
        assert_eq!(words[1].text(), "nœud");
    }
}
