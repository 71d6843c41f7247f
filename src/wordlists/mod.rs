//! Word lists for hangman
//!
//! Provides the embedded default dictionary and a [`WordSource`] that draws
//! the word for each new game.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io;
use std::path::Path;

/// Word used when the list has nothing to offer
pub const FALLBACK_WORD: &str = "test";

const _: () = assert!(!FALLBACK_WORD.is_empty());

/// Pool of candidate words
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<Word>,
}

impl WordSource {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Source backed by the dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(DICTIONARY))
    }

    /// Source backed by a word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly at random
    ///
    /// An empty source yields [`FALLBACK_WORD`].
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        match self.words.choose(rng) {
            Some(word) => word.clone(),
            None => {
                log::warn!("word list is empty, using fallback word");
                fallback_word()
            }
        }
    }
}

fn fallback_word() -> Word {
    Word::from_static(FALLBACK_WORD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_trimmed_and_non_empty() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn dictionary_has_letters_in_every_word() {
        for &word in DICTIONARY {
            assert!(
                word.chars().any(char::is_alphabetic),
                "Word '{word}' has nothing to guess"
            );
        }
    }

    #[test]
    fn embedded_source_uses_whole_dictionary() {
        assert_eq!(WordSource::embedded().len(), DICTIONARY_COUNT);
    }

    #[test]
    fn empty_source_falls_back() {
        let source = WordSource::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(7);
        assert!(source.is_empty());
        let word = source.choose(&mut rng);
        assert_eq!(word.text(), FALLBACK_WORD);
        assert_eq!(word, Word::new(FALLBACK_WORD).unwrap());
    }

    #[test]
    fn choose_returns_listed_word() {
        let source = WordSource::new(loader::words_from_slice(&["forêt", "cœur", "île"]));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let word = source.choose(&mut rng);
            assert!(["forêt", "cœur", "île"].contains(&word.text()));
        }
    }

    #[test]
    fn single_word_source_is_deterministic() {
        let source = WordSource::new(loader::words_from_slice(&["forêt"]));
        assert_eq!(source.choose(&mut rand::rng()).text(), "forêt");
    }
}
