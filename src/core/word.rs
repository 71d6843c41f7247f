//! Hangman target word and its initial game layout
//!
//! A Word keeps the characters exactly as they appear in the word list so that
//! revealed positions show their accents.

use super::mask::{RevealedMask, Slot};
use super::normalize::{NormalizedForm, normalize};
use std::fmt;

/// Word to guess, stored as display characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one character"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Case, accents, spaces and punctuation are kept as given.
    ///
    /// # Errors
    /// Returns `WordError::Empty` for an empty string.
    ///
    /// # Examples
    /// ```
    /// use pendu::core::Word;
    ///
    /// let word = Word::new("forêt").unwrap();
    /// assert_eq!(word.len(), 5);
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Build a word from a string known to be non-empty at compile time
    pub(crate) fn from_static(text: &'static str) -> Self {
        debug_assert!(!text.is_empty());
        Self {
            text: text.to_string(),
            chars: text.chars().collect(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the display characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false, kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Build the initial mask and the per-position comparison forms
    ///
    /// Letters start hidden; spaces, hyphens and apostrophes are shown right
    /// away. Both outputs have exactly `self.len()` entries.
    #[must_use]
    pub fn prepare(&self) -> (RevealedMask, Vec<NormalizedForm>) {
        let slots = self
            .chars
            .iter()
            .map(|&c| {
                if c.is_alphabetic() {
                    Slot::Hidden
                } else {
                    Slot::Shown(c)
                }
            })
            .collect();
        let forms = self.chars.iter().map(|&c| normalize(c)).collect();

        (RevealedMask::new(slots), forms)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
