//! Guess parsing and evaluation
//!
//! A guess is a single alphabetic character. It is compared against the word
//! through its normalized form, so `e` uncovers `é`, `è`, `ê` and `ë` alike,
//! and both `o` and `e` uncover `œ`.

use super::mask::RevealedMask;
use super::normalize::{NormalizedForm, normalize};
use super::word::Word;
use unicode_normalization::char::is_combining_mark;

/// A validated letter guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    letter: char,
    form: NormalizedForm,
}

impl Guess {
    /// Parse raw user input into a guess
    ///
    /// Input is trimmed and lower-cased first. Returns `None` unless exactly one
    /// alphabetic character remains. Combining marks are refused even when
    /// Unicode counts them as alphabetic, since they normalize to nothing.
    ///
    /// # Examples
    /// ```
    /// use pendu::core::Guess;
    ///
    /// assert_eq!(Guess::parse(" E ").unwrap().form().as_str(), "e");
    /// assert!(Guess::parse("ab").is_none());
    /// assert!(Guess::parse("-").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        let mut chars = lowered.chars();

        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if !letter.is_alphabetic() || is_combining_mark(letter) {
            return None;
        }

        let form = normalize(letter);
        if form.is_empty() {
            return None;
        }
        Some(Self { letter, form })
    }

    /// The guessed letter, lower-cased
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Comparison form of the letter
    #[inline]
    #[must_use]
    pub fn form(&self) -> &NormalizedForm {
        &self.form
    }

    pub(crate) fn into_form(self) -> NormalizedForm {
        self.form
    }
}

/// Effect of one evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Positions uncovered by this guess, ascending
    pub revealed: Vec<usize>,
    /// True when nothing in the word matched
    pub was_miss: bool,
}

/// Reveal every position whose form contains `form`
///
/// All matching positions are uncovered at once using the word's original
/// characters. Positions already shown are counted again but stay unchanged.
pub(crate) fn evaluate(
    form: &NormalizedForm,
    word: &Word,
    forms: &[NormalizedForm],
    mask: &mut RevealedMask,
) -> Outcome {
    let revealed: Vec<usize> = forms
        .iter()
        .enumerate()
        .filter(|(_, position_form)| position_form.contains(form))
        .map(|(i, _)| i)
        .collect();

    for &i in &revealed {
        mask.reveal(i, word.chars()[i]);
    }

    Outcome {
        was_miss: revealed.is_empty(),
        revealed,
    }
}
