//! Character normalization for accent-insensitive matching
//!
//! Every display character maps to a comparison form: lower-cased, canonically
//! decomposed with combining marks dropped, and with the two French ligatures
//! expanded to their letter pairs. Guesses and word positions are compared
//! through this form only; the original characters are kept for display.

use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Ligatures that canonical decomposition leaves intact
const LIGATURES: [(&str, &str); 2] = [("œ", "oe"), ("æ", "ae")];

/// Comparison form of a single character
///
/// Usually one base letter (`é` → `e`), two letters for a ligature (`œ` → `oe`),
/// or the character itself for anything that is not a letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedForm(String);

impl NormalizedForm {
    /// Normalize a single character
    ///
    /// # Examples
    /// ```
    /// use pendu::core::NormalizedForm;
    ///
    /// assert_eq!(NormalizedForm::of('É').as_str(), "e");
    /// assert_eq!(NormalizedForm::of('Œ').as_str(), "oe");
    /// assert_eq!(NormalizedForm::of('-').as_str(), "-");
    /// ```
    #[must_use]
    pub fn of(c: char) -> Self {
        let lowered: String = c.to_lowercase().collect();

        if let Some(&(_, expanded)) = LIGATURES.iter().find(|(lig, _)| *lig == lowered) {
            return Self(expanded.to_string());
        }

        Self(lowered.nfd().filter(|&ch| !is_combining_mark(ch)).collect())
    }

    /// Get the form as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for characters made only of combining marks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether `other` occurs inside this form
    ///
    /// A single letter matches either half of a ligature form, so `o` and `e`
    /// both match `oe`. An empty form matches nothing.
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        !other.is_empty() && self.0.contains(other.as_str())
    }
}

impl fmt::Display for NormalizedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a single character, see [`NormalizedForm::of`]
#[inline]
#[must_use]
pub fn normalize(c: char) -> NormalizedForm {
    NormalizedForm::of(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_letters_lowercase() {
        assert_eq!(normalize('a').as_str(), "a");
        assert_eq!(normalize('Z').as_str(), "z");
    }

    #[test]
    fn accented_variants_match_base_letter() {
        let variants = [
            ('e', "éèêëÉÈÊË"),
            ('a', "àâäáãåÀÂÄ"),
            ('i', "îïíìÎÏ"),
            ('o', "ôöóòõÔÖ"),
            ('u', "ùûüúÙÛÜ"),
            ('c', "çÇ"),
            ('n', "ñÑ"),
            ('y', "ÿý"),
        ];

        for (base, accented) in variants {
            for v in accented.chars() {
                assert_eq!(normalize(v), normalize(base), "{v} should normalize to {base}");
            }
        }
    }

    #[test]
    fn ligatures_expand() {
        assert_eq!(normalize('œ').as_str(), "oe");
        assert_eq!(normalize('Œ').as_str(), "oe");
        assert_eq!(normalize('æ').as_str(), "ae");
        assert_eq!(normalize('Æ').as_str(), "ae");
    }

    #[test]
    fn non_letters_are_identity() {
        assert_eq!(normalize('-').as_str(), "-");
        assert_eq!(normalize('\'').as_str(), "'");
        assert_eq!(normalize(' ').as_str(), " ");
        assert_eq!(normalize('7').as_str(), "7");
    }

    #[test]
    fn multi_codepoint_lowercase_is_stripped() {
        // 'İ' lower-cases to "i" followed by a combining dot above
        assert_eq!(normalize('İ').as_str(), "i");
    }

    #[test]
    fn lone_combining_mark_normalizes_to_empty() {
        assert_eq!(normalize('\u{0301}').as_str(), "");
    }

    #[test]
    fn renormalizing_plain_letters_is_stable() {
        for c in "àéîõüçœæxyz".chars() {
            let form = normalize(c);
            let again: String = form
                .as_str()
                .chars()
                .map(|ch| normalize(ch).as_str().to_string())
                .collect();
            assert_eq!(again, form.as_str());
        }
    }

    #[test]
    fn total_over_unicode_samples() {
        for c in ['\0', '\u{FFFD}', '😀', '中', 'ß', 'ﬁ', '\u{10FFFF}'] {
            let _ = normalize(c);
        }
    }

    #[test]
    fn contains_matches_ligature_halves() {
        let oe = normalize('œ');
        assert!(oe.contains(&normalize('o')));
        assert!(oe.contains(&normalize('e')));
        assert!(!oe.contains(&normalize('a')));
    }

    #[test]
    fn empty_form_is_never_contained() {
        let mark = normalize('\u{0345}');
        assert!(mark.is_empty());
        assert!(!normalize('e').contains(&mark));
        assert!(!mark.contains(&mark));
    }
}
