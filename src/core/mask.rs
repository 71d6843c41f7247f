//! Revealed mask of the target word
//!
//! One slot per character of the word. Alphabetic characters start hidden and
//! are revealed by matching guesses; everything else is shown from the start.

use std::fmt;

/// Display symbol for an unrevealed letter
pub const PLACEHOLDER: char = '_';

/// A single position of the mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Letter not found yet
    Hidden,
    /// Original character, accents included
    Shown(char),
}

impl Slot {
    /// Character to display for this slot
    #[inline]
    #[must_use]
    pub const fn display_char(self) -> char {
        match self {
            Self::Hidden => PLACEHOLDER,
            Self::Shown(c) => c,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Revealed state of every position of the word
///
/// Slots only ever go from hidden to shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedMask {
    slots: Vec<Slot>,
}

impl RevealedMask {
    pub(crate) fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// All slots in word order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the slot at `position` is shown
    ///
    /// Out-of-range positions count as not revealed.
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.slots.get(position).is_some_and(|slot| !slot.is_hidden())
    }

    /// True once no placeholder remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.slots.iter().any(|slot| slot.is_hidden())
    }

    /// Number of letters still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_hidden()).count()
    }

    /// Characters as they should be displayed, placeholders included
    pub fn display_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().map(|slot| slot.display_char())
    }

    /// Show the original character at `position`
    pub(crate) fn reveal(&mut self, position: usize, original: char) {
        if let Some(slot) = self.slots.get_mut(position) {
            *slot = Slot::Shown(original);
        }
    }
}

impl fmt::Display for RevealedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.display_chars() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
