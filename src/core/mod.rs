//! Core domain types for hangman
//!
//! This module contains the game rules with no I/O: character normalization,
//! word preparation, guess evaluation and the game state machine.
//! Everything here is synchronous and deterministic.

mod game;
mod guess;
mod mask;
mod normalize;
mod word;

pub use game::{
    DEFAULT_MAX_LIVES, DEFAULT_PLAYER, Game, GameSlot, GuessResult, Rejection, Status,
    player_name_or_default,
};
pub use guess::{Guess, Outcome};
pub use mask::{PLACEHOLDER, RevealedMask, Slot};
pub use normalize::{NormalizedForm, normalize};
pub use word::{Word, WordError};
