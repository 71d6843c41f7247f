//! Hangman
//!
//! A hangman word game served over HTTP, where guessing a plain letter also
//! uncovers its accented forms and the letters of the `œ`/`æ` ligatures.
//!
//! # Quick Start
//!
//! ```rust
//! use pendu::core::{Game, Status, Word};
//!
//! let mut game = Game::start("Zoé", Word::new("forêt").unwrap(), 5);
//! game.submit_guess("e");
//! assert_eq!(game.mask().to_string(), "___ê_");
//!
//! for letter in ["f", "o", "r", "t"] {
//!     game.submit_guess(letter);
//! }
//! assert_eq!(game.status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// HTTP front-end
pub mod server;
