//! Output formatting
//!
//! Display utilities for the terminal front-end, plus formatters shared with
//! the web pages.

pub mod display;
pub mod formatters;

pub use display::{print_game, print_outcome, print_rejection};
