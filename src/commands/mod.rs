//! Command implementations

pub mod play;
pub mod serve;

pub use play::{PlayConfig, run_play};
pub use serve::run_server;
