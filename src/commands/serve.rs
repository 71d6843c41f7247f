//! HTTP server command

use crate::server::{ServerConfig, serve};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};

/// Run the web server on a fresh Tokio runtime until Ctrl-C
///
/// # Errors
///
/// Returns an error if the runtime cannot be created or the server fails to
/// bind or run.
pub fn run_server(config: &ServerConfig, words: WordSource) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime
        .block_on(serve(config, words))
        .with_context(|| format!("server on {} failed", config.bind))
}
