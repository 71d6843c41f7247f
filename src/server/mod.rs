//! HTTP front-end
//!
//! Routes:
//! - `GET /` start page
//! - `POST /start` new game for the submitted player name
//! - `GET /game` current board, or back to `/` without a game
//! - `POST /guess` play one letter
//! - `POST /restart` drop the game

pub mod pages;
mod routes;
pub mod session;

use crate::wordlists::WordSource;
use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use session::SessionStore;
use std::net::SocketAddr;
use std::sync::Arc;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Resolved server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub max_lives: u32,
}

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub words: Arc<WordSource>,
    pub max_lives: u32,
}

impl AppState {
    #[must_use]
    pub fn new(words: WordSource, max_lives: u32) -> Self {
        Self {
            sessions: SessionStore::new(),
            words: Arc::new(words),
            max_lives,
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/start", post(routes::start))
        .route("/game", get(routes::game))
        .route("/guess", post(routes::guess))
        .route("/restart", post(routes::restart))
        .with_state(state)
        .layer(middleware::from_fn(session::session_cookie))
}

/// Serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &ServerConfig, words: WordSource) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    log::info!(
        "listening on http://{} ({} words, {} lives)",
        listener.local_addr()?,
        words.len(),
        config.max_lives
    );

    let app = router(AppState::new(words, config.max_lives));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
