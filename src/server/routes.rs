//! Request handlers
//!
//! Every mutating endpoint answers with a redirect, so reloading the board
//! never replays a guess.

use super::AppState;
use super::pages::{game_page, index_page};
use super::session::SessionId;
use crate::core::{Game, GuessResult, Rejection, player_name_or_default};
use axum::Form;
use axum::extract::{Extension, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StartForm {
    #[serde(default)]
    player: String,
}

#[derive(Debug, Deserialize)]
pub struct GuessForm {
    #[serde(default)]
    letter: String,
}

pub async fn index() -> Html<String> {
    Html(index_page())
}

pub async fn start(
    State(app): State<AppState>,
    Extension(id): Extension<SessionId>,
    Form(form): Form<StartForm>,
) -> Redirect {
    let player = player_name_or_default(&form.player);
    let word = app.words.choose(&mut rand::rng());

    log::info!(
        "session {id}: new game for {player} ({} characters)",
        word.len()
    );
    app.sessions.with_slot(id, |slot| {
        slot.start(player, word, app.max_lives);
    });

    Redirect::to("/game")
}

pub async fn game(State(app): State<AppState>, Extension(id): Extension<SessionId>) -> Response {
    let slot = app.sessions.snapshot(id);
    match slot.game() {
        Some(game) => Html(game_page(game)).into_response(),
        None => Redirect::to("/").into_response(),
    }
}

pub async fn guess(
    State(app): State<AppState>,
    Extension(id): Extension<SessionId>,
    Form(form): Form<GuessForm>,
) -> Redirect {
    let (result, status) = app
        .sessions
        .with_existing(id, |slot| {
            let result = slot.submit_guess(&form.letter);
            (result, slot.game().map(Game::status))
        })
        .unwrap_or((GuessResult::Rejected(Rejection::NoActiveGame), None));

    match result {
        GuessResult::Applied(outcome) => log::debug!(
            "session {id}: guess {:?} revealed {} position(s), status {}",
            form.letter,
            outcome.revealed.len(),
            status.map_or("none", |s| s.as_str())
        ),
        GuessResult::Rejected(rejection) => {
            log::debug!("session {id}: guess {:?} ignored, {rejection}", form.letter);
        }
    }

    Redirect::to("/game")
}

pub async fn restart(State(app): State<AppState>, Extension(id): Extension<SessionId>) -> Redirect {
    if app.sessions.remove(id) {
        log::debug!("session {id}: game reset");
    }
    Redirect::to("/")
}
