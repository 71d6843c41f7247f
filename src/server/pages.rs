//! Server-rendered HTML pages

use crate::core::{Game, Status};
use crate::output::formatters::{ALPHABET, lives_bar, spaced_mask};
use std::fmt::Write;

/// Escape text for use inside HTML content and attribute values
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; text-align: center; }}
.mask {{ font-family: monospace; font-size: 2rem; white-space: pre; }}
.lives {{ color: #c0392b; font-size: 1.5rem; }}
.keyboard button {{ width: 2.5rem; margin: 0.15rem; }}
.won {{ color: #27ae60; }}
.lost {{ color: #c0392b; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// Start page asking for the player's name
#[must_use]
pub fn index_page() -> String {
    layout(
        "Jeu du pendu",
        r#"<h1>Jeu du pendu</h1>
<form method="post" action="/start">
<label for="player">Votre nom :</label>
<input id="player" name="player" maxlength="40" autofocus>
<button type="submit">Commencer</button>
</form>"#,
    )
}

/// Board of a game in progress or just finished
#[must_use]
pub fn game_page(game: &Game) -> String {
    let mut body = String::new();
    let over = game.status().is_over();

    // Writing to a String cannot fail
    let _ = writeln!(body, "<h1>Jeu du pendu</h1>");
    let _ = writeln!(body, "<p>Joueur : <strong>{}</strong></p>", escape_html(game.player()));
    let _ = writeln!(
        body,
        r#"<p class="mask">{}</p>"#,
        escape_html(&spaced_mask(game.mask()))
    );
    let _ = writeln!(
        body,
        r#"<p class="lives" title="{lives}/{max}">{bar}</p>
<p>Erreurs : {wrong}/{max}</p>"#,
        lives = game.lives(),
        max = game.max_lives(),
        bar = lives_bar(game.lives(), game.max_lives()),
        wrong = game.wrong_guesses(),
    );

    match game.status() {
        Status::Won => {
            let _ = writeln!(
                body,
                r#"<p class="won">Bravo, vous avez trouvé « {} » !</p>"#,
                escape_html(game.word().text())
            );
        }
        Status::Lost => {
            let _ = writeln!(
                body,
                r#"<p class="lost">Perdu ! Le mot était « {} ».</p>"#,
                escape_html(game.word().text())
            );
        }
        Status::Playing => {}
    }

    let _ = writeln!(body, r#"<form class="keyboard" method="post" action="/guess">"#);
    for letter in ALPHABET {
        let disabled = if over || game.has_guessed(letter) {
            " disabled"
        } else {
            ""
        };
        let _ = writeln!(
            body,
            r#"<button type="submit" name="letter" value="{value}"{disabled}>{letter}</button>"#,
            value = letter.to_ascii_lowercase(),
        );
    }
    let _ = writeln!(body, "</form>");

    let _ = writeln!(
        body,
        r#"<form method="post" action="/restart"><button type="submit">Recommencer</button></form>"#
    );

    layout("Jeu du pendu", &body)
}
