//! Terminal display of a game in progress

use super::formatters::{ALPHABET, lives_bar, spaced_mask};
use crate::core::{Game, Rejection, Status};
use colored::Colorize;

/// Print the board: word, lives and the letters still available
pub fn print_game(game: &Game) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "  {}",
        spaced_mask(game.mask()).bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "  Vies:    {} {}",
        lives_bar(game.lives(), game.max_lives()).red(),
        format!("({}/{})", game.lives(), game.max_lives()).bright_black()
    );

    let keyboard: Vec<String> = ALPHABET
        .iter()
        .map(|&letter| {
            if game.has_guessed(letter) {
                letter.to_string().bright_black().strikethrough().to_string()
            } else {
                letter.to_string().bright_yellow().to_string()
            }
        })
        .collect();
    println!("  Lettres: {}", keyboard.join(" "));
}

/// Print the end-of-game banner
pub fn print_outcome(game: &Game) {
    match game.status() {
        Status::Won => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "  {}",
                format!("🎉 Bravo {} ! Mot trouvé : {}", game.player(), game.word())
                    .bright_green()
                    .bold()
            );
            println!(
                "  {} erreur(s), {} vie(s) restante(s)",
                game.wrong_guesses(),
                game.lives()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        Status::Lost => {
            println!("\n{}", "═".repeat(60).red());
            println!(
                "  {}",
                format!("💀 Perdu, {} ! Le mot était : {}", game.player(), game.word())
                    .red()
                    .bold()
            );
            println!("{}", "═".repeat(60).red());
        }
        Status::Playing => {}
    }
}

/// Explain why a guess was ignored
pub fn print_rejection(rejection: Rejection) {
    let message = match rejection {
        Rejection::Repeat => "Lettre déjà jouée.",
        Rejection::InvalidInput => "Entrez une seule lettre.",
        Rejection::GameOver => "La partie est terminée.",
        Rejection::NoActiveGame => "Aucune partie en cours.",
    };
    println!("{}", message.yellow());
}
