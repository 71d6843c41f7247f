//! Terminal play mode
//!
//! Text-based hangman over stdin/stdout, using the same rules as the server.

use crate::core::{GameSlot, GuessResult, player_name_or_default};
use crate::output::{print_game, print_outcome, print_rejection};
use crate::wordlists::WordSource;
use std::io::{self, BufRead, Write};

/// Settings for a terminal session
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub player: String,
    pub max_lives: u32,
}

impl PlayConfig {
    #[must_use]
    pub fn new(player: &str, max_lives: u32) -> Self {
        Self {
            player: player_name_or_default(player),
            max_lives,
        }
    }
}

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "quit" | "exit" => Self::Quit,
            "new" | "nouveau" => Self::NewGame,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Run the interactive terminal game until the player quits
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_play(config: &PlayConfig, words: &WordSource) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Jeu du pendu                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Devinez le mot lettre par lettre. Les accents ne comptent pas :");
    println!("'e' révèle aussi é, è, ê et ë, et 'o' ou 'e' révèlent œ.\n");
    println!("Commandes : 'new' pour une nouvelle partie, 'quit' pour quitter.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut slot = GameSlot::default();
    let mut rng = rand::rng();

    slot.start(config.player.clone(), words.choose(&mut rng), config.max_lives);

    loop {
        let Some(game) = slot.game() else {
            break;
        };
        print_game(game);

        if game.status().is_over() {
            print_outcome(game);
            if !prompt_yes(&mut lines, "Rejouer ? (oui/non)")? {
                break;
            }
            slot.start(config.player.clone(), words.choose(&mut rng), config.max_lives);
            continue;
        }

        let Some(input) = prompt(&mut lines, "Lettre")? else {
            break;
        };

        match Command::parse(&input) {
            Command::Quit => break,
            Command::NewGame => {
                slot.start(config.player.clone(), words.choose(&mut rng), config.max_lives);
                println!("\n🔄 Nouvelle partie !");
            }
            Command::Guess(raw) => match slot.submit_guess(&raw) {
                GuessResult::Applied(outcome) if outcome.was_miss => {
                    println!("Raté !");
                }
                GuessResult::Applied(outcome) => {
                    println!("Bien joué, {} lettre(s) révélée(s).", outcome.revealed.len());
                }
                GuessResult::Rejected(rejection) => print_rejection(rejection),
            },
        }
    }

    println!("\n👋 Merci d'avoir joué !\n");
    Ok(())
}

/// Read one trimmed line, `None` on end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> io::Result<Option<String>> {
    print!("{label} : ");
    io::stdout().flush()?;

    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_string()))
}

fn prompt_yes<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> io::Result<bool> {
    Ok(prompt(lines, label)?
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "oui" | "o" | "yes" | "y")))
}
