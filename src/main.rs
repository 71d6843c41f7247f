//! Hangman - CLI
//!
//! Serves the hangman game over HTTP, or plays it in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pendu::{
    commands::{PlayConfig, run_play, run_server},
    core::DEFAULT_MAX_LIVES,
    server::{DEFAULT_BIND, ServerConfig},
    wordlists::WordSource,
};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pendu",
    about = "Hangman word game with accent-insensitive guessing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded French dictionary)
    #[arg(short = 'w', long, global = true, env = "PENDU_WORDS")]
    words: Option<PathBuf>,

    /// Lives at the start of each game
    #[arg(
        short,
        long,
        global = true,
        env = "PENDU_LIVES",
        default_value_t = DEFAULT_MAX_LIVES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    lives: u32,
}

/// Options of the HTTP server
#[derive(Parser, Debug)]
#[command(name = "serve")]
struct ServeArgs {
    /// Address the HTTP server listens on
    #[arg(short, long, env = "PENDU_BIND", default_value = DEFAULT_BIND)]
    bind: SocketAddr,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the game over HTTP (default)
    Serve(ServeArgs),

    /// Play in the terminal
    Play {
        /// Player name shown in messages
        #[arg(short, long, default_value = "")]
        name: String,
    },
}

/// Load the word source selected by the -w flag
fn load_words(path: Option<&Path>) -> Result<WordSource> {
    let words = match path {
        Some(path) => WordSource::from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => WordSource::embedded(),
    };

    if words.is_empty() {
        log::warn!("word list has no words, every game will use the fallback word");
    } else {
        log::info!("loaded {} words", words.len());
    }
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let words = load_words(cli.words.as_deref())?;

    // Default to Serve if no command given, still honoring PENDU_BIND
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Serve(ServeArgs::parse_from(["serve"])));

    match command {
        Commands::Serve(args) => {
            let config = ServerConfig {
                bind: args.bind,
                max_lives: cli.lives,
            };
            run_server(&config, words)
        }
        Commands::Play { name } => {
            let config = PlayConfig::new(&name, cli.lives);
            run_play(&config, &words).context("terminal game failed")
        }
    }
}
