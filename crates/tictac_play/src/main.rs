//! Tictac - terminal tic-tac-toe.
//!
//! Plays the presentation role around `tictac_engine`: parses the command
//! line, loads configuration, installs logging and renders the game as text.

#![warn(missing_docs)]

mod cli;
mod config;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use std::path::PathBuf;
use terminal::Terminal;
use tictac_engine::{GameMode, GameSession};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr at `warn` unless RUST_LOG says otherwise, so they
    // stay out of the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, seed, config } => run_play(mode, seed, config),
        Command::Modes => {
            list_modes();
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(mode: Option<GameMode>, seed: Option<u64>, config: Option<PathBuf>) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())?.with_overrides(mode, seed);
    info!(mode = %config.mode(), seed = ?config.seed(), "Starting game");

    let session = match config.seed() {
        Some(seed) => GameSession::with_seed(*config.mode(), *seed),
        None => GameSession::new(*config.mode()),
    };

    let stdin = std::io::stdin();
    let mut terminal = Terminal::new(session, std::io::stdout());
    terminal.run(stdin.lock())?;

    info!(
        games = terminal.session().statistics().total(),
        "Session ended"
    );
    Ok(())
}

/// Print the modes accepted by `--mode`
fn list_modes() {
    for mode in GameMode::all() {
        println!("{:<12} {}", mode.to_string(), mode.label());
    }
}
