//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::GameMode;

/// Tictac - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Game mode (two-player, easy, hard); overrides the config file
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Seed for the computer's random choices; overrides the config file
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML config file (defaults to ./tictac.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the available game modes
    Modes,
}
