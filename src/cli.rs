//! Command-line interface for time_travel_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a move history you can jump back into.
#[derive(Parser, Debug)]
#[command(name = "time_travel_tictactoe")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./time_travel_tictactoe.toml if present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Override the log file from the settings
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a scripted list of cell clicks and print the final screen
    Replay {
        /// Cell indices 0-8, comma separated (e.g. 0,4,1,5,2)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to view after the moves
        #[arg(short, long)]
        jump: Option<usize>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { log_file: None }
    }
}
