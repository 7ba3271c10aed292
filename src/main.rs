//! Time Travel Tic-Tac-Toe - command line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use time_travel_tictactoe::{Cli, Command, Settings, replay, tui::run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or_default() {
        Command::Play { log_file } => {
            let settings = match log_file {
                Some(path) => settings.with_log_file(path),
                None => settings,
            };
            run_tui(&settings)
        }
        Command::Replay { moves, jump } => run_replay(&settings, &moves, jump),
    }
}

/// Plays the scripted clicks and prints the final screen to stdout.
fn run_replay(settings: &Settings, moves: &[usize], jump: Option<usize>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(clicks = moves.len(), ?jump, "Replaying moves");
    let screen = replay(moves, jump, *settings.show_coordinates()).context("Replay failed")?;
    print!("{}", screen);
    Ok(())
}
