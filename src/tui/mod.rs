//! Terminal UI: the presentation layer for a local two-player game.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{digit_position, move_cursor, move_selection};
pub use ui::{ScreenLayout, draw, history_row_at};

use crate::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Runs the TUI until the user quits.
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Log to a file so traces do not tear up the alternate screen.
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?settings, "Starting Time Travel Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if *settings.mouse() {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*settings.show_coordinates());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Event loop: redraw after changes, then handle one event to completion.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal.draw(|f| draw(f, &app))?;
        }
        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            Event::Resize(_, _) => app.mark_dirty(),
            _ => {}
        }
    }
}
