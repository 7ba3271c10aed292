//! Headless presentation: play a scripted list of clicks and print the result.

use crate::games::tictactoe::{ControllerError, GameController, GameState, MoveOutcome};
use tracing::instrument;

/// Applies `moves` (cell indices 0-8) in order, then optionally views `jump`.
///
/// Illegal moves are reported as ignored and play continues. The returned
/// text ends with the final screen as rendered by [`render_text`].
///
/// # Errors
///
/// Fails on a cell index past 8 or a jump to a step that was never recorded.
#[instrument]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    show_coordinates: bool,
) -> Result<String, ControllerError> {
    let mut controller = GameController::new();
    let mut out = String::new();

    for (turn, &index) in moves.iter().enumerate() {
        match controller.cell_clicked(index)? {
            MoveOutcome::Placed {
                step,
                player,
                coordinate,
            } => out.push_str(&format!(
                "click {}: {} plays {} (step {})\n",
                turn + 1,
                player,
                coordinate,
                step
            )),
            MoveOutcome::Rejected(reason) => out.push_str(&format!(
                "click {}: cell {} ignored ({})\n",
                turn + 1,
                index,
                reason
            )),
        }
    }

    if let Some(step) = jump {
        controller.history_step_clicked(step)?;
        out.push_str(&format!("jumped to step {}\n", step));
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&render_text(controller.state(), show_coordinates));
    Ok(out)
}

/// Renders board, status and move list as plain text.
///
/// The viewed step in the move list is marked with `>`.
pub fn render_text(state: &GameState, show_coordinates: bool) -> String {
    let mut out = state.board().display();
    out.push_str("\n\n");

    let status = state.status();
    out.push_str(&status.to_string());
    if status.winner().is_none() && !state.has_legal_moves() {
        out.push_str(" (No moves remain)");
    }
    out.push_str("\n\n");

    for entry in state.move_list() {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}", marker, entry.label()));
        if show_coordinates && let Some(coordinate) = entry.coordinate {
            out.push_str(&format!(" {}", coordinate));
        }
        out.push('\n');
    }
    out
}
