//! Terminal win invariant: a won board is never extended.

use super::super::GameState;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: Only the last snapshot of history may hold a winning line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        match history.iter().position(|s| check_winner(s.board()).is_some()) {
            Some(first_win) => first_win == history.len() - 1,
            None => true,
        }
    }

    fn description() -> &'static str {
        "No move is recorded after a winning board"
    }
}
