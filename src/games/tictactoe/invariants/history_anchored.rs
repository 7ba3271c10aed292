//! History anchor invariant: the opening board is always snapshot 0.

use super::super::{GameState, Snapshot};
use super::Invariant;

/// Invariant: History is never empty and starts with the empty board.
pub struct HistoryAnchoredInvariant;

impl Invariant<GameState> for HistoryAnchoredInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Snapshot::opening())
    }

    fn description() -> &'static str {
        "History starts with the empty opening board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_holds_through_jumps() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state.jump_to(0).unwrap();
        assert!(HistoryAnchoredInvariant::holds(&state));
    }
}
