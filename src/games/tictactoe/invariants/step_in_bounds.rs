//! Step bounds invariant: the viewed step is a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_step` indexes into history.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history_len()
    }

    fn description() -> &'static str {
        "Current step points at a recorded snapshot"
    }
}
