//! Outcomes and errors of the two state transitions.
//!
//! An illegal move is an ordinary answer, not a failure: the board simply
//! does not change. Only a jump to a step that was never recorded is an error.

use super::{Coordinate, Player, Position};
use serde::{Deserialize, Serialize};

/// Why a move was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board already has a winning line.
    #[display("Game is already over")]
    GameOver,
}

/// Result of asking the game to place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A new snapshot was appended.
    Placed {
        /// History index of the new snapshot.
        step: usize,
        /// The player whose mark was placed.
        player: Player,
        /// Coordinate label recorded with the snapshot.
        coordinate: Coordinate,
    },
    /// The move was illegal; state is unchanged.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Error raised when navigating history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// The requested step is past the end of the recorded history.
    #[display("Step {step} is out of range (history holds {len} snapshots)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            MoveRejection::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(MoveRejection::GameOver.to_string(), "Game is already over");
    }

    #[test]
    fn test_history_error_message() {
        let err = HistoryError::StepOutOfRange { step: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Step 7 is out of range (history holds 3 snapshots)"
        );
    }
}
