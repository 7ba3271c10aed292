//! Mark count invariant: snapshot k holds exactly k marks, laid down in turn.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: Each snapshot adds exactly one mark to its predecessor.
///
/// The board at step k has k occupied squares, X leads O by one on odd
/// steps and ties it on even ones, and no square ever changes once filled.
pub struct MarksMatchStepInvariant;

impl Invariant<GameState> for MarksMatchStepInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let counts_match = history.iter().enumerate().all(|(step, snapshot)| {
            let board = snapshot.board();
            let lead = board.count(Player::X) as isize - board.count(Player::O) as isize;
            board.occupied_count() == step && lead == (step % 2) as isize
        });

        let monotonic = history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board().squares(), pair[1].board().squares());
            before
                .iter()
                .zip(after.iter())
                .all(|(b, a)| *b == Square::Empty || b == a)
        });

        counts_match && monotonic
    }

    fn description() -> &'static str {
        "Snapshot k holds exactly k marks placed in alternating turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position};

    #[test]
    fn test_holds_for_played_game() {
        let mut state = GameState::new();
        for index in [4, 0, 8, 2, 1] {
            state.apply_move(Position::ALL[index]);
        }
        assert!(MarksMatchStepInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut state = GameState::new();
        // O opening the game leaves X behind.
        state.push_unchecked(Board::new().placed(Position::Center, Player::O), None);
        assert!(!MarksMatchStepInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state.apply_move(Position::TopLeft);
        // Step 3 rewrites the centre instead of extending step 2.
        let rewritten = Board::new()
            .placed(Position::Center, Player::O)
            .placed(Position::TopLeft, Player::X)
            .placed(Position::BottomRight, Player::X);
        state.push_unchecked(rewritten, None);
        assert!(!MarksMatchStepInvariant::holds(&state));
    }
}
