//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line holding three of the same mark,
/// `None` otherwise. Reachable boards never carry lines for both players, so
/// the scan order does not matter.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then_some(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(line: [Position; 3], player: Player) -> Board {
        line.iter()
            .fold(Board::new(), |board, pos| board.placed(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_either_player() {
        for line in LINES {
            assert_eq!(check_winner(&fill(line, Player::X)), Some(Player::X));
            assert_eq!(check_winner(&fill(line, Player::O)), Some(Player::O));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .placed(Position::TopLeft, Player::X)
            .placed(Position::TopCenter, Player::O)
            .placed(Position::TopRight, Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .placed(Position::TopLeft, Player::X)
            .placed(Position::TopCenter, Player::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let board = fill(LINES[6], Player::O);
        let before = board.clone();
        let _ = check_winner(&board);
        assert_eq!(board, before);
    }
}
