//! Keyboard helpers for board navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys. The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps keypad digits `1`-`9` onto board positions.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}

/// Moves a list selection one row up or down within `len` rows.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down => (selected + 1).min(len.saturating_sub(1)),
        KeyCode::Home => 0,
        KeyCode::End => len.saturating_sub(1),
        _ => selected,
    }
}
