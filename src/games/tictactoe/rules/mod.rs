//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board) snapshot. They never
//! look at history, so the same board always gets the same verdict.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
