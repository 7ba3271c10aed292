//! Tic-tac-toe with a navigable move history.

mod action;
mod controller;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{HistoryError, MoveOutcome, MoveRejection};
pub use controller::{ControllerError, GameController};
pub use history::{GameState, MoveListEntry, Snapshot, Status};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};
pub use position::{Coordinate, Position};
pub use rules::{check_winner, is_full};
pub use types::{Board, Player, Square};
