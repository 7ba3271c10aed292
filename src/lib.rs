//! Time Travel Tic-Tac-Toe - two-player tic-tac-toe with a jumpable history
//!
//! Every move appends a board snapshot. Any earlier snapshot can be brought
//! back into view, and playing from there discards the abandoned future.
//!
//! # Architecture
//!
//! - **Games**: board, win rules, the snapshot timeline and its invariants
//! - **Controller**: boundary that turns clicks into moves and jumps and
//!   notifies observers after every change
//! - **TUI**: ratatui front end driven by keyboard and mouse
//! - **Replay**: headless front end printing the same views as text
//!
//! # Example
//!
//! ```
//! use time_travel_tictactoe::{GameState, Player, Position, Status};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     game.apply_move(pos);
//! }
//! game.jump_to(1).unwrap();
//! assert_eq!(game.status(), Status::NextTurn(Player::O));
//! assert_eq!(game.history_len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod replay;

pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};

// Crate-level exports - Replay
pub use replay::{render_text, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, ControllerError, Coordinate, GameController, GameState, HistoryError, Invariant,
    InvariantSet, InvariantViolation, MoveListEntry, MoveOutcome, MoveRejection, Player,
    Position, Snapshot, Square, Status, TimelineInvariants, check_winner, is_full,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    HistoryAnchoredInvariant, MarksMatchStepInvariant, NoMoveAfterWinInvariant,
    StepInBoundsInvariant,
};
