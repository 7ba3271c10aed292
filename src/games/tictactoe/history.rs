//! Game state with a jumpable timeline of board snapshots.
//!
//! History is the source of truth. The player to move and the game status
//! are both derived from the snapshot at `current_step`, so jumping back in
//! time needs nothing more than moving that index.

use super::action::{HistoryError, MoveOutcome, MoveRejection};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules::{check_winner, is_full};
use super::{Board, Coordinate, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board state right after a move, or the empty opening board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Where the producing move landed. `None` for the opening board.
    coordinate: Option<Coordinate>,
}

impl Snapshot {
    /// The empty board every game starts from.
    pub fn opening() -> Self {
        Self {
            board: Board::new(),
            coordinate: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the coordinate of the move that produced this snapshot.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

/// What the status line shows for the viewed step.
///
/// A full board without a winner still reports [`Status::NextTurn`]; use
/// [`GameState::has_legal_moves`] to tell that case apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The viewed board holds a winning line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nobody has won yet; this player moves next.
    #[display("Next Player: {}", _0)]
    NextTurn(Player),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextTurn(_) => None,
        }
    }
}

/// One row of the jump list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// History index this row jumps to.
    pub step: usize,
    /// Coordinate of the move, absent for the game start row.
    pub coordinate: Option<Coordinate>,
    /// Whether this is the step currently on screen.
    pub is_current: bool,
}

impl MoveListEntry {
    /// Button text for this row.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to Game Start".to_string()
        } else {
            format!("Go to {}", self.step)
        }
    }
}

/// Authoritative game state: every snapshot so far plus the viewed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Snapshots, index 0 is the opening board.
    history: Vec<Snapshot>,
    /// Index into `history` currently viewed and played from.
    current_step: usize,
}

impl GameState {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::opening()],
            current_step: 0,
        }
    }

    /// Returns every recorded snapshot.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of recorded snapshots, including the opening board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the viewed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The viewed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// The board at the viewed step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player whose turn it is at the viewed step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winner or next player for the viewed board.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> Status {
        match check_winner(self.board()) {
            Some(player) => Status::Winner(player),
            None => Status::NextTurn(self.to_move()),
        }
    }

    /// Whether any move from the viewed board would be accepted.
    pub fn has_legal_moves(&self) -> bool {
        check_winner(self.board()).is_none() && !is_full(self.board())
    }

    /// Rows for the jump list, one per snapshot.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveListEntry {
                step,
                coordinate: snapshot.coordinate(),
                is_current: step == self.current_step,
            })
            .collect()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Moving from an earlier step drops every snapshot after it before the
    /// new one is appended. An illegal move (occupied square, or a board that
    /// is already won) leaves the state exactly as it was.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let board = self.board();

        if check_winner(board).is_some() {
            debug!("Ignoring move on a won board");
            return MoveOutcome::Rejected(MoveRejection::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Ignoring move on an occupied square");
            return MoveOutcome::Rejected(MoveRejection::SquareOccupied(pos));
        }

        let player = self.to_move();
        let next = board.placed(pos, player);
        let coordinate = pos.coordinate();

        self.history.truncate(self.current_step + 1);
        self.history.push(Snapshot {
            board: next,
            coordinate: Some(coordinate),
        });
        self.current_step = self.history.len() - 1;

        debug!(%player, %coordinate, new_step = self.current_step, "Move applied");
        self.debug_check();

        MoveOutcome::Placed {
            step: self.current_step,
            player,
            coordinate,
        }
    }

    /// Views the snapshot at `step` without touching history.
    ///
    /// Later snapshots stay recorded until the next accepted move.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::StepOutOfRange`] if `step` was never recorded;
    /// the viewed step is left unchanged.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.history.len() {
            return Err(HistoryError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        self.debug_check();
        Ok(())
    }

    /// Throws the whole timeline away and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn debug_check(&self) {
        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "timeline invariants violated: {:?}",
            TimelineInvariants::check_all(self)
        );
    }

    /// Pushes a snapshot without any validation.
    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, board: Board, coordinate: Option<Coordinate>) {
        self.history.push(Snapshot { board, coordinate });
        self.current_step = self.history.len() - 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
