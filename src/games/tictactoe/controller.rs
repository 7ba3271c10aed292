//! Boundary between a presentation layer and the game state.
//!
//! Presentation code hands over raw click data (a cell index or a history
//! step). The controller validates it, drives [`GameState`], and calls every
//! subscribed observer after any change so views can re-render.

use super::action::{HistoryError, MoveOutcome};
use super::{GameState, Position};
use tracing::{debug, info, instrument, warn};

/// Error raised when a caller hands the controller data it never offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ControllerError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is outside the board (0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// History navigation failed.
    #[display("{}", _0)]
    History(#[error(not(source))] HistoryError),
}

impl From<HistoryError> for ControllerError {
    fn from(err: HistoryError) -> Self {
        Self::History(err)
    }
}

type Observer = Box<dyn FnMut(&GameState)>;

/// Owns a [`GameState`] and notifies observers when it changes.
pub struct GameController {
    state: GameState,
    observers: Vec<Observer>,
}

impl GameController {
    /// Creates a controller around a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_state(GameState::new())
    }

    /// Creates a controller around an existing state.
    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a callback run after every state change.
    ///
    /// Observers run synchronously, in the order they subscribed.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameState) + 'static) {
        self.observers.push(Box::new(observer));
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Handles a click on board cell `index`.
    ///
    /// Illegal moves come back as [`MoveOutcome::Rejected`] and notify nobody.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::CellOutOfRange`] for an index past 8.
    #[instrument(skip(self))]
    pub fn cell_clicked(&mut self, index: usize) -> Result<MoveOutcome, ControllerError> {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Cell click outside the board");
            return Err(ControllerError::CellOutOfRange(index));
        };

        let outcome = self.state.apply_move(pos);
        if outcome.is_placed() {
            self.notify();
        }
        Ok(outcome)
    }

    /// Handles a click on the move-list row for `step`.
    ///
    /// Clicking the step already on screen changes nothing and notifies
    /// nobody.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::History`] if `step` was never recorded.
    #[instrument(skip(self))]
    pub fn history_step_clicked(&mut self, step: usize) -> Result<(), ControllerError> {
        if step == self.state.current_step() {
            debug!("Already viewing this step");
            return Ok(());
        }
        self.state.jump_to(step).inspect_err(|e| {
            warn!(error = %e, "History click outside the move list");
        })?;
        self.notify();
        Ok(())
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state.reset();
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
