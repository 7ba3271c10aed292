//! Application state and input handling.

use crate::games::tictactoe::{GameController, GameState, Position};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position as ScreenPosition, Rect};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor, move_selection};
use super::ui::{ScreenLayout, history_row_at};

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move through the move list.
    Moves,
}

impl Focus {
    /// Toggles between the board and the move list.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
pub struct App {
    controller: GameController,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_coordinates: bool,
    dirty: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_coordinates: bool) -> Self {
        let mut controller = GameController::new();
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        controller.subscribe(move |_| flag.set(true));

        Self {
            controller,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            show_coordinates,
            dirty,
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    /// Board square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether move-list rows show coordinates.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true once per change, clearing the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Forces a redraw on the next loop iteration.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                info!("User interrupted");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.controller.restart();
                self.cursor = Position::Center;
                self.selected = 0;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected = self.state().current_step();
                self.mark_dirty();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::Moves => self.jump(self.selected),
            },
            code => match self.focus {
                Focus::Board => {
                    self.cursor = move_cursor(self.cursor, code);
                    self.mark_dirty();
                }
                Focus::Moves => {
                    self.selected =
                        move_selection(self.selected, self.state().history_len(), code);
                    self.mark_dirty();
                }
            },
        }
    }

    /// Handles a mouse event against the layout of a screen of size `area`.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = ScreenLayout::new(area);
        let point = ScreenPosition::new(mouse.column, mouse.row);

        if let Some(index) = layout.cells.iter().position(|cell| cell.contains(point)) {
            if let Some(pos) = Position::from_index(index) {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.play(pos);
            }
        } else if let Some(step) =
            history_row_at(layout.moves, point, self.state().history_len())
        {
            self.focus = Focus::Moves;
            self.jump(step);
        }
    }

    fn play(&mut self, pos: Position) {
        match self.controller.cell_clicked(pos.to_index()) {
            Ok(outcome) => debug!(?outcome, "Cell played"),
            Err(e) => debug!(error = %e, "Cell click refused"),
        }
        self.selected = self.state().current_step();
        self.mark_dirty();
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.controller.history_step_clicked(step) {
            debug!(error = %e, "Jump refused");
        }
        self.selected = self.state().current_step();
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Status};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));

        assert_eq!(app.state().history_len(), 3);
        assert_eq!(app.state().status(), Status::NextTurn(Player::X));
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_enter_plays_cursor() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.state().history()[1].coordinate().unwrap().to_string(),
            "(1, 2)"
        );
    }

    #[test]
    fn test_move_list_focus_jumps() {
        let mut app = App::new(true);
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected(), 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().current_step(), 1);
        assert_eq!(app.state().history_len(), 4);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().history_len(), 1);
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_without_playing() {
        let mut app = App::new(true);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit());
        assert_eq!(app.state().history_len(), 1);
    }

    #[test]
    fn test_dirty_flag_follows_changes() {
        let mut app = App::new(true);
        assert!(app.take_dirty());
        assert!(!app.take_dirty());

        press(&mut app, KeyCode::Char('7'));
        assert!(app.take_dirty());
    }
}
