//! Tests for TUI rendering and input against ratatui's test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use time_travel_tictactoe::tui::{App, Focus, ScreenLayout, draw};
use time_travel_tictactoe::{Player, Status};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(usize::from(WIDTH))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
        Rect::new(0, 0, WIDTH, HEIGHT),
    );
}

#[test]
fn test_opening_screen() {
    let app = App::new(true);
    let screen = render(&app);

    assert!(screen.contains("Time Travel Tic-Tac-Toe"));
    assert!(screen.contains("Next Player: X"));
    assert!(screen.contains("Go to Game Start"));
}

#[test]
fn test_moves_show_in_list_with_coordinates() {
    let mut app = App::new(true);
    press(&mut app, '1');
    press(&mut app, '5');

    let screen = render(&app);

    assert!(screen.contains("Go to 1  (1, 1)"));
    assert!(screen.contains("Go to 2  (2, 2)"));
    assert!(screen.contains("Next Player: X"));
}

#[test]
fn test_coordinates_can_be_hidden() {
    let mut app = App::new(false);
    press(&mut app, '9');

    let screen = render(&app);

    assert!(screen.contains("Go to 1"));
    assert!(!screen.contains("(3, 3)"));
}

#[test]
fn test_winner_is_shown() {
    let mut app = App::new(true);
    for c in ['1', '5', '2', '6', '3'] {
        press(&mut app, c);
    }
    assert_eq!(app.state().status(), Status::Winner(Player::X));
    assert!(render(&app).contains("Winner: X"));
}

#[test]
fn test_full_board_hint() {
    let mut app = App::new(true);
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, c);
    }
    let screen = render(&app);
    assert!(screen.contains("Next Player: O"));
    assert!(screen.contains("No moves remain"));
}

#[test]
fn test_mouse_clicks_cells_and_history() {
    let layout = ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT));
    let mut app = App::new(true);

    let center = layout.cells[4];
    click(&mut app, center.x + 1, center.y + 1);
    let corner = layout.cells[8];
    click(&mut app, corner.x, corner.y);
    assert_eq!(app.state().history_len(), 3);
    assert_eq!(app.focus(), Focus::Board);

    // Row 0 of the list sits just inside its border.
    click(&mut app, layout.moves.x + 2, layout.moves.y + 1);
    assert_eq!(app.state().current_step(), 0);
    assert_eq!(app.state().history_len(), 3);
    assert_eq!(app.focus(), Focus::Moves);

    // Clicking below the last row does nothing.
    click(&mut app, layout.moves.x + 2, layout.moves.y + 6);
    assert_eq!(app.state().current_step(), 0);
}

#[test]
fn test_right_click_is_ignored() {
    let layout = ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT));
    let mut app = App::new(true);
    let cell = layout.cells[0];

    app.handle_mouse(
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: cell.x,
            row: cell.y,
            modifiers: KeyModifiers::NONE,
        },
        Rect::new(0, 0, WIDTH, HEIGHT),
    );

    assert_eq!(app.state().history_len(), 1);
}
