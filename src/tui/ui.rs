//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{GameState, Player, Position, Square};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// The nine board cells in index order.
    pub cells: [Rect; 9],
    /// Bordered move list.
    pub moves: Rect,
    /// Bordered status bar.
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits a full-screen area into regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),         // Title
                Constraint::Min(BOARD_HEIGHT), // Board + moves
                Constraint::Length(4),         // Status
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let board = center_rect(body[0], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board);

        let mut cells = [Rect::default(); 9];
        for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row_area);
            for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                cells[row * 3 + col] = cell;
            }
        }

        Self {
            title: chunks[0],
            cells,
            moves: body[1],
            status: chunks[2],
        }
    }
}

/// History step under `point` in the bordered move list, if any.
pub fn history_row_at(moves: Rect, point: ScreenPosition, len: usize) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(moves);
    if !inner.contains(point) {
        return None;
    }
    let step = usize::from(point.y - inner.y);
    (step < len).then_some(step)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let state = app.state();

    let title = Paragraph::new("Time Travel Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app);
    draw_moves(frame, layout.moves, app);
    draw_status(frame, layout.status, state);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let board = app.state().board();

    for (index, area) in layout.cells.iter().enumerate() {
        let Some(pos) = Position::from_index(index) else {
            continue;
        };
        let (symbol, base_style) = match board.get(pos) {
            Square::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
            Square::Occupied(Player::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let style = if app.focus() == Focus::Board && pos == app.cursor() {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(symbol, style)),
            Line::from(""),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(style).alignment(Alignment::Center),
            *area,
        );
    }

    // Grid lines between the cells.
    let grid = Style::default().fg(Color::DarkGray);
    for row in [0, 3] {
        let above = layout.cells[row];
        let sep = Rect::new(above.x, above.y + above.height, BOARD_WIDTH, 1)
            .intersection(frame.area());
        frame.render_widget(
            Paragraph::new("─".repeat(usize::from(sep.width))).style(grid),
            sep,
        );
    }
    for row in 0..3 {
        for col in [0, 1] {
            let left = layout.cells[row * 3 + col];
            let sep = Rect::new(left.x + left.width, left.y, 1, left.height)
                .intersection(frame.area());
            frame.render_widget(
                Paragraph::new(vec![Line::from("│"); usize::from(sep.height)]).style(grid),
                sep,
            );
        }
    }
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .state()
        .move_list()
        .into_iter()
        .map(|entry| {
            let mut text = entry.label();
            if app.show_coordinates()
                && let Some(coordinate) = entry.coordinate
            {
                text.push_str(&format!("  {}", coordinate));
            }

            let mut style = Style::default();
            if entry.is_current {
                style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
            }
            if app.focus() == Focus::Moves && entry.step == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let border_style = match app.focus() {
        Focus::Moves => Style::default().fg(Color::Cyan),
        Focus::Board => Style::default(),
    };
    let list = List::new(items).block(
        Block::default()
            .title("Moves")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &GameState) {
    let mut status = state.status().to_string();
    if state.status().winner().is_none() && !state.has_legal_moves() {
        status.push_str("  (No moves remain)");
    }

    let lines = vec![
        Line::from(Span::styled(status, Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            "1-9/Enter: play  Tab: moves  r: restart  q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
