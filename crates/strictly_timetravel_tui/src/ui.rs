//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_timetravel::{Cell, GameView, Player, Position, Square, Status};
use tracing::instrument;

use crate::app::{App, Focus};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions of the clickable elements in the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<(Position, Rect)>,
    moves: Vec<(usize, Rect)>,
}

impl HitMap {
    /// The board cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(pos, _)| *pos)
    }

    /// The move entry under the given terminal coordinates.
    pub fn move_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPosition::new(column, row);
        self.moves
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(index, _)| *index)
    }

    /// Screen region of a board cell.
    pub fn cell_rect(&self, position: Position) -> Option<Rect> {
        self.cells
            .iter()
            .find(|(pos, _)| *pos == position)
            .map(|(_, rect)| *rect)
    }

    /// Screen region of a move entry.
    pub fn move_rect(&self, index: usize) -> Option<Rect> {
        self.moves
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, rect)| *rect)
    }
}

/// Renders the whole game and returns where its clickable parts ended up.
#[instrument(skip_all)]
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let view = app.game().render();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title
            Constraint::Min(BOARD_HEIGHT + 2),    // Board + moves
            Constraint::Length(3),                // Status
            Constraint::Length(3),                // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(28)])
        .split(chunks[1]);

    let mut hit_map = HitMap::default();
    draw_board(frame, main[0], app, &view, &mut hit_map);
    draw_moves(frame, main[1], app, &view, &mut hit_map);
    draw_status(frame, chunks[2], view.status());

    let help = Paragraph::new(
        "1-9/Enter: Play | Tab: Board/Moves | ↑↓←→: Navigate | Home/End: Start/Latest | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    hit_map
}

fn focus_border(app: &App, focus: Focus) -> Style {
    if *app.focus() == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView, hit_map: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_border(app, Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row, cells) in view.cells().chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, view, cells, hit_map);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    cells: &[Cell],
    hit_map: &mut HitMap,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], app, view, cell);
        hit_map.cells.push((*cell.position(), cols[i * 2]));
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &GameView, cell: &Cell) {
    let pos = *cell.position();

    let (symbol, base_style) = match cell.value() {
        Square::Empty if *app.show_position_hints() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            cell.label().to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            cell.label().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = view
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let style = if *app.focus() == Focus::Board && pos == *app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(Span::raw(symbol))])
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &GameView, hit_map: &mut HitMap) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let marker = if *entry.current() { "● " } else { "  " };
            ListItem::new(format!("{}{}", marker, entry.description()))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Moves")
        .border_style(focus_border(app, Focus::History));
    let inner = block.inner(area);

    let mut list = List::new(items).block(block);
    if *app.focus() == Focus::History {
        list = list
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
    }

    let mut list_state = app.history_state().clone();
    frame.render_stateful_widget(list, area, &mut list_state);

    let offset = list_state.offset();
    for index in offset..view.moves().len() {
        let y = inner.y + (index - offset) as u16;
        if y >= inner.bottom() {
            break;
        }
        hit_map
            .moves
            .push((index, Rect::new(inner.x, y, inner.width, 1)));
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: &Status) {
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let status_text = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
