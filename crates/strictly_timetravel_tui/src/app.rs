//! Application state and input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::widgets::ListState;
use strictly_timetravel::{Game, Position};
use tracing::{debug, info, instrument, warn};

use crate::input::{digit_position, move_cursor};
use crate::ui::HitMap;

/// Which pane receives arrow and Enter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// The result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTransition {
    /// Keep running.
    Stay,
    /// Exit the application.
    Quit,
}

/// Main application state.
///
/// Owns the one [`Game`] for the session. Everything drawn on screen is
/// derived from it each frame.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    history_state: ListState,
    show_position_hints: bool,
    hit_map: HitMap,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(show_position_hints: bool) -> Self {
        let mut history_state = ListState::default();
        history_state.select(Some(0));
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_state,
            show_position_hints,
            hit_map: HitMap::default(),
        }
    }

    /// Stores the clickable regions of the last frame.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles a key event.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppTransition {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return AppTransition::Stay;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return AppTransition::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::History {
                    self.history_state.select(Some(self.game.current_move()));
                }
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.latest_move()),
            KeyCode::Char(c) => match digit_position(c) {
                Some(position) => {
                    self.cursor = position;
                    self.play(position);
                }
                None => self.handle_focused_key(key.code),
            },
            code => self.handle_focused_key(code),
        }

        AppTransition::Stay
    }

    fn handle_focused_key(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Board => self.handle_board_key(code),
            Focus::History => self.handle_history_key(code),
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let index = self.history_state.selected().unwrap_or(0);
                self.jump(index);
            }
            _ => {}
        }
    }

    /// Handles a mouse event using the regions of the last frame.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> AppTransition {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return AppTransition::Stay;
        }

        if let Some(position) = self.hit_map.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = position;
            self.play(position);
        } else if let Some(index) = self.hit_map.move_at(mouse.column, mouse.row) {
            self.focus = Focus::History;
            self.jump(index);
        }

        AppTransition::Stay
    }

    /// Clicks a board cell on the displayed snapshot.
    fn play(&mut self, position: Position) {
        if self.game.click(position) {
            info!(%position, move_number = self.game.current_move(), "Move played");
            self.history_state.select(Some(self.game.current_move()));
        } else {
            debug!(%position, "Click had no effect");
        }
    }

    /// Shows the snapshot at `index`.
    fn jump(&mut self, index: usize) {
        match self.game.jump_to(index) {
            Ok(()) => {
                debug!(index, "Jumped to move");
                self.history_state.select(Some(index));
            }
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Moves the list selection up, wrapping.
    fn select_previous(&mut self) {
        let count = self.game.history().len();
        let i = match self.history_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.history_state.select(Some(i));
    }

    /// Moves the list selection down, wrapping.
    fn select_next(&mut self) {
        let count = self.game.history().len();
        let i = match self.history_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.history_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> AppTransition {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(*app.cursor(), Position::TopLeft);
        assert_eq!(app.history_state().selected(), Some(1));
    }

    #[test]
    fn test_non_digit_char_follows_focus() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.game().history().len(), 2);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.game().current_squares().get(Position::MiddleLeft).label(),
            "O"
        );

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game().current_squares().get(Position::TopCenter).label(),
            "X"
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(false);
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppTransition::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), AppTransition::Quit);
        assert_eq!(press(&mut app, KeyCode::Char('x')), AppTransition::Stay);
    }

    #[test]
    fn test_release_is_ignored() {
        let mut app = App::new(false);
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.game().history().len(), 1);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new(false);
        for c in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(*app.focus(), Focus::History);
        assert_eq!(app.history_state().selected(), Some(3));

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.history_state().selected(), Some(0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.history_state().selected(), Some(1));
    }

    #[test]
    fn test_home_and_end() {
        let mut app = App::new(false);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Home);
        assert_eq!(app.game().current_move(), 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.game().current_move(), 2);
    }
}
