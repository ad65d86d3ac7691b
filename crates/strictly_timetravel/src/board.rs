//! Board component: status text, cells, and click legality.

use crate::rules::check_winner;
use crate::{Board, Cell, Player, Position};
use derive_more::Display;
use tracing::{debug, instrument};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// A player holds a full line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner yet; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// The board as rendered for one snapshot.
///
/// Borrows the snapshot and never mutates it. Completed moves are reported
/// to the owner through the `on_play` callback as a fresh board.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    x_is_next: bool,
    squares: &'a Board,
}

impl<'a> BoardView<'a> {
    /// Creates a view over `squares` with the given turn flag.
    pub fn new(x_is_next: bool, squares: &'a Board) -> Self {
        Self { x_is_next, squares }
    }

    /// The snapshot being shown.
    pub fn squares(&self) -> &'a Board {
        self.squares
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Current status, recomputed on every call.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        match check_winner(self.squares) {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(Player::from_x_is_next(self.x_is_next)),
        }
    }

    /// The 9 cells in row-major order.
    pub fn cells(&self) -> [Cell; 9] {
        Position::ALL.map(|pos| Cell::new(pos, self.squares.get(pos)))
    }

    /// The cell at `position`.
    pub fn cell(&self, position: Position) -> Cell {
        Cell::new(position, self.squares.get(position))
    }

    /// Handles a click on `position`.
    ///
    /// Ignored when the board already has a winner or the square is
    /// occupied. Otherwise `on_play` receives a copy of the snapshot with
    /// the next player's mark added.
    #[instrument(skip(self, on_play), fields(x_is_next = self.x_is_next))]
    pub fn handle_click(&self, position: Position, on_play: impl FnOnce(Board)) {
        if let Some(winner) = check_winner(self.squares) {
            debug!(%winner, "Click ignored, game already decided");
            return;
        }
        if !self.squares.is_empty(position) {
            debug!("Click ignored, square occupied");
            return;
        }

        let player = Player::from_x_is_next(self.x_is_next);
        let next = self.squares.with_mark(position, player);
        on_play(next);
    }

    /// Clicks the cell at `position`, routing through its callback.
    pub fn click(&self, position: Position, on_play: impl FnOnce(Board)) {
        self.cell(position)
            .activate(|| self.handle_click(position, on_play));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn capture(view: &BoardView<'_>, position: Position) -> Option<Board> {
        let mut played = None;
        view.click(position, |next| played = Some(next));
        played
    }

    #[test]
    fn test_status_next_player() {
        let board = Board::new();
        assert_eq!(BoardView::new(true, &board).status().to_string(), "Next player: X");
        assert_eq!(BoardView::new(false, &board).status().to_string(), "Next player: O");
    }

    #[test]
    fn test_status_winner() {
        let board = Board::new()
            .with_mark(Position::TopRight, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomLeft, Player::O);
        let view = BoardView::new(true, &board);
        assert_eq!(view.status(), Status::Winner(Player::O));
        assert_eq!(view.status().to_string(), "Winner: O");
    }

    #[test]
    fn test_click_places_next_players_mark() {
        let board = Board::new();
        let played = capture(&BoardView::new(false, &board), Position::Center);
        assert_eq!(
            played.map(|b| b.get(Position::Center)),
            Some(Square::Occupied(Player::O))
        );
    }

    #[test]
    fn test_click_does_not_mutate_snapshot() {
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        let before = board;
        let played = capture(&BoardView::new(false, &board), Position::Center);
        assert_eq!(board, before);
        assert_ne!(played, Some(before));
    }

    #[test]
    fn test_click_on_occupied_is_ignored() {
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        assert_eq!(capture(&BoardView::new(false, &board), Position::TopLeft), None);
    }

    #[test]
    fn test_click_after_win_is_ignored() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        let view = BoardView::new(false, &board);
        for pos in Position::ALL {
            assert_eq!(capture(&view, pos), None);
        }
    }

    #[test]
    fn test_cells_project_squares() {
        let board = Board::new().with_mark(Position::BottomRight, Player::X);
        let cells = BoardView::new(false, &board).cells();
        assert_eq!(cells[8].label(), "X");
        assert_eq!(*cells[8].position(), Position::BottomRight);
        assert!(cells[..8].iter().all(|c| c.label().is_empty()));
    }
}
