//! Game controller: move history and time travel.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::winning_line;
use crate::{Board, BoardView, Cell, HistoryError, Position, Status};
use derive_getters::Getters;
use tracing::{debug, error, info, instrument};

/// One entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// "Go to game start" or "Go to move #n".
    description: String,
    /// Whether this is the snapshot currently shown.
    current: bool,
}

impl MoveEntry {
    /// Builds the entry for history index `index`.
    pub fn new(index: usize, current: bool) -> Self {
        let description = if index > 0 {
            format!("Go to move #{}", index)
        } else {
            "Go to game start".to_string()
        };
        Self {
            index,
            description,
            current,
        }
    }
}

/// Everything needed to draw one frame of the game.
///
/// Derived from the controller on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    status: Status,
    cells: [Cell; 9],
    moves: Vec<MoveEntry>,
    winning_line: Option<[Position; 3]>,
}

/// Owner of the move history and the pointer to the displayed snapshot.
///
/// `history[0]` is always the empty board and `current_move` always
/// indexes into `history`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl Game {
    /// Starts a session with a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All snapshots from game start to the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Index of the most recent snapshot.
    pub fn latest_move(&self) -> usize {
        self.history.len() - 1
    }

    /// Whether X places the next mark on the displayed snapshot.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The displayed snapshot.
    pub fn current_squares(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// The board component for the displayed snapshot.
    pub fn board(&self) -> BoardView<'_> {
        BoardView::new(self.x_is_next(), self.current_squares())
    }

    /// Line held by the winner on the displayed snapshot, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.current_squares())
    }

    /// Records a completed move.
    ///
    /// Drops every snapshot after the displayed one, appends `next_squares`
    /// and shows it.
    #[instrument(
        skip(self, next_squares),
        fields(current_move = self.current_move, len = self.history.len())
    )]
    pub fn handle_play(&mut self, next_squares: Board) {
        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after current move");
        }

        self.history.truncate(self.current_move + 1);
        self.history.push(next_squares);
        self.current_move = self.history.len() - 1;

        info!(move_number = self.current_move, "Move played");
        debug!(board = %self.history[self.current_move].display(), "Board after move");

        if cfg!(debug_assertions) {
            if let Err(violations) = HistoryInvariants::check_all(self) {
                for violation in violations {
                    error!(description = %violation.description, "History invariant violated");
                }
            }
        }
    }

    /// Shows the snapshot at `move_index`.
    ///
    /// Jumping to the displayed snapshot is allowed and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] if `move_index` is not a
    /// history index. State is left untouched.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        if move_index >= self.history.len() {
            return Err(HistoryError::MoveOutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        debug!("Jumping to move");
        self.current_move = move_index;
        Ok(())
    }

    /// Clicks a cell on the displayed snapshot.
    ///
    /// Routes the click through the board component and records the move
    /// if the board accepts it. Returns whether a move was played.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) -> bool {
        let mut played = None;
        self.board().click(position, |next| played = Some(next));
        match played {
            Some(next) => {
                self.handle_play(next);
                true
            }
            None => false,
        }
    }

    /// The move list, one entry per history index.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|index| MoveEntry::new(index, index == self.current_move))
            .collect()
    }

    /// Projects the current state to a view. Never mutates.
    #[instrument(skip(self))]
    pub fn render(&self) -> GameView {
        let board = self.board();
        GameView {
            status: board.status(),
            cells: board.cells(),
            moves: self.moves(),
            winning_line: self.winning_line(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(game.x_is_next());
        assert_eq!(*game.current_squares(), Board::new());
    }

    #[test]
    fn test_click_appends_snapshot() {
        let mut game = Game::new();
        assert!(game.click(Position::Center));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
        assert_eq!(
            game.current_squares().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert!(!game.x_is_next());
    }

    #[test]
    fn test_illegal_click_plays_nothing() {
        let mut game = Game::new();
        game.click(Position::Center);
        assert!(!game.click(Position::Center));
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_jump_to_self_is_noop() {
        let mut game = Game::new();
        game.click(Position::Center);
        let before = game.clone();
        game.jump_to(1).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = Game::new();
        game.click(Position::Center);
        let before = game.clone();
        assert_eq!(
            game.jump_to(2),
            Err(HistoryError::MoveOutOfRange {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_entries() {
        let mut game = Game::new();
        game.click(Position::TopLeft);
        game.click(Position::Center);
        game.jump_to(1).unwrap();

        let moves = game.moves();
        let labels: Vec<&str> = moves.iter().map(|m| m.description().as_str()).collect();
        assert_eq!(labels, ["Go to game start", "Go to move #1", "Go to move #2"]);
        assert_eq!(
            moves.iter().map(|m| *m.current()).collect::<Vec<_>>(),
            [false, true, false]
        );
        assert_eq!(*moves[2].index(), 2);
    }

    #[test]
    fn test_render_is_pure() {
        let mut game = Game::new();
        game.click(Position::TopLeft);
        let before = game.clone();
        let view = game.render();
        assert_eq!(game, before);
        assert_eq!(view.status().to_string(), "Next player: O");
        assert_eq!(view.cells()[0].label(), "X");
        assert_eq!(*view.cells()[0].position(), Position::TopLeft);
        assert_eq!(view.cells()[4].label(), "");
        assert_eq!(view.moves().len(), 2);
        assert_eq!(*view.winning_line(), None);
    }
}
