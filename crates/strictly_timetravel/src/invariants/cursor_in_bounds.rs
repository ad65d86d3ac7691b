//! The displayed move always indexes into the history.

use super::Invariant;
use crate::Game;

/// Invariant: `current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes into the history"
    }
}
