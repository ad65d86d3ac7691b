//! History starts from the empty board.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: history is non-empty and its first snapshot is empty.
pub struct StartsEmptyInvariant;

impl Invariant<Game> for StartsEmptyInvariant {
    fn holds(game: &Game) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
