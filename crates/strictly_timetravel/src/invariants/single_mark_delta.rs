//! Single-mark delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Board, Game, Position, Square};

/// Invariant: consecutive snapshots differ in exactly one position, which
/// goes from empty to occupied.
///
/// Marks are never overwritten or removed between snapshots.
pub struct SingleMarkDeltaInvariant;

/// The position that differs between `before` and `after`, if exactly one
/// does and it went from empty to occupied.
pub(crate) fn added_mark(before: &Board, after: &Board) -> Option<(Position, Square)> {
    let mut changed = Position::ALL
        .into_iter()
        .filter(|pos| before.get(*pos) != after.get(*pos));

    let pos = changed.next()?;
    if changed.next().is_some() || !before.is_empty(pos) {
        return None;
    }
    Some((pos, after.get(pos)))
}

impl Invariant<Game> for SingleMarkDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .all(|pair| added_mark(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
