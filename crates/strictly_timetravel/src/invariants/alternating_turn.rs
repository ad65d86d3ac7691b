//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use super::single_mark_delta::added_mark;
use crate::{Game, Player, Square};

/// Invariant: the mark added at history index k is X for odd k and O for
/// even k.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let mut expected = Player::X;
        game.history().windows(2).all(|pair| {
            let holds = matches!(
                added_mark(&pair[0], &pair[1]),
                Some((_, Square::Occupied(p))) if p == expected
            );
            expected = expected.opponent();
            holds
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
