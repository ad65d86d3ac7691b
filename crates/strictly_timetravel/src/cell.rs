//! A single clickable board cell.

use crate::{Position, Square};
use derive_getters::Getters;
use tracing::instrument;

/// One board position as shown to the player.
///
/// A cell has no state of its own. It projects a square value to a label
/// and forwards activation to whatever callback its owner supplies. It
/// does not judge whether a click is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Cell {
    position: Position,
    value: Square,
}

impl Cell {
    /// Creates a cell for `position` showing `value`.
    pub fn new(position: Position, value: Square) -> Self {
        Self { position, value }
    }

    /// Text shown in the cell: "X", "O", or blank.
    pub fn label(&self) -> &'static str {
        self.value.label()
    }

    /// Activates the cell, invoking the owner's click callback.
    #[instrument(skip(self, on_click), fields(position = %self.position))]
    pub fn activate(&self, on_click: impl FnOnce()) {
        on_click();
    }
}
