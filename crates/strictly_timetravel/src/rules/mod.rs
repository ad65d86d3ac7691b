//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules are kept apart
//! from board storage so the board component and the invariants can
//! share them.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
