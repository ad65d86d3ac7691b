//! Strictly Timetravel - tic-tac-toe with move history and time travel.
//!
//! Two players share one keyboard. Every move is kept as an immutable
//! board snapshot, and the players can jump back to any earlier snapshot.
//! Playing from an earlier snapshot discards the snapshots after it.
//!
//! # Architecture
//!
//! - **Rules**: [`check_winner`] scans the 8 lines of a snapshot
//! - **Cell**: one clickable position, forwards clicks to its owner
//! - **Board**: [`BoardView`] decides click legality and the status line
//! - **Game**: [`Game`] owns the history and the displayed move
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{Game, Position};
//!
//! let mut game = Game::new();
//! game.click(Position::Center);
//! game.click(Position::TopLeft);
//! assert_eq!(game.render().status().to_string(), "Next player: X");
//!
//! game.jump_to(0)?;
//! assert_eq!(game.current_squares().occupied_count(), 0);
//! # Ok::<(), strictly_timetravel::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use board::{BoardView, Status};
pub use cell::Cell;
pub use error::HistoryError;
pub use game::{Game, GameView, MoveEntry};
pub use rules::{check_winner, winning_line};
pub use types::{Board, Player, Position, Square};
