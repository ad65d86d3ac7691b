//! Terminal UI for Strictly Timetravel.
//!
//! Renders the game with ratatui and turns crossterm key and mouse events
//! into plays and jumps on the session's [`Game`](strictly_timetravel::Game).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::{App, AppTransition, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use terminal::TerminalGuard;
pub use ui::HitMap;
