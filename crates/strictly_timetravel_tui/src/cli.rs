//! Command-line interface for strictly_timetravel.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Timetravel - pass-the-keyboard tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Two-player tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// Log file path, overrides the config file
    #[arg(long)]
    pub log_file: Option<String>,
}
