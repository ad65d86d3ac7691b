//! Strictly Timetravel - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use strictly_timetravel_tui::terminal::install_panic_hook;
use strictly_timetravel_tui::{App, AppTransition, Cli, HitMap, TerminalGuard, TuiConfig, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    initialize_tracing(&config)?;
    info!("Starting Strictly Timetravel TUI");

    let mouse = *config.mouse();
    let mut guard = TerminalGuard::new(io::stdout(), mouse);
    guard.enter()?;
    install_panic_hook(mouse);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*config.show_position_hints());
    let res = run_app(&mut terminal, app);

    guard.restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!("Strictly Timetravel TUI exited");
    res
}

/// Setup logging to file to avoid interfering with TUI
fn initialize_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draws a frame, waits for input, and dispatches it until the user quits.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut hit_map = HitMap::default();
        terminal.draw(|f| hit_map = ui::draw(f, &app))?;
        app.set_hit_map(hit_map);

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))? {
            let transition = match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => AppTransition::Stay,
            };
            if transition == AppTransition::Quit {
                return Ok(());
            }
        }
    }
}
