//! Terminal front end: event loop, application state and rendering.

pub mod app;
pub mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogSettings};
use app::{App, AppAction};

/// Sends log output to the configured file so it never draws over the UI.
///
/// `RUST_LOG` takes precedence over the configured filter.
///
/// # Errors
///
/// Fails if the log file cannot be created.
pub fn init_file_logging(settings: &LogSettings) -> Result<()> {
    let log_file = std::fs::File::create(settings.file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the TUI until the player quits.
///
/// Sets up the terminal, drives the event loop, and restores the terminal on
/// exit even if the loop failed.
#[instrument(skip(config))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting Strictly Mastermind TUI");
    let mut app = App::new(
        *config.rules(),
        config.palette().generator(),
        config.palette().rng(),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "TUI loop failed");
    }
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &*app))?;

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key) == AppAction::Quit
        {
            info!("Quitting");
            return Ok(());
        }
    }
}
