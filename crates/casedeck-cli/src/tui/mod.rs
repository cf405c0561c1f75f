//! Interactive terminal UI for casedeck.
//!
//! Provides the full client workflow in one screen:
//! - document selection and upload
//! - statistics and per-type breakdown
//! - filterable test-case grid with edit/delete
//! - spreadsheet export and clear-all

mod app;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use app::App;
use casedeck_core::{Config, TestCaseApi};

/// Run the TUI application.
pub async fn run(config: Config, api: Arc<dyn TestCaseApi>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config, api);

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
