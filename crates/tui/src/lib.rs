// crates/tui/src/lib.rs
//! Terminal user interface for Bookdeck

mod app;
mod error;
mod events;
mod state;
mod theme;
pub mod ui;

pub use app::App;
pub use error::{TuiError, TuiResult};
pub use events::{AppEvent, EventHandler};
pub use state::{AppState, Overlay, SearchField, SearchForm, SettingsForm};
pub use theme::{Theme, ThemeType};

use bookdeck_catalog::Catalog;
use bookdeck_config::Config;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Main TUI application wrapper
///
/// Owns the terminal setup/teardown around the [`App`] run loop.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
}

impl TuiApp {
    /// Creates and initializes a new TUI application
    pub fn new(catalog: Catalog, config: &Config) -> TuiResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: App::new(catalog, config),
        })
    }

    /// Runs the TUI application
    pub fn run(&mut self) -> TuiResult<()> {
        let result = self.app.run(&mut self.terminal);
        self.cleanup()?;
        result
    }

    /// Cleans up terminal state
    fn cleanup(&mut self) -> TuiResult<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
