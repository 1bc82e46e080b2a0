//! Main TUI dashboard for CortexFlow.
//!
//! Owns the terminal lifecycle (raw mode + alternate screen, restored on
//! exit and on drop) and the single piece of interactive state on the page:
//! the account menu's open/closed flag.
//!
//! # Module Structure
//!
//! - `state` - event types and key mapping (no rendering dependencies)
//! - `render` - layout orchestration

pub mod render;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cortexflow::dashboard::{DashboardModel, MenuState};
use cortexflow::theme::Theme;

pub use state::DashboardEvent;

/// Poll interval for keyboard events; doubles as the draw cadence.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main dashboard UI.
pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    model: DashboardModel,
    theme: Theme,
    /// Account menu state; starts closed, dies with the dashboard.
    menu: MenuState,
}

impl Dashboard {
    /// Create a new dashboard, entering the alternate screen.
    pub fn new(model: DashboardModel, theme: Theme) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            model,
            theme,
            menu: MenuState::default(),
        })
    }

    /// Current account menu state.
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Fire the account control: toggles the menu unconditionally.
    pub fn toggle_account_menu(&mut self) {
        self.menu.toggle();
    }

    /// Draw the dashboard.
    pub fn draw(&mut self) -> io::Result<()> {
        let model = &self.model;
        let theme = &self.theme;
        let menu = self.menu;
        self.terminal.draw(|frame| {
            render::render_ui(frame, model, theme, menu);
        })?;
        Ok(())
    }

    /// Check for events (non-blocking beyond the poll interval).
    pub fn check_events(&mut self) -> io::Result<Option<DashboardEvent>> {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                return Ok(state::map_key(&key));
            }
        }
        Ok(None)
    }

    /// Restore terminal to normal state.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
