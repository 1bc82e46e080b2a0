//! Event types and key mapping for the dashboard.
//!
//! Kept independent of rendering so the key map can be tested in isolation.
//! The menu's own open/closed state machine lives in the library crate
//! ([`cortexflow::dashboard::MenuState`]); this module only names the events
//! that drive it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events that can occur in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// User requested quit ('q', Esc, or Ctrl+C).
    Quit,
    /// User activated the account control ('a').
    ToggleAccountMenu,
}

/// Map a key press to a dashboard event.
///
/// The account menu has no dedicated dismiss key: 'a' toggles it in both
/// directions, and Esc quits the application without touching the menu.
pub(crate) fn map_key(key: &KeyEvent) -> Option<DashboardEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(DashboardEvent::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(DashboardEvent::Quit),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(DashboardEvent::ToggleAccountMenu),
        _ => None,
    }
}
