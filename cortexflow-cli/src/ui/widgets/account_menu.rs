//! Account dropdown widget.
//!
//! Rendered as an overlay only while the menu state machine is open; when
//! closed it is absent from the render tree entirely. The entries are
//! display-only.

use cortexflow::dashboard::{AccountProfile, ACCOUNT_MENU_ENTRIES};
use cortexflow::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::tint;

/// Overlay width in columns.
pub const ACCOUNT_MENU_WIDTH: u16 = 26;

/// Overlay height in rows: borders + identity header + separator + entries.
pub const ACCOUNT_MENU_HEIGHT: u16 = 7;

/// Widget displaying the account dropdown.
pub struct AccountMenuWidget<'a> {
    profile: &'a AccountProfile,
    theme: &'a Theme,
}

impl<'a> AccountMenuWidget<'a> {
    pub fn new(profile: &'a AccountProfile, theme: &'a Theme) -> Self {
        Self { profile, theme }
    }
}

impl Widget for AccountMenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(
                self.profile.display_name.clone(),
                Style::default()
                    .fg(tint(self.theme.title))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                self.profile.email.clone(),
                Style::default().fg(tint(self.theme.sidebar_font)),
            ),
            Line::styled(
                "─".repeat(ACCOUNT_MENU_WIDTH.saturating_sub(2) as usize),
                Style::default().fg(Color::DarkGray),
            ),
        ]
        .into_iter()
        .chain(ACCOUNT_MENU_ENTRIES.iter().map(|entry| {
            Line::styled(
                format!("  {}", entry),
                Style::default().fg(tint(self.theme.sidebar_font)),
            )
        }))
        .collect::<Vec<_>>();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(tint(self.theme.accent)))
                    .style(Style::default().bg(tint(self.theme.base))),
            )
            .render(area, buf);
    }
}
