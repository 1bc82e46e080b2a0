//! Device list widget.
//!
//! One row pair per roster entry (name + protocol), derived from the roster
//! on every render. The add and manage affordances are displayed but inert:
//! no key bindings are attached, pending a device-management service.

use cortexflow::dashboard::DeviceRoster;
use cortexflow::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::tint;

/// Widget displaying the device roster and its inert affordances.
pub struct DeviceListWidget<'a> {
    roster: &'a DeviceRoster,
    theme: &'a Theme,
}

impl<'a> DeviceListWidget<'a> {
    pub fn new(roster: &'a DeviceRoster, theme: &'a Theme) -> Self {
        Self { roster, theme }
    }

    /// The (name, protocol) text pairs, in roster order.
    fn row_pairs(&self) -> Vec<(String, String)> {
        self.roster
            .entries()
            .map(|d| (d.display_name(), d.protocol_label()))
            .collect()
    }
}

impl Widget for DeviceListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = Style::default().fg(tint(self.theme.accent));
        let name_style = Style::default().fg(tint(self.theme.title));
        let protocol_style = Style::default().fg(tint(self.theme.sidebar_font));

        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            "[+] Add device",
            accent,
        ))];
        lines.push(Line::default());

        for (name, protocol) in self.row_pairs() {
            lines.push(Line::from(vec![
                Span::styled("◦ ", accent),
                Span::styled(name, name_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", protocol),
                protocol_style,
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "[ Manage devices ]",
            accent.add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(lines).render(area, buf);
    }
}
