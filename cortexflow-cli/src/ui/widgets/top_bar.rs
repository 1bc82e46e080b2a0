//! Top bar widget.
//!
//! Greeting on the left; notification bell and account control on the
//! right. The account control's open/closed indicator reflects the menu
//! state passed in by the dashboard - the widget itself stays stateless.

use cortexflow::dashboard::{MenuState, TopBarModel};
use cortexflow::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::primitives::padded_row;
use super::tint;

/// Widget displaying the top bar.
pub struct TopBarWidget<'a> {
    model: &'a TopBarModel,
    menu: MenuState,
    theme: &'a Theme,
}

impl<'a> TopBarWidget<'a> {
    pub fn new(model: &'a TopBarModel, menu: MenuState, theme: &'a Theme) -> Self {
        Self { model, menu, theme }
    }

    /// The account control label with its open/closed indicator.
    fn account_control(&self) -> String {
        let indicator = if self.menu.is_open() { "▴" } else { "▾" };
        format!("[•]  Account {} (a)", indicator)
    }
}

impl Widget for TopBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let control = self.account_control();
        let greeting_width = self.model.greeting.chars().count();
        let row = padded_row(&self.model.greeting, &control, area.width as usize);
        let control_part = row[self.model.greeting.len()..].to_string();

        let line = Line::from(vec![
            Span::styled(
                self.model.greeting.clone(),
                Style::default()
                    .fg(tint(self.theme.title))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(control_part, Style::default().fg(tint(self.theme.sidebar_font))),
        ]);

        // Guard against degenerate widths where the greeting alone overflows.
        if greeting_width <= area.width as usize {
            Paragraph::new(line).render(area, buf);
        } else {
            Paragraph::new(self.model.greeting.clone()).render(area, buf);
        }
    }
}
