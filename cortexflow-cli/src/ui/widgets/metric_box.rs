//! Metric card widget.
//!
//! Renders one labeled value inside a card tinted by the entry's accent:
//! label on top, the constant caption, then the value. Pure function of the
//! entry and theme; empty label or value render as empty lines.

use cortexflow::dashboard::{MetricEntry, METRIC_CAPTION};
use cortexflow::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph, Widget},
};

use super::tint;

/// Widget displaying a single metric card.
pub struct MetricBoxWidget<'a> {
    entry: &'a MetricEntry,
    theme: &'a Theme,
}

impl<'a> MetricBoxWidget<'a> {
    pub fn new(entry: &'a MetricEntry, theme: &'a Theme) -> Self {
        Self { entry, theme }
    }

    /// The card's three text rows, top to bottom.
    fn rows(&self) -> [String; 3] {
        [
            self.entry.label.clone(),
            METRIC_CAPTION.to_string(),
            self.entry.value.clone(),
        ]
    }
}

impl Widget for MetricBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [label, caption, value] = self.rows();

        // Card text is always dark; the tints are pastel in both palettes.
        let lines = vec![
            Line::styled(label, Style::default().fg(tint(Theme::light().title))),
            Line::styled(caption, Style::default().fg(tint(self.theme.metric_caption))),
            Line::styled(
                value,
                Style::default()
                    .fg(tint(self.theme.metric_value))
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .style(Style::default().bg(tint(self.entry.accent)))
                    .padding(Padding::new(2, 2, 1, 0)),
            )
            .render(area, buf);
    }
}
