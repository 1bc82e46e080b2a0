//! Analytics panel widget.
//!
//! A placeholder chart region with the fixed year markers spread along the
//! bottom edge. The markers come from the model's compiled-in constants and
//! render in their fixed order regardless of the area width.

use cortexflow::dashboard::AnalyticsModel;
use cortexflow::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};

use super::primitives::PlaceholderImage;
use super::tint;

/// Widget displaying the analytics chart placeholder and year axis.
pub struct AnalyticsWidget<'a> {
    model: &'a AnalyticsModel,
    theme: &'a Theme,
}

impl<'a> AnalyticsWidget<'a> {
    pub fn new(model: &'a AnalyticsModel, theme: &'a Theme) -> Self {
        Self { model, theme }
    }

    /// Spread the year labels across a row of the given width: the first
    /// label starts at the left edge, the last ends at the right edge, and
    /// the spare space is distributed across the gaps.
    fn year_axis(&self, width: usize) -> String {
        let labels: Vec<String> = self
            .model
            .year_markers()
            .iter()
            .map(|y| y.to_string())
            .collect();
        let gaps = labels.len().saturating_sub(1);
        if gaps == 0 {
            return labels.concat();
        }

        let label_width: usize = labels.iter().map(|l| l.chars().count()).sum();
        let spare = match width.checked_sub(label_width) {
            Some(spare) if spare >= gaps => spare,
            _ => return labels.join(" "),
        };

        let base = spare / gaps;
        let extra = spare % gaps;
        let mut out = String::new();
        for (i, label) in labels.iter().enumerate() {
            out.push_str(label);
            if i < gaps {
                let pad = base + usize::from(i < extra);
                out.push_str(&" ".repeat(pad));
            }
        }
        out
    }
}

impl Widget for AnalyticsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        PlaceholderImage::new(self.model.chart).render(sections[0], buf);
        if sections[1].height == 0 {
            return;
        }
        let axis = self.year_axis(sections[1].width as usize);
        buf.set_stringn(
            sections[1].x,
            sections[1].y,
            axis,
            sections[1].width as usize,
            Style::default()
                .fg(tint(self.theme.title))
                .add_modifier(Modifier::BOLD),
        );
    }
}
