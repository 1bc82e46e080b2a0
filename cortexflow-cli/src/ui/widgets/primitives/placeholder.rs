//! Placeholder image primitive.
//!
//! The source dashboards render fixed-size placeholder images where real
//! map and chart assets would go. The terminal analogue is a hatch-filled
//! region with the asset's pixel dimensions centered in it.

use cortexflow::dashboard::ImageRef;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const HATCH: &str = "░";

/// A hatch-filled region standing in for an image asset.
pub struct PlaceholderImage {
    image: ImageRef,
    fill_style: Style,
    label_style: Style,
}

impl PlaceholderImage {
    pub fn new(image: ImageRef) -> Self {
        Self {
            image,
            fill_style: Style::default().fg(Color::DarkGray),
            label_style: Style::default().fg(Color::Gray),
        }
    }

    /// Set the style of the hatch fill.
    pub fn fill_style(mut self, style: Style) -> Self {
        self.fill_style = style;
        self
    }

    /// Set the style of the centered dimension label.
    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    /// The centered label, e.g. `[ 680 x 432 ]`.
    fn label(&self) -> String {
        format!("[ {} ]", self.image.label())
    }
}

impl Widget for PlaceholderImage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let row = HATCH.repeat(area.width as usize);
        for y in area.top()..area.bottom() {
            buf.set_string(area.x, y, &row, self.fill_style);
        }

        let label = self.label();
        let label_width = label.chars().count() as u16;
        if label_width <= area.width {
            let x = area.x + (area.width - label_width) / 2;
            let y = area.y + area.height / 2;
            buf.set_string(x, y, &label, self.label_style);
        }
    }
}
