//! Navigation sidebar widget.
//!
//! Product title, section caption, the fixed navigation list, and the
//! advice callout. The active item is a display constant from the model.

use cortexflow::dashboard::{NavItem, SidebarModel};
use cortexflow::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::tint;

/// Widget displaying the navigation sidebar.
pub struct SidebarWidget<'a> {
    model: &'a SidebarModel,
    theme: &'a Theme,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(model: &'a SidebarModel, theme: &'a Theme) -> Self {
        Self { model, theme }
    }

    fn item_style(&self, item: &NavItem) -> Style {
        if item.active {
            Style::default()
                .fg(tint(self.theme.accent))
                .bg(tint(self.theme.selection_bg))
                .add_modifier(Modifier::BOLD)
        } else if item.destructive {
            Style::default().fg(tint(self.theme.signout))
        } else {
            Style::default().fg(tint(self.theme.sidebar_font))
        }
    }
}

impl Widget for SidebarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = vec![
            Line::styled(
                self.model.title,
                Style::default()
                    .fg(tint(self.theme.title))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(
                self.model.section_caption,
                Style::default()
                    .fg(tint(self.theme.sidebar_font))
                    .add_modifier(Modifier::DIM),
            ),
            Line::default(),
        ];

        for item in self.model.items {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", item.label),
                self.item_style(item),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            self.model.advice.title,
            Style::default().fg(tint(self.theme.accent)),
        ));
        lines.push(Line::styled(
            self.model.advice.body,
            Style::default().fg(tint(self.theme.advice)),
        ));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_uses_selection_colors() {
        let model = SidebarModel::default();
        let theme = Theme::light();
        let widget = SidebarWidget::new(&model, &theme);

        let active = model.items.iter().find(|i| i.active).unwrap();
        let style = widget.item_style(active);
        assert_eq!(style.bg, Some(tint(theme.selection_bg)));
        assert_eq!(style.fg, Some(tint(theme.accent)));
    }

    #[test]
    fn test_logout_uses_destructive_color() {
        let model = SidebarModel::default();
        let theme = Theme::light();
        let widget = SidebarWidget::new(&model, &theme);

        let logout = model.items.iter().find(|i| i.destructive).unwrap();
        assert_eq!(widget.item_style(logout).fg, Some(tint(theme.signout)));
    }

    #[test]
    fn test_render_lists_every_label_in_order() {
        let model = SidebarModel::default();
        let theme = Theme::light();
        let area = Rect::new(0, 0, 24, 24);
        let mut buf = Buffer::empty(area);
        SidebarWidget::new(&model, &theme).render(area, &mut buf);

        let mut text = String::new();
        for y in 0..24 {
            for x in 0..24 {
                text.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        assert!(text.contains("CortexFlow"));
        assert!(text.contains("User Panel"));
        let mut last = 0;
        for label in ["Dashboard", "Nodes", "Pipeline", "Config", "Roles"] {
            let pos = text.find(label).unwrap_or_else(|| panic!("missing {}", label));
            assert!(pos > last || last == 0);
            last = pos;
        }
        assert!(text.contains("CortexFlow Advices"));
    }
}
