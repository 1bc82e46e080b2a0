//! Main dashboard rendering.
//!
//! This module contains the top-level layout orchestration.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────┬──────────────────────────────────────────────┐
//! │          │ Top bar (3 lines, greeting + account control)│
//! │          ├──────────────────────────────────────────────┤
//! │ Sidebar  │ Cluster Status (7 lines) - 4 metric cards    │
//! │ (26 cols)├───────────────────────────────┬──────────────┤
//! │          │ Your sensor map               │ Devices      │
//! │          ├───────────────────────────────┴──────────────┤
//! │          │ Analytics (11 lines)                         │
//! └──────────┴──────────────────────────────────────────────┘
//! ```
//!
//! The account dropdown renders as an overlay anchored under the top bar's
//! right edge whenever the menu is open.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear},
    Frame,
};

use cortexflow::dashboard::{DashboardModel, MenuState};
use cortexflow::theme::Theme;

use crate::ui::widgets::primitives::PlaceholderImage;
use crate::ui::widgets::{
    tint, AccountMenuWidget, AnalyticsWidget, DeviceListWidget, MetricBoxWidget, SidebarWidget,
    TopBarWidget, ACCOUNT_MENU_HEIGHT, ACCOUNT_MENU_WIDTH,
};

/// Sidebar column width, including its separator border.
const SIDEBAR_WIDTH: u16 = 26;

/// Render the main dashboard UI to the frame.
pub fn render_ui(frame: &mut Frame, model: &DashboardModel, theme: &Theme, menu: MenuState) {
    let size = frame.area();

    let regions = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(size);
    let (sidebar_area, main_area) = (regions[0], regions[1]);

    // 1. Navigation sidebar
    let sidebar_block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sidebar_block, sidebar_area);
    frame.render_widget(
        SidebarWidget::new(&model.sidebar, theme),
        inner_rect(sidebar_area, 2, 1),
    );

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Top bar
            Constraint::Length(7),  // Cluster status row
            Constraint::Min(12),    // Sensor map + devices
            Constraint::Length(11), // Analytics
        ])
        .split(main_area);

    // 2. Top bar
    let top_bar_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(top_bar_block, main[0]);
    frame.render_widget(
        TopBarWidget::new(&model.top_bar, menu, theme),
        inner_rect(main[0], 1, 1),
    );

    // 3. Cluster status: one card per metric entry
    let card_count = model.metrics.len().max(1) as u32;
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            model
                .metrics
                .iter()
                .map(|_| Constraint::Ratio(1, card_count))
                .collect::<Vec<_>>(),
        )
        .split(inner_rect(main[1], 1, 1));
    for (entry, area) in model.metrics.iter().zip(card_areas.iter()) {
        frame.render_widget(MetricBoxWidget::new(entry, theme), inner_rect(*area, 1, 0));
    }

    // 4. Sensor map + devices, side by side
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main[2]);

    let map_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", model.sensor_map.caption()),
            Style::default().fg(tint(theme.accent)),
        ));
    frame.render_widget(map_block, middle[0]);
    frame.render_widget(
        PlaceholderImage::new(model.sensor_map.map),
        inner_rect(middle[0], 2, 1),
    );

    let devices_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Devices ",
            Style::default().fg(tint(theme.accent)),
        ));
    frame.render_widget(devices_block, middle[1]);
    frame.render_widget(
        DeviceListWidget::new(&model.devices, theme),
        inner_rect(middle[1], 2, 1),
    );

    // 5. Analytics
    let analytics_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", model.analytics.title()),
            Style::default().fg(tint(theme.accent)),
        ));
    frame.render_widget(analytics_block, main[3]);
    frame.render_widget(
        AnalyticsWidget::new(&model.analytics, theme),
        inner_rect(main[3], 2, 1),
    );

    // Account dropdown overlay (if open)
    if menu.is_open() {
        let area = account_menu_area(main_area);
        frame.render_widget(Clear, area);
        frame.render_widget(AccountMenuWidget::new(&model.top_bar.profile, theme), area);
    }
}

/// Shrink a rect by horizontal and vertical margins.
pub(crate) fn inner_rect(area: Rect, hmargin: u16, vmargin: u16) -> Rect {
    Rect {
        x: area.x + hmargin.min(area.width / 2),
        y: area.y + vmargin.min(area.height / 2),
        width: area.width.saturating_sub(hmargin * 2),
        height: area.height.saturating_sub(vmargin * 2),
    }
}

/// The dropdown anchors under the top bar's right edge.
fn account_menu_area(main_area: Rect) -> Rect {
    let width = ACCOUNT_MENU_WIDTH.min(main_area.width);
    let height = ACCOUNT_MENU_HEIGHT.min(main_area.height.saturating_sub(3));
    Rect {
        x: main_area.right().saturating_sub(width + 1),
        y: main_area.y + 3,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_rect_shrinks_symmetrically() {
        let area = Rect::new(10, 10, 20, 10);
        let inner = inner_rect(area, 2, 1);
        assert_eq!(inner, Rect::new(12, 11, 16, 8));
    }

    #[test]
    fn test_inner_rect_never_underflows() {
        let area = Rect::new(0, 0, 3, 1);
        let inner = inner_rect(area, 2, 1);
        assert!(inner.width <= area.width);
        assert!(inner.height <= area.height);
    }

    #[test]
    fn test_account_menu_stays_inside_main_area() {
        let main = Rect::new(26, 0, 94, 40);
        let menu = account_menu_area(main);
        assert!(menu.right() <= main.right());
        assert!(menu.y >= main.y);
    }
}
