//! Dashboard widgets for the TUI.
//!
//! This module contains:
//! - **Primitives**: reusable low-level components (placeholder images,
//!   row formatting)
//! - **Panel widgets**: one widget per dashboard panel, each a pure render
//!   of its borrowed view model and theme
//!
//! Widgets never own state; the account menu's open/closed flag is passed
//! in by the dashboard that owns it.

mod account_menu;
mod analytics;
mod device_list;
mod metric_box;
pub mod primitives;
mod sidebar;
mod top_bar;

pub use account_menu::{AccountMenuWidget, ACCOUNT_MENU_HEIGHT, ACCOUNT_MENU_WIDTH};
pub use analytics::AnalyticsWidget;
pub use device_list::DeviceListWidget;
pub use metric_box::MetricBoxWidget;
pub use sidebar::SidebarWidget;
pub use top_bar::TopBarWidget;

use cortexflow::theme::Rgb;
use ratatui::style::Color;

/// Convert a theme token into a terminal color.
pub fn tint(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
