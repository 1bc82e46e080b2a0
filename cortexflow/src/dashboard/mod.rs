//! Dashboard composition model.
//!
//! A declarative tree of independent, stateless panel models. Control flow is
//! unidirectional and purely presentational: the page owns no shared state,
//! and the only mutable flag on the whole dashboard is the account menu's
//! [`MenuState`], owned by the top bar.
//!
//! # Module Structure
//!
//! - `metric` - the labeled-value card abstraction and the literal status row
//! - `device` - device roster and its lazy row sequence
//! - `analytics` - chart placeholder and fixed year markers
//! - `navigation` - sidebar labels and advice callout
//! - `account` - the menu state machine and profile data

pub mod account;
pub mod analytics;
pub mod device;
pub mod metric;
pub mod navigation;

pub use account::{AccountProfile, MenuState, ACCOUNT_MENU_ENTRIES};
pub use analytics::{AnalyticsModel, YEAR_MARKERS};
pub use device::{DeviceEntry, DeviceRoster, Protocol};
pub use metric::{cluster_status_row, MetricEntry, METRIC_CAPTION};
pub use navigation::{AdviceCallout, NavItem, SidebarModel, NAV_ITEMS};

use crate::config::ConfigFile;
use crate::theme::Theme;

/// Reference to a placeholder image asset, identified only by its pixel
/// dimensions. There is no format contract beyond "renderable region".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub width: u16,
    pub height: u16,
}

impl ImageRef {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Dimension label, e.g. `680 x 432`.
    pub fn label(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}

/// The sensor map panel: a captioned static map region. No interactivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorMapModel {
    pub map: ImageRef,
}

impl SensorMapModel {
    pub fn caption(&self) -> &'static str {
        "Your sensor map"
    }
}

impl Default for SensorMapModel {
    fn default() -> Self {
        Self {
            map: ImageRef::new(680, 432),
        }
    }
}

/// The top bar: greeting, notification bell, and account control.
///
/// The menu's open/closed state is not stored here - it lives with whatever
/// owns the render loop, because it resets when the bar unmounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopBarModel {
    pub greeting: String,
    pub profile: AccountProfile,
}

impl TopBarModel {
    pub fn new(user_name: &str) -> Self {
        Self {
            greeting: format!("Hello {}", user_name),
            profile: AccountProfile::default(),
        }
    }
}

/// The fully composed dashboard page.
///
/// Exactly one sidebar, one top bar, four metric cards, one sensor map, one
/// device roster, and one analytics panel - fixed composition, no data
/// loading.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub sidebar: SidebarModel,
    pub top_bar: TopBarModel,
    pub metrics: Vec<MetricEntry>,
    pub sensor_map: SensorMapModel,
    pub devices: DeviceRoster,
    pub analytics: AnalyticsModel,
}

impl DashboardModel {
    /// Build the page model from configuration and theme.
    pub fn from_config(config: &ConfigFile, theme: &Theme) -> Self {
        Self {
            sidebar: SidebarModel::default(),
            top_bar: TopBarModel::new(&config.dashboard.user_name),
            metrics: cluster_status_row(theme),
            sensor_map: SensorMapModel::default(),
            devices: DeviceRoster::new(config.dashboard.device_count),
            analytics: AnalyticsModel::default(),
        }
    }
}
