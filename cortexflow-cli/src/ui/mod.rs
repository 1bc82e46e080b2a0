//! Terminal UI for CortexFlow.
//!
//! Provides the dashboard: a fixed two-region layout composing the
//! navigation sidebar, top bar, cluster status row, sensor map, device
//! list, and analytics panel.

pub mod dashboard;
pub mod widgets;

pub use dashboard::{Dashboard, DashboardEvent};
