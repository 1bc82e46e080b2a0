//! CortexFlow - Cluster, sensor, and device status dashboard
//!
//! This library provides the core composition model for the CortexFlow
//! dashboard: render-only view models for every panel, the account-menu
//! state machine, the theme token set, and the configuration and logging
//! services shared by the front ends.
//!
//! # High-Level API
//!
//! The [`dashboard`] module exposes the full page model:
//!
//! ```
//! use cortexflow::config::ConfigFile;
//! use cortexflow::dashboard::DashboardModel;
//! use cortexflow::theme::Theme;
//!
//! let config = ConfigFile::default();
//! let theme = Theme::for_mode(config.theme.mode);
//! let model = DashboardModel::from_config(&config, &theme);
//!
//! assert_eq!(model.metrics.len(), 4);
//! assert_eq!(model.devices.len(), 5);
//! ```
//!
//! Rendering is the front end's concern; nothing in this crate depends on a
//! UI toolkit.

pub mod config;
pub mod dashboard;
pub mod logging;
pub mod theme;

/// Version of the CortexFlow library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
