//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use crate::theme::{Rgb, ThemeMode};

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Dashboard settings
    pub dashboard: DashboardSettings,
    /// Theme settings
    pub theme: ThemeSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Display name used in the top bar greeting.
    pub user_name: String,
    /// Number of devices in the roster.
    pub device_count: u32,
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
    /// Palette selection: light or dark.
    pub mode: ThemeMode,
    /// Optional brand accent override, `#RRGGBB`.
    pub accent: Option<Rgb>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log filename inside the log directory.
    pub file: String,
}
