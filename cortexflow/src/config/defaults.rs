//! Default values and constants for all configuration settings.

use super::settings::*;
use crate::theme::ThemeMode;

/// Default greeting user. The source drafts ship with a placeholder user,
/// so an untouched install greets `Hello [User]` verbatim.
pub const DEFAULT_USER_NAME: &str = "[User]";

/// Default roster size.
pub const DEFAULT_DEVICE_COUNT: u32 = 5;

/// Upper bound for the roster size. The device panel is a fixed region;
/// rosters beyond this do not fit any supported layout.
pub const MAX_DEVICE_COUNT: u32 = 32;

/// Default log filename.
pub const DEFAULT_LOG_FILE: &str = "cortexflow.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            dashboard: DashboardSettings::default(),
            theme: ThemeSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            device_count: DEFAULT_DEVICE_COUNT,
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
