//! Configuration for CortexFlow components.
//!
//! User configuration lives in `~/.cortexflow/config.ini`. The module is
//! split by responsibility:
//!
//! - [`settings`] - pure data structs, one per `[section]`
//! - [`defaults`] - `DEFAULT_*` constants and the `Default` impl
//! - `parser` - `Ini` → [`ConfigFile`] with per-key validation
//! - `writer` - [`ConfigFile`] → commented INI string
//! - [`file`] - load/save and path helpers

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    DEFAULT_DEVICE_COUNT, DEFAULT_LOG_FILE, DEFAULT_USER_NAME, MAX_DEVICE_COUNT,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, DashboardSettings, LoggingSettings, ThemeSettings};
pub use writer::to_config_string;
