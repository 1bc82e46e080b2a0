//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented INI representation written to `config.ini`.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub fn to_config_string(config: &ConfigFile) -> String {
    let accent = config
        .theme
        .accent
        .map(|c| c.to_string())
        .unwrap_or_default();

    format!(
        r#"[dashboard]
; Display name used in the top bar greeting ("Hello <user_name>")
user_name = {}
; Number of devices shown in the device panel (0-32)
device_count = {}

[theme]
; Palette selection: light or dark
mode = {}
; Optional brand accent override, e.g. #6425FE
; If empty, the palette default is used
accent = {}

[logging]
; Log filename inside the log directory
file = {}
"#,
        config.dashboard.user_name,
        config.dashboard.device_count,
        config.theme.mode,
        accent,
        config.logging.file,
    )
}
