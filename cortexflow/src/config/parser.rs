//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::defaults::MAX_DEVICE_COUNT;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::theme::Rgb;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [dashboard] section
    if let Some(section) = ini.section(Some("dashboard")) {
        if let Some(v) = section.get("user_name") {
            let v = v.trim();
            if !v.is_empty() {
                config.dashboard.user_name = v.to_string();
            }
        }
        if let Some(v) = section.get("device_count") {
            let count: u32 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "dashboard".to_string(),
                key: "device_count".to_string(),
                value: v.to_string(),
                reason: "must be a non-negative integer".to_string(),
            })?;
            if count > MAX_DEVICE_COUNT {
                return Err(ConfigFileError::InvalidValue {
                    section: "dashboard".to_string(),
                    key: "device_count".to_string(),
                    value: v.to_string(),
                    reason: format!("must be at most {}", MAX_DEVICE_COUNT),
                });
            }
            config.dashboard.device_count = count;
        }
    }

    // [theme] section
    if let Some(section) = ini.section(Some("theme")) {
        if let Some(v) = section.get("mode") {
            config.theme.mode = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "theme".to_string(),
                key: "mode".to_string(),
                value: v.to_string(),
                reason: "must be 'light' or 'dark'".to_string(),
            })?;
        }
        if let Some(v) = section.get("accent") {
            let v = v.trim();
            if !v.is_empty() {
                let accent = Rgb::from_hex(v).map_err(|_| ConfigFileError::InvalidValue {
                    section: "theme".to_string(),
                    key: "accent".to_string(),
                    value: v.to_string(),
                    reason: "expected format like '#6425FE'".to_string(),
                })?;
                config.theme.accent = Some(accent);
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).expect("valid ini");
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_yields_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_overlays_values() {
        let config = parse(
            "[dashboard]\nuser_name = Ada\ndevice_count = 3\n\n[theme]\nmode = dark\naccent = #112233\n",
        )
        .unwrap();
        assert_eq!(config.dashboard.user_name, "Ada");
        assert_eq!(config.dashboard.device_count, 3);
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.theme.accent, Some(Rgb::new(0x11, 0x22, 0x33)));
    }

    #[test]
    fn test_invalid_device_count() {
        let err = parse("[dashboard]\ndevice_count = lots\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue { section, key, .. } => {
                assert_eq!(section, "dashboard");
                assert_eq!(key, "device_count");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_device_count_above_maximum() {
        let err = parse("[dashboard]\ndevice_count = 999\n").unwrap_err();
        assert!(err.to_string().contains("at most"));
    }

    #[test]
    fn test_invalid_theme_mode() {
        let err = parse("[theme]\nmode = sepia\n").unwrap_err();
        assert!(err.to_string().contains("theme.mode"));
    }

    #[test]
    fn test_invalid_accent() {
        let err = parse("[theme]\naccent = 6425FE\n").unwrap_err();
        assert!(err.to_string().contains("theme.accent"));
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = parse("[dashboard]\nuser_name =\n\n[theme]\naccent =\n").unwrap();
        assert_eq!(config.dashboard.user_name, super::super::DEFAULT_USER_NAME);
        assert_eq!(config.theme.accent, None);
    }
}
