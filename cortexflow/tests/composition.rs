//! Integration tests for the dashboard composition model.
//!
//! These exercise the public API the way a front end does: load
//! configuration, build the theme, compose the page model, and check the
//! structural invariants of the result.

use cortexflow::config::ConfigFile;
use cortexflow::dashboard::{DashboardModel, MenuState, ACCOUNT_MENU_ENTRIES, YEAR_MARKERS};
use cortexflow::theme::{Rgb, Theme, ThemeMode};

#[test]
fn default_page_composition() {
    let config = ConfigFile::default();
    let theme = Theme::for_mode(config.theme.mode);
    let model = DashboardModel::from_config(&config, &theme);

    // Exactly one of each panel is inherent in the model shape; the
    // countable parts are the metric row and the roster.
    assert_eq!(model.metrics.len(), 4);
    assert_eq!(model.devices.len(), 5);
    assert_eq!(model.sidebar.items.len(), 8);
    assert_eq!(model.analytics.year_markers(), YEAR_MARKERS);

    let names: Vec<String> = model.devices.entries().map(|d| d.display_name()).collect();
    assert_eq!(names, ["Device 1", "Device 2", "Device 3", "Device 4", "Device 5"]);
    for entry in model.devices.entries() {
        assert_eq!(entry.protocol_label(), "Protocol: MQTT");
    }
}

#[test]
fn menu_state_machine_round_trip() {
    let mut menu = MenuState::default();
    assert!(!menu.is_open());
    menu.toggle();
    assert!(menu.is_open());
    menu.toggle();
    assert_eq!(menu, MenuState::default());
    assert_eq!(ACCOUNT_MENU_ENTRIES.len(), 2);
}

#[test]
fn config_file_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");

    let mut config = ConfigFile::default();
    config.dashboard.user_name = String::from("Grace");
    config.dashboard.device_count = 1;
    config.theme.mode = ThemeMode::Dark;
    config.theme.accent = Some(Rgb::new(0x64, 0x25, 0xFE));
    config.save_to(&path).unwrap();

    let loaded = ConfigFile::load_from(&path).unwrap();
    assert_eq!(loaded, config);

    // The loaded configuration drives the model the same way.
    let theme = Theme::for_mode(loaded.theme.mode)
        .with_accent(loaded.theme.accent.unwrap());
    let model = DashboardModel::from_config(&loaded, &theme);
    assert_eq!(model.top_bar.greeting, "Hello Grace");
    assert_eq!(model.devices.len(), 1);
}

#[test]
fn accent_override_flows_into_theme_not_model_literals() {
    let custom = Rgb::new(0x00, 0x80, 0x80);
    let theme = Theme::for_mode(ThemeMode::Light).with_accent(custom);
    let model = DashboardModel::from_config(&ConfigFile::default(), &theme);

    assert_eq!(theme.accent, custom);
    // Metric tints come from the palette's accent row, not the brand accent.
    for entry in &model.metrics {
        assert_ne!(entry.accent, custom);
    }
}
