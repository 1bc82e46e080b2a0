//! TUI application loop for the CortexFlow CLI.
//!
//! The `run` command acts as a thin front controller that loads and
//! validates configuration, then delegates here. This module builds the
//! theme and page model, creates the dashboard, and drives the draw/poll
//! loop until the user quits.

use cortexflow::config::ConfigFile;
use cortexflow::dashboard::DashboardModel;
use cortexflow::theme::Theme;

use crate::error::CliError;
use crate::ui::{Dashboard, DashboardEvent};

/// Build the effective theme from configuration.
pub fn build_theme(config: &ConfigFile) -> Theme {
    let theme = Theme::for_mode(config.theme.mode);
    match config.theme.accent {
        Some(accent) => theme.with_accent(accent),
        None => theme,
    }
}

/// Run the dashboard until the user quits.
pub fn run_tui(config: &ConfigFile) -> Result<(), CliError> {
    let theme = build_theme(config);
    let model = DashboardModel::from_config(config, &theme);

    let mut dashboard = Dashboard::new(model, theme)?;

    loop {
        dashboard.draw()?;

        match dashboard.check_events()? {
            Some(DashboardEvent::Quit) => break,
            Some(DashboardEvent::ToggleAccountMenu) => dashboard.toggle_account_menu(),
            None => {}
        }
    }

    dashboard.restore()?;
    tracing::info!("dashboard session ended");
    Ok(())
}
