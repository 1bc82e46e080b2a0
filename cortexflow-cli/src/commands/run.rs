//! The `run` command: load configuration, apply overrides, launch the TUI.
//!
//! This is a thin front controller; the event loop lives in
//! [`crate::tui_app`].

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use cortexflow::config::{ConfigFile, MAX_DEVICE_COUNT};
use cortexflow::logging::{default_log_dir, init_logging};
use cortexflow::theme::ThemeMode;

use crate::error::CliError;
use crate::tui_app;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    /// Light palette
    Light,
    /// Dark palette
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Path to the configuration file (default: ~/.cortexflow/config.ini)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the configured theme mode
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Override the configured device roster size
    #[arg(long)]
    pub devices: Option<u32>,

    /// Skip log file setup
    #[arg(long)]
    pub no_log_file: bool,
}

pub fn execute(args: RunArgs) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };

    if let Some(theme) = args.theme {
        config.theme.mode = theme.into();
    }
    if let Some(devices) = args.devices {
        if devices > MAX_DEVICE_COUNT {
            return Err(CliError::InvalidOption {
                option: "--devices",
                reason: format!("must be at most {}", MAX_DEVICE_COUNT),
            });
        }
        config.dashboard.device_count = devices;
    }

    // The dashboard owns the terminal, so logging goes to file only.
    let _guard = if args.no_log_file {
        None
    } else {
        Some(
            init_logging(default_log_dir(), &config.logging.file, false)
                .map_err(|e| CliError::LoggingInit(e.to_string()))?,
        )
    };

    tracing::info!(
        version = cortexflow::VERSION,
        theme = %config.theme.mode,
        devices = config.dashboard.device_count,
        "starting dashboard"
    );

    tui_app::run_tui(&config)
}
