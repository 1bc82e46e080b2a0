//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use cortexflow::config::ConfigFileError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Invalid command-line option value
    InvalidOption {
        option: &'static str,
        reason: String,
    },
    /// Terminal setup or rendering error
    Terminal(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Check the configuration file, or recreate it with:");
                eprintln!("  cortexflow config init");
            }
            CliError::Terminal(_) => {
                eprintln!();
                eprintln!("The dashboard needs an interactive terminal (TTY).");
                eprintln!("If running over SSH or in a container, allocate one (e.g. ssh -t).");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidOption { option, reason } => {
                write!(f, "Invalid value for {}: {}", option, reason)
            }
            CliError::Terminal(e) => write!(f, "Terminal error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Terminal(e)
    }
}
