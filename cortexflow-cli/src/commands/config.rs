//! The `config` subcommands: show, path, init.

use clap::Subcommand;
use cortexflow::config::{config_file_path, to_config_string, ConfigFile};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Create the configuration file with defaults if it doesn't exist
    Init,
}

pub fn execute(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            let config = ConfigFile::load()?;
            print!("{}", to_config_string(&config));
        }
        ConfigAction::Path => {
            println!("{}", config_file_path().display());
        }
        ConfigAction::Init => {
            let existed = config_file_path().exists();
            let path = ConfigFile::ensure_exists()?;
            if existed {
                println!("Configuration already exists at {}", path.display());
            } else {
                println!("Created {}", path.display());
            }
        }
    }
    Ok(())
}
