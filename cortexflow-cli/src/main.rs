//! CortexFlow CLI - Command-line interface
//!
//! This binary provides the terminal dashboard and configuration commands.

use clap::{Parser, Subcommand};

use cortexflow_cli::commands::config::{self as config_cmd, ConfigAction};
use cortexflow_cli::commands::run::{self, RunArgs};

#[derive(Parser)]
#[command(name = "cortexflow")]
#[command(version = cortexflow::VERSION)]
#[command(about = "Terminal dashboard for cluster, sensor, and device status", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the dashboard (default)
    Run(RunArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Run(args)) => run::execute(args),
        Some(Command::Config { action }) => config_cmd::execute(action),
        // No subcommand launches the dashboard with defaults.
        None => run::execute(RunArgs::default()),
    };

    if let Err(e) = result {
        e.exit();
    }
}
