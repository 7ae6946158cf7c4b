//! Command handler modules for the CLI.

mod control;
mod logs;
mod stats;
mod watch;

use dockwatch_core::ControlAction;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::util;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let config = util::load_host_config(&cli)?;
    match cli.command {
        Commands::Stats { sort } => stats::cmd_stats(&config, sort.as_deref()),
        Commands::Watch { interval, sort } => watch::cmd_watch(&config, interval, sort.as_deref()),
        Commands::Stop { container } => {
            control::cmd_control(&config, ControlAction::Stop, &container)
        }
        Commands::Start { container } => {
            control::cmd_control(&config, ControlAction::Start, &container)
        }
        Commands::Restart { container } => {
            control::cmd_control(&config, ControlAction::Restart, &container)
        }
        Commands::Logs { container } => logs::cmd_logs(&config, &container),
    }
}
