//! Container control commands (stop / start / restart).

use dockwatch_core::{ControlAction, HostConfig, run_control};

use crate::error::CliError;
use crate::util;

/// Control command handler
pub fn cmd_control(
    config: &HostConfig,
    action: ControlAction,
    container: &str,
) -> Result<(), CliError> {
    let runtime = util::build_runtime()?;
    let output = runtime.block_on(run_control(config, action, container))?;

    if output.is_empty() {
        println!("{} {container}: done", action.verb());
    } else {
        println!("{output}");
    }
    Ok(())
}
