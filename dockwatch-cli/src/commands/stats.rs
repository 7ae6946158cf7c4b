//! One-shot stats snapshot command.

use dockwatch_core::sort::SortSpec;
use dockwatch_core::{HostConfig, fetch_snapshot};

use crate::error::CliError;
use crate::{format, util};

/// Stats command handler
pub fn cmd_stats(config: &HostConfig, sort: Option<&str>) -> Result<(), CliError> {
    let spec = sort
        .map(util::parse_sort_spec)
        .transpose()?
        .unwrap_or_else(SortSpec::new);

    let runtime = util::build_runtime()?;
    let snapshot = runtime.block_on(fetch_snapshot(config))?;

    print!("{}", format::render_table(&snapshot.sorted(&spec)));
    Ok(())
}
