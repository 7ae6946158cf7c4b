//! Shared utility functions used across command modules.

use dockwatch_core::sort::{Direction, SortKey, SortSpec};
use dockwatch_core::{ColumnId, HostConfig};

use crate::cli::Cli;
use crate::error::CliError;

/// Loads the host configuration and applies CLI overrides on top.
pub fn load_host_config(cli: &Cli) -> Result<HostConfig, CliError> {
    let mut config = HostConfig::load_or_default(cli.config.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;

    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(user) = &cli.user {
        config.username = user.clone();
    }
    if let Some(identity) = &cli.identity {
        config.identity_file = Some(identity.clone());
    }
    tracing::debug!(host = %config.host, port = config.port, "Resolved host config");
    Ok(config)
}

/// Parses a `--sort` argument like `cpu:desc,name:asc` into a spec.
///
/// The direction defaults to descending when omitted, matching the
/// interactive toggle default.
pub fn parse_sort_spec(arg: &str) -> Result<SortSpec, CliError> {
    let mut keys = Vec::new();
    for part in arg.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (column, direction) = match part.split_once(':') {
            Some((column, direction)) => (column, parse_direction(direction)?),
            None => (part, Direction::Descending),
        };
        let column: ColumnId = column.parse().map_err(CliError::SortSpec)?;
        if keys.iter().any(|k: &SortKey| k.column == column) {
            return Err(CliError::SortSpec(format!("duplicate column: {part}")));
        }
        keys.push(SortKey { column, direction });
    }
    if keys.is_empty() {
        return Err(CliError::SortSpec("no sort keys given".to_string()));
    }
    Ok(SortSpec::from_keys(keys))
}

fn parse_direction(s: &str) -> Result<Direction, CliError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Ok(Direction::Ascending),
        "desc" | "descending" => Ok(Direction::Descending),
        other => Err(CliError::SortSpec(format!("unknown direction: {other}"))),
    }
}

/// Builds the tokio runtime used by command handlers.
pub fn build_runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(format!("Failed to create async runtime: {e}")))
}
