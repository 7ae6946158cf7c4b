//! Periodic stats refresh command.

use std::time::Duration;

use dockwatch_core::sort::SortSpec;
use dockwatch_core::{HostConfig, MonitorEvent, capture_exec_factory, start_monitor};

use crate::error::CliError;
use crate::{format, util};

/// Watch command handler.
///
/// Prints a fresh table on every successful refresh; a failed refresh
/// prints a warning and leaves the previously printed table as the
/// latest state. Ctrl-C stops the monitor.
pub fn cmd_watch(config: &HostConfig, interval: u64, sort: Option<&str>) -> Result<(), CliError> {
    let spec = sort
        .map(util::parse_sort_spec)
        .transpose()?
        .unwrap_or_else(SortSpec::new);
    let interval = interval.clamp(1, 60);

    let runtime = util::build_runtime()?;
    runtime.block_on(async {
        let exec = capture_exec_factory(config.clone());
        let (handle, mut rx) = start_monitor(Duration::from_secs(interval), exec);

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    handle.stop().await;
                }
                event = rx.recv() => match event {
                    Some(MonitorEvent::Snapshot(snapshot)) => {
                        println!(
                            "== {} ({} containers) ==",
                            snapshot.collected_at().format("%H:%M:%S"),
                            snapshot.len()
                        );
                        print!("{}", format::render_table(&snapshot.sorted(&spec)));
                        println!();
                    }
                    Some(MonitorEvent::RefreshFailed(msg)) => {
                        eprintln!("refresh failed: {msg}");
                    }
                    Some(MonitorEvent::Stopped) | None => break,
                }
            }
        }
        Ok(())
    })
}
