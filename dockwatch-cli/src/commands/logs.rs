//! Log tail command.

use dockwatch_core::{
    EndReason, HostConfig, LogEvent, MetricRow, TableSnapshot, fetch_snapshot, start_log_tail,
};

use crate::error::CliError;
use crate::util;

/// Logs command handler.
///
/// The running state observed just before the tail starts decides the
/// close behavior: if the container was running, natural stream end
/// closes the view; if it was not, the view stays open until Ctrl-C so
/// a deliberately opened tail of a stopped container is not snatched
/// away.
pub fn cmd_logs(config: &HostConfig, container: &str) -> Result<(), CliError> {
    let runtime = util::build_runtime()?;
    runtime.block_on(async {
        let snapshot = fetch_snapshot(config).await?;
        let was_running = match find_row(&snapshot, container) {
            Some(row) => row.running,
            None => {
                eprintln!("warning: {container} not present in the stats table");
                false
            }
        };

        let (handle, mut rx) =
            start_log_tail(config.clone(), container.to_string(), was_running);

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    handle.cancel().await;
                }
                event = rx.recv() => match event {
                    Some(LogEvent::Line(line)) => println!("{line}"),
                    Some(LogEvent::Failed(msg)) => {
                        // Already the boundary report; no second message on exit
                        eprintln!("log stream failed: {msg}");
                        break;
                    }
                    Some(LogEvent::Ended { reason: EndReason::Cancelled, .. }) => break,
                    Some(LogEvent::Ended { auto_close: true, .. }) => break,
                    Some(LogEvent::Ended { .. }) => {
                        eprintln!("log stream ended; container was not running (Ctrl-C to close)");
                        let _ = tokio::signal::ctrl_c().await;
                        break;
                    }
                    None => break,
                }
            }
        }
        Ok(())
    })
}

/// Matches a row by exact id or name, then by id prefix
fn find_row<'a>(snapshot: &'a TableSnapshot, container: &str) -> Option<&'a MetricRow> {
    snapshot
        .rows()
        .iter()
        .find(|row| row.container_id == container || row.name == container)
        .or_else(|| {
            snapshot
                .rows()
                .iter()
                .find(|row| row.container_id.starts_with(container))
        })
}
