//! Refresh cycle: fetch, parse, publish
//!
//! A refresh opens a session, captures the stats command, parses every
//! record, and yields a new [`TableSnapshot`]. The periodic monitor loop
//! repeats the cycle on a ticker; a failed refresh emits an event and no
//! snapshot, so the consumer's previous snapshot stays untouched.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::HostConfig;
use crate::error::DockwatchResult;
use crate::session::RemoteSession;
use crate::stats::{STATS_COMMAND, StatsParser, TableSnapshot};

/// Default interval between automatic refreshes (seconds)
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3;

/// Maximum consecutive refresh failures before the monitor gives up
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// Events emitted by the periodic monitor
#[derive(Debug, Clone)]
pub enum MonitorEvent {
    /// A refresh completed; replace the current snapshot with this one
    Snapshot(TableSnapshot),
    /// A refresh failed; the previous snapshot remains valid
    RefreshFailed(String),
    /// The monitor stopped (requested, or too many consecutive failures)
    Stopped,
}

/// Handle to stop a running monitor
#[derive(Debug)]
pub struct MonitorHandle {
    stop_tx: mpsc::Sender<()>,
}

impl MonitorHandle {
    /// Signals the monitor to stop
    pub async fn stop(&self) {
        let _ = self.stop_tx.send(()).await;
    }
}

/// Runs one refresh cycle over an injected exec callback.
///
/// The callback sends the command to the remote host and returns the
/// captured output, which decouples the cycle from the transport (see
/// [`crate::session::capture_exec_factory`]).
///
/// # Errors
///
/// Propagates the callback's error, or [`crate::error::ParseError`] when
/// a record fails to decompose, in which case no snapshot is produced.
pub async fn fetch_snapshot_with<F, Fut>(exec: &F) -> DockwatchResult<TableSnapshot>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = DockwatchResult<String>>,
{
    let output = exec(STATS_COMMAND.to_string()).await?;
    let rows = StatsParser::parse_table(&output)?;
    tracing::debug!(rows = rows.len(), "Refresh parsed");
    Ok(TableSnapshot::new(rows))
}

/// Runs one refresh cycle over a fresh session.
///
/// The session is released on every path.
///
/// # Errors
///
/// Returns [`crate::error::ConnectionError`] /
/// [`crate::error::ExecutionError`] / [`crate::error::StreamError`] from
/// the transport, or [`crate::error::ParseError`] from decoding.
pub async fn fetch_snapshot(config: &HostConfig) -> DockwatchResult<TableSnapshot> {
    let mut session = RemoteSession::open(config).await?;
    let result = match session.execute(STATS_COMMAND) {
        Ok(handle) => handle.capture().await,
        Err(e) => Err(e.into()),
    };
    session.close().await;
    let rows = StatsParser::parse_table(&result?)?;
    Ok(TableSnapshot::new(rows))
}

/// Starts a periodic refresh loop.
///
/// Each tick runs one cycle through `exec` and emits
/// [`MonitorEvent::Snapshot`] on success or
/// [`MonitorEvent::RefreshFailed`] on failure; after
/// `MAX_CONSECUTIVE_ERRORS` consecutive failures the monitor emits
/// [`MonitorEvent::Stopped`] and exits. `interval` must be non-zero.
///
/// Returns a handle to stop the monitor and the event receiver.
pub fn start_monitor<F, Fut>(
    interval: Duration,
    exec: F,
) -> (MonitorHandle, mpsc::Receiver<MonitorEvent>)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = DockwatchResult<String>> + Send,
{
    let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
    let (event_tx, event_rx) = mpsc::channel::<MonitorEvent>(8);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        let mut consecutive_errors: u32 = 0;

        loop {
            tokio::select! {
                _ = stop_rx.recv() => {
                    let _ = event_tx.send(MonitorEvent::Stopped).await;
                    break;
                }
                _ = ticker.tick() => {
                    match fetch_snapshot_with(&exec).await {
                        Ok(snapshot) => {
                            consecutive_errors = 0;
                            if event_tx.send(MonitorEvent::Snapshot(snapshot)).await.is_err() {
                                break; // receiver dropped
                            }
                        }
                        Err(err) => {
                            consecutive_errors += 1;
                            tracing::debug!(
                                error = %err,
                                attempt = consecutive_errors,
                                "Refresh failed"
                            );
                            let _ = event_tx
                                .send(MonitorEvent::RefreshFailed(err.to_string()))
                                .await;
                            if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                                tracing::warn!(
                                    errors = consecutive_errors,
                                    "Monitor stopped after consecutive refresh failures"
                                );
                                let _ = event_tx.send(MonitorEvent::Stopped).await;
                                break;
                            }
                        }
                    }
                }
            }
        }
    });

    (MonitorHandle { stop_tx }, event_rx)
}
