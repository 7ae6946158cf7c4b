//! Log tail controller
//!
//! A log tail holds a dedicated session for the lifetime of one log
//! view and streams `docker logs -tf` on its own task. The view closes
//! the tail with [`LogTailHandle::cancel`], which interrupts the remote
//! stream before the session is released.

use tokio::sync::mpsc;

use crate::config::HostConfig;
use crate::session::RemoteSession;

use super::control::validate_container_id;

/// Events emitted by a log tail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    /// One log line arrived
    Line(String),
    /// The tail failed; reported once, then the stream simply stops
    Failed(String),
    /// The stream ended
    Ended {
        /// How the stream ended
        reason: EndReason,
        /// Whether the view should close itself: only when the stream
        /// ended naturally and the container was observed running when
        /// the view was opened. Tailing an already-stopped container
        /// never force-closes the view the operator opened deliberately.
        auto_close: bool,
    },
}

/// How a log stream ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The remote process exited on its own
    Natural,
    /// The operator cancelled the tail
    Cancelled,
}

/// Handle to cancel a running log tail
#[derive(Debug)]
pub struct LogTailHandle {
    cancel_tx: mpsc::Sender<()>,
}

impl LogTailHandle {
    /// Signals the tail to interrupt the remote stream and stop.
    ///
    /// Cancellation is a requested transition; no error is surfaced.
    pub async fn cancel(&self) {
        let _ = self.cancel_tx.send(()).await;
    }
}

/// The remote log command scoped to one container
#[must_use]
pub fn logs_command(container_id: &str) -> String {
    format!("docker logs -tf --tail 1000 {container_id}")
}

/// The terminal event for a stream end
const fn end_event(was_running: bool, reason: EndReason) -> LogEvent {
    let auto_close = was_running && matches!(reason, EndReason::Natural);
    LogEvent::Ended { reason, auto_close }
}

/// Starts tailing one container's logs on a dedicated session and task.
///
/// `was_running` is the running state observed at the moment the view
/// was opened; it decides whether a natural stream end auto-closes the
/// view (see [`LogEvent::Ended`]). Errors are reported once as
/// [`LogEvent::Failed`] at the stream's operation boundary.
///
/// Returns a cancel handle and the event receiver.
pub fn start_log_tail(
    config: HostConfig,
    container_id: String,
    was_running: bool,
) -> (LogTailHandle, mpsc::Receiver<LogEvent>) {
    let (cancel_tx, mut cancel_rx) = mpsc::channel::<()>(1);
    let (event_tx, event_rx) = mpsc::channel::<LogEvent>(64);

    tokio::spawn(async move {
        if let Err(e) = validate_container_id(&container_id) {
            let _ = event_tx.send(LogEvent::Failed(e.to_string())).await;
            return;
        }

        let mut session = match RemoteSession::open(&config).await {
            Ok(session) => session,
            Err(e) => {
                let _ = event_tx.send(LogEvent::Failed(e.to_string())).await;
                return;
            }
        };

        let handle = match session.execute_interruptible(&logs_command(&container_id)) {
            Ok(handle) => handle,
            Err(e) => {
                session.close().await;
                let _ = event_tx.send(LogEvent::Failed(e.to_string())).await;
                return;
            }
        };

        tracing::debug!(container_id = %container_id, was_running, "Log tail started");
        let mut stream = handle.lines();

        loop {
            tokio::select! {
                _ = cancel_rx.recv() => {
                    stream.cancel().await;
                    let _ = event_tx.send(end_event(was_running, EndReason::Cancelled)).await;
                    break;
                }
                line = stream.next_line() => match line {
                    Ok(Some(line)) => {
                        if event_tx.send(LogEvent::Line(line)).await.is_err() {
                            // View gone without cancelling; stop the stream anyway
                            stream.cancel().await;
                            break;
                        }
                    }
                    Ok(None) => {
                        let _ = event_tx.send(end_event(was_running, EndReason::Natural)).await;
                        break;
                    }
                    Err(e) => {
                        let _ = event_tx.send(LogEvent::Failed(e.to_string())).await;
                        break;
                    }
                }
            }
        }

        session.close().await;
        tracing::debug!(container_id = %container_id, "Log tail finished");
    });

    (LogTailHandle { cancel_tx }, event_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_command() {
        assert_eq!(
            logs_command("abc123"),
            "docker logs -tf --tail 1000 abc123"
        );
    }

    #[test]
    fn test_natural_end_of_running_container_auto_closes() {
        assert_eq!(
            end_event(true, EndReason::Natural),
            LogEvent::Ended {
                reason: EndReason::Natural,
                auto_close: true
            }
        );
    }

    #[test]
    fn test_natural_end_of_stopped_container_leaves_view_open() {
        assert_eq!(
            end_event(false, EndReason::Natural),
            LogEvent::Ended {
                reason: EndReason::Natural,
                auto_close: false
            }
        );
    }

    #[test]
    fn test_cancellation_never_auto_closes() {
        for was_running in [true, false] {
            assert_eq!(
                end_event(was_running, EndReason::Cancelled),
                LogEvent::Ended {
                    reason: EndReason::Cancelled,
                    auto_close: false
                }
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_container_id_fails_at_the_boundary() {
        let (_handle, mut rx) =
            start_log_tail(HostConfig::default(), "bad id; ls".to_string(), true);
        match rx.recv().await.unwrap() {
            LogEvent::Failed(msg) => assert!(msg.contains("invalid container id")),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(rx.recv().await.is_none());
    }
}
