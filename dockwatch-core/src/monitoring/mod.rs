//! Remote container monitoring operations
//!
//! One tokio task per outstanding remote operation: refreshes and the
//! periodic monitor loop run over per-operation sessions in complete-
//! capture mode; each log tail holds a dedicated session on its own
//! long-lived task. Background tasks talk to the presentation loop over
//! `mpsc` channels and never mutate view state directly.

pub mod control;
pub mod logs;
pub mod refresh;

pub use control::{ControlAction, run_control, validate_container_id};
pub use logs::{EndReason, LogEvent, LogTailHandle, logs_command, start_log_tail};
pub use refresh::{
    DEFAULT_REFRESH_INTERVAL_SECS, MonitorEvent, MonitorHandle, fetch_snapshot,
    fetch_snapshot_with, start_monitor,
};
