//! Dockwatch Core Library
//!
//! This crate provides the core functionality for the dockwatch remote
//! container monitor: SSH session management, remote command execution and
//! streaming, the typed stats data model, and the multi-key sort engine.
//!
//! # Crate Structure
//!
//! - [`config`] - Host configuration (host, port, username, identity)
//! - [`session`] - SSH sessions, command channels, capture and streaming
//! - [`stats`] - Stats parsing, typed rows, unit decoding, table snapshots
//! - [`sort`] - Multi-key sort engine with unit-aware comparison
//! - [`monitoring`] - Refresh cycles, control actions, log tailing
//! - [`error`] - Error taxonomy shared by all operations
//!
//! The crate is presentation-free; the `dockwatch-cli` binary consumes
//! snapshots and events and feeds back user intents (selected container,
//! requested action, sort toggles).

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod monitoring;
pub mod session;
pub mod sort;
pub mod stats;

pub use config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USERNAME, HostConfig};
pub use error::{
    ConfigError, ConnectionError, DockwatchError, DockwatchResult, ExecutionError, ParseError,
    StreamError,
};
pub use monitoring::{
    ControlAction, DEFAULT_REFRESH_INTERVAL_SECS, EndReason, LogEvent, LogTailHandle,
    MonitorEvent, MonitorHandle, fetch_snapshot, fetch_snapshot_with, logs_command, run_control,
    start_log_tail, start_monitor, validate_container_id,
};
pub use session::{CONNECT_TIMEOUT_SECS, CommandHandle, LineStream, RemoteSession,
    capture_exec_factory};
pub use sort::{Direction, SortKey, SortSpec};
pub use stats::{
    ByteCell, CellValue, ColumnId, Domain, HEADER_TOKEN, MetricRow, PercentCell, STATS_COMMAND,
    StatsParser, TableSnapshot,
};
