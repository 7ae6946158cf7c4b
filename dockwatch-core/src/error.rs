//! Error types for the dockwatch core library
//!
//! One enum per failure taxon, caught once at the operation boundary
//! (a CLI command handler, or once per log-stream lifetime). Cancellation
//! is a requested transition and is never represented here.

use thiserror::Error;

/// Transport or authentication failure while opening a session
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The local `ssh` client could not be spawned
    #[error("failed to spawn ssh: {0}")]
    Spawn(#[source] std::io::Error),

    /// The master process exited before the session became ready
    #[error("connection to {destination} failed: {detail}")]
    Failed {
        /// Destination in `user@host` form
        destination: String,
        /// Exit detail, including captured stderr
        detail: String,
    },

    /// The session did not become ready within the deadline
    #[error("connection to {destination} timed out after {seconds}s")]
    Timeout {
        /// Destination in `user@host` form
        destination: String,
        /// Deadline in seconds
        seconds: u64,
    },
}

/// A remote command failed to start or reported failure
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The local channel process could not be spawned
    #[error("failed to start remote command: {0}")]
    Spawn(#[source] std::io::Error),

    /// The session was already closed when execution was requested
    #[error("session is closed")]
    SessionClosed,

    /// The container id contains characters outside the docker name set
    #[error("invalid container id: {0:?}")]
    InvalidContainerId(String),

    /// The remote command exited with a non-success status
    #[error("remote command exited with status {code:?}: {stderr}")]
    Failed {
        /// Remote exit code, if the process exited normally
        code: Option<i32>,
        /// Captured stderr, trimmed
        stderr: String,
    },
}

/// Mid-read I/O failure on a command's output stream
#[derive(Debug, Error)]
pub enum StreamError {
    /// Reading from the channel's output failed
    #[error("failed to read remote output: {0}")]
    Read(#[from] std::io::Error),
}

/// A stats record that could not be decomposed into a row
///
/// Every variant carries the offending raw line; a failed record aborts
/// the whole refresh and no partially-populated row is ever produced.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The record did not split into the expected number of fields
    #[error("expected {expected} fields, found {found} in stats record: {line:?}")]
    FieldCount {
        /// Expected field count
        expected: usize,
        /// Fields actually found
        found: usize,
        /// Offending raw line
        line: String,
    },

    /// A compound `"A / B"` field was missing its separator
    #[error("malformed compound field {field:?} in stats record: {line:?}")]
    Compound {
        /// The compound field as received
        field: String,
        /// Offending raw line
        line: String,
    },

    /// A token failed numeric decoding
    #[error("invalid numeric token {token:?} in stats record: {line:?}")]
    InvalidNumber {
        /// The token that failed to decode
        token: String,
        /// Offending raw line
        line: String,
    },
}

/// Host configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for a [`crate::config::HostConfig`]
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Umbrella error for all dockwatch operations
#[derive(Debug, Error)]
pub enum DockwatchError {
    /// Transport or authentication failure
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Remote command failed to start or reported failure
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Mid-read I/O failure
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// Malformed stats record
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Host configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DockwatchError {
    /// Returns true when the failure happened before any remote command ran
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for dockwatch operations
pub type DockwatchResult<T> = Result<T, DockwatchError>;
