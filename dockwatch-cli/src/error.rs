//! CLI error types and exit codes.

use dockwatch_core::DockwatchError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, parsing, or I/O
    pub const GENERAL_ERROR: i32 = 1;
    /// Connection failure - the remote session could not be established
    pub const CONNECTION_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Remote execution error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Stream error
    #[error("Stream error: {0}")]
    Stream(String),

    /// Stats parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Malformed --sort argument
    #[error("Invalid sort spec: {0}")]
    SortSpec(String),

    /// Async runtime error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DockwatchError> for CliError {
    fn from(err: DockwatchError) -> Self {
        match err {
            DockwatchError::Connection(e) => Self::Connection(e.to_string()),
            DockwatchError::Execution(e) => Self::Execution(e.to_string()),
            DockwatchError::Stream(e) => Self::Stream(e.to_string()),
            DockwatchError::Parse(e) => Self::Parse(e.to_string()),
            DockwatchError::Config(e) => Self::Config(e.to_string()),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, validation, parsing, IO)
    /// - 2: Connection failure
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Connection(_) => exit_codes::CONNECTION_FAILURE,
            Self::Config(_)
            | Self::Execution(_)
            | Self::Stream(_)
            | Self::Parse(_)
            | Self::SortSpec(_)
            | Self::Runtime(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockwatch_core::ConnectionError;

    #[test]
    fn test_connection_errors_use_exit_code_two() {
        let err: CliError = DockwatchError::from(ConnectionError::Timeout {
            destination: "op@host".to_string(),
            seconds: 10,
        })
        .into();
        assert_eq!(err.exit_code(), exit_codes::CONNECTION_FAILURE);
    }

    #[test]
    fn test_general_errors_use_exit_code_one() {
        assert_eq!(
            CliError::SortSpec("bogus".to_string()).exit_code(),
            exit_codes::GENERAL_ERROR
        );
        assert_eq!(
            CliError::Parse("bad line".to_string()).exit_code(),
            exit_codes::GENERAL_ERROR
        );
    }
}
