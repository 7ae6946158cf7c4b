//! Container control actions (stop / start / restart)

use crate::config::HostConfig;
use crate::error::{DockwatchResult, ExecutionError};
use crate::session::RemoteSession;

/// A lifecycle action on one container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// `docker stop`
    Stop,
    /// `docker start`
    Start,
    /// `docker restart`
    Restart,
}

impl ControlAction {
    /// The docker subcommand verb
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::Start => "start",
            Self::Restart => "restart",
        }
    }

    /// The full remote command with the container id interpolated
    #[must_use]
    pub fn command(self, container_id: &str) -> String {
        format!("docker {} {container_id}", self.verb())
    }
}

/// Checks a container id against the docker name/id character set.
///
/// Ids are interpolated into a remote shell line, so anything outside
/// `[A-Za-z0-9_.-]` is refused.
///
/// # Errors
///
/// Returns [`ExecutionError::InvalidContainerId`] for an empty id or one
/// containing other characters.
pub fn validate_container_id(container_id: &str) -> Result<(), ExecutionError> {
    let valid = !container_id.is_empty()
        && container_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if valid {
        Ok(())
    } else {
        Err(ExecutionError::InvalidContainerId(
            container_id.to_string(),
        ))
    }
}

/// Runs one control action over a fresh session and returns the remote
/// output (normally the echoed container id).
///
/// The session is released on every path.
///
/// # Errors
///
/// Returns [`ExecutionError`] for an invalid id or a failed remote
/// command, [`crate::error::ConnectionError`] /
/// [`crate::error::StreamError`] from the transport.
pub async fn run_control(
    config: &HostConfig,
    action: ControlAction,
    container_id: &str,
) -> DockwatchResult<String> {
    validate_container_id(container_id)?;
    tracing::debug!(action = action.verb(), container_id, "Running control action");

    let mut session = RemoteSession::open(config).await?;
    let result = match session.execute(&action.command(container_id)) {
        Ok(handle) => handle.capture().await,
        Err(e) => Err(e.into()),
    };
    session.close().await;
    result.map(|output| output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_strings() {
        assert_eq!(ControlAction::Stop.command("abc123"), "docker stop abc123");
        assert_eq!(
            ControlAction::Start.command("abc123"),
            "docker start abc123"
        );
        assert_eq!(
            ControlAction::Restart.command("abc123"),
            "docker restart abc123"
        );
    }

    #[test]
    fn test_valid_container_ids() {
        assert!(validate_container_id("abc123").is_ok());
        assert!(validate_container_id("my-app_2.0").is_ok());
    }

    #[test]
    fn test_invalid_container_ids_are_refused() {
        assert!(validate_container_id("").is_err());
        assert!(validate_container_id("abc; rm -rf /").is_err());
        assert!(validate_container_id("a b").is_err());
        assert!(validate_container_id("$(whoami)").is_err());
    }
}
