//! SSH session lifecycle via ControlMaster multiplexing
//!
//! `open` spawns a master `ssh -M -N` process bound to a unique control
//! socket and polls `ssh -O check` until the transport is authenticated
//! and ready. Command channels are separate `ssh -S <socket>` processes
//! that reuse the master's transport without re-authenticating. `close`
//! asks the master to exit and reaps it under a bounded timeout.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::time::{Instant, sleep, timeout};

use crate::config::HostConfig;
use crate::error::{ConnectionError, DockwatchError, ExecutionError};

use super::command::CommandHandle;

/// Deadline for transport establishment and authentication (seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Interval between master readiness probes
const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Upper bound on each step of session teardown
const CLOSE_TIMEOUT: Duration = Duration::from_secs(2);

/// Builds the option flags shared by the master invocation.
///
/// `BatchMode` keeps the client from prompting, so an authentication
/// failure surfaces as a master exit instead of a hang.
fn common_options(port: u16, identity: Option<&Path>) -> Vec<String> {
    let mut args = vec![
        "-o".to_string(),
        "BatchMode=yes".to_string(),
        "-o".to_string(),
        "StrictHostKeyChecking=no".to_string(),
        "-o".to_string(),
        format!("ConnectTimeout={CONNECT_TIMEOUT_SECS}"),
    ];
    if port != 22 {
        args.push("-p".to_string());
        args.push(port.to_string());
    }
    if let Some(key) = identity {
        args.push("-i".to_string());
        args.push(key.display().to_string());
    }
    args
}

/// Builds the argument vector for the ControlMaster process
fn master_args(
    control_path: &Path,
    port: u16,
    identity: Option<&Path>,
    destination: &str,
) -> Vec<String> {
    let mut args = common_options(port, identity);
    args.push("-M".to_string());
    args.push("-N".to_string());
    args.push("-S".to_string());
    args.push(control_path.display().to_string());
    args.push(destination.to_string());
    args
}

/// Builds the argument vector for an `ssh -O <verb>` mux control call
fn mux_args(control_path: &Path, verb: &str, destination: &str) -> Vec<String> {
    vec![
        "-S".to_string(),
        control_path.display().to_string(),
        "-O".to_string(),
        verb.to_string(),
        destination.to_string(),
    ]
}

/// Builds the argument vector for a command channel.
///
/// `-tt` forces a remote pty so the channel's stdin can deliver an
/// interrupt to the remote process.
fn channel_args(control_path: &Path, destination: &str, tty: bool) -> Vec<String> {
    let mut args = vec!["-S".to_string(), control_path.display().to_string()];
    if tty {
        args.push("-tt".to_string());
    }
    args.push(destination.to_string());
    args
}

/// A unique control socket path under the system temp directory
fn fresh_control_path() -> PathBuf {
    std::env::temp_dir().join(format!("dockwatch-{}.sock", uuid::Uuid::new_v4()))
}

/// Probes whether the master behind `control_path` accepts channels
async fn master_is_ready(control_path: &Path, destination: &str) -> bool {
    let mut cmd = Command::new("ssh");
    cmd.args(mux_args(control_path, "check", destination))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd.status().await.map_or(false, |status| status.success())
}

/// An authenticated remote execution context.
///
/// Owns the transport (master process + control socket); spawns command
/// channels via [`execute`](Self::execute) and
/// [`execute_interruptible`](Self::execute_interruptible). Channel
/// processes are spawned with `kill_on_drop`, and the master is too, so
/// dropping a session on an error path cannot leak the transport; callers
/// should still [`close`](Self::close) explicitly for a clean `-O exit`.
#[derive(Debug)]
pub struct RemoteSession {
    destination: String,
    control_path: PathBuf,
    master: Option<Child>,
    closed: bool,
}

impl RemoteSession {
    /// Opens and authenticates a session to the configured host.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] when the `ssh` client cannot be
    /// spawned, the master exits before becoming ready (transport or
    /// authentication failure, with the master's stderr as detail), or
    /// the readiness deadline expires.
    pub async fn open(config: &HostConfig) -> Result<Self, ConnectionError> {
        let destination = config.destination();
        let identity = config.identity_path();
        let control_path = fresh_control_path();

        let mut cmd = Command::new("ssh");
        cmd.args(master_args(
            &control_path,
            config.port,
            identity.as_deref(),
            &destination,
        ))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

        let mut master = cmd.spawn().map_err(ConnectionError::Spawn)?;
        tracing::debug!(destination = %destination, "Opening SSH session");

        let deadline = Instant::now() + Duration::from_secs(CONNECT_TIMEOUT_SECS);
        loop {
            if let Some(status) = master.try_wait().map_err(ConnectionError::Spawn)? {
                let mut detail = String::new();
                if let Some(mut stderr) = master.stderr.take() {
                    let _ = stderr.read_to_string(&mut detail).await;
                }
                let detail = detail.trim();
                let detail = if detail.is_empty() {
                    format!("ssh master exited ({status})")
                } else {
                    detail.to_string()
                };
                let _ = std::fs::remove_file(&control_path);
                return Err(ConnectionError::Failed {
                    destination,
                    detail,
                });
            }
            if master_is_ready(&control_path, &destination).await {
                break;
            }
            if Instant::now() >= deadline {
                let _ = master.start_kill();
                let _ = std::fs::remove_file(&control_path);
                return Err(ConnectionError::Timeout {
                    destination,
                    seconds: CONNECT_TIMEOUT_SECS,
                });
            }
            sleep(READY_POLL_INTERVAL).await;
        }

        tracing::debug!(destination = %destination, "SSH session ready");
        Ok(Self {
            destination,
            control_path,
            master: Some(master),
            closed: false,
        })
    }

    /// The SSH destination in `user@host` form
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Whether [`close`](Self::close) has already run
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Starts a remote command on a pipe-mode channel (complete-capture
    /// or finite line streaming).
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] if the session is closed or the channel
    /// process cannot be spawned. A remote start failure surfaces later,
    /// from the capture or stream consuming the handle.
    pub fn execute(&self, command: &str) -> Result<CommandHandle, ExecutionError> {
        self.spawn_channel(command, false)
    }

    /// Starts a remote command on a forced-TTY channel whose stream can
    /// deliver a remote interrupt on cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] if the session is closed or the channel
    /// process cannot be spawned.
    pub fn execute_interruptible(&self, command: &str) -> Result<CommandHandle, ExecutionError> {
        self.spawn_channel(command, true)
    }

    fn spawn_channel(&self, command: &str, tty: bool) -> Result<CommandHandle, ExecutionError> {
        if self.closed {
            return Err(ExecutionError::SessionClosed);
        }
        let mut cmd = Command::new("ssh");
        cmd.args(channel_args(&self.control_path, &self.destination, tty));
        cmd.arg(command);
        cmd.stdin(if tty { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let child = cmd.spawn().map_err(ExecutionError::Spawn)?;
        tracing::debug!(destination = %self.destination, command, tty, "Spawned command channel");
        Ok(CommandHandle::new(child, tty))
    }

    /// Releases the transport. Idempotent, bounded in time, and safe to
    /// call after a failed `execute`.
    pub async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        tracing::debug!(destination = %self.destination, "Closing SSH session");

        let mut exit = Command::new("ssh");
        exit.args(mux_args(&self.control_path, "exit", &self.destination))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        let _ = timeout(CLOSE_TIMEOUT, exit.status()).await;

        if let Some(mut master) = self.master.take() {
            let _ = master.start_kill();
            let _ = timeout(CLOSE_TIMEOUT, master.wait()).await;
        }
        let _ = std::fs::remove_file(&self.control_path);
    }
}

/// Builds a complete-capture exec callback for the refresh loop.
///
/// Each invocation opens a fresh session, runs one command in
/// complete-capture mode, and closes the session on every path: the
/// per-operation session lifecycle used by refreshes and control actions.
pub fn capture_exec_factory(
    config: HostConfig,
) -> impl Fn(String) -> Pin<Box<dyn Future<Output = Result<String, DockwatchError>> + Send>>
+ Send
+ Sync
+ 'static {
    move |command: String| {
        let config = config.clone();
        Box::pin(async move {
            let mut session = RemoteSession::open(&config).await?;
            let handle = match session.execute(&command) {
                Ok(handle) => handle,
                Err(e) => {
                    // Authentication succeeded but the channel failed;
                    // the transport must still be released.
                    session.close().await;
                    return Err(e.into());
                }
            };
            let result = handle.capture().await;
            session.close().await;
            result
        })
    }
}
