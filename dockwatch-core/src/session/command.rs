//! Command channel consumption: complete capture and line streaming

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout};
use tokio::time::timeout;

use crate::error::{DockwatchResult, ExecutionError, StreamError};

/// Upper bound on each step of stream cancellation
const CANCEL_STEP_TIMEOUT: Duration = Duration::from_secs(2);

/// ETX; a remote pty delivers it to the foreground process group as SIGINT
const INTERRUPT_BYTE: u8 = 0x03;

/// An open remote command: its output stream plus, for TTY channels, an
/// interrupt-capable stdin handle.
///
/// Consume with [`capture`](Self::capture) for one-shot commands or
/// [`lines`](Self::lines) for incremental streaming.
#[derive(Debug)]
pub struct CommandHandle {
    child: Child,
    stdout: Option<ChildStdout>,
    stdin: Option<ChildStdin>,
    interruptible: bool,
}

impl CommandHandle {
    pub(crate) fn new(mut child: Child, interruptible: bool) -> Self {
        let stdout = child.stdout.take();
        let stdin = child.stdin.take();
        Self {
            child,
            stdout,
            stdin,
            interruptible,
        }
    }

    /// Whether this channel can deliver a remote interrupt
    #[must_use]
    pub const fn is_interruptible(&self) -> bool {
        self.interruptible
    }

    /// Blocks until the remote process's output ends and returns the full
    /// captured text.
    ///
    /// Both pipes are drained concurrently so neither can fill and stall
    /// the remote side.
    ///
    /// # Errors
    ///
    /// Read failures surface as [`StreamError`]; a non-success exit status
    /// surfaces as [`ExecutionError::Failed`] with the captured stderr.
    pub async fn capture(mut self) -> DockwatchResult<String> {
        let mut out = String::new();
        let mut err = String::new();
        let stdout = self.stdout.take();
        let stderr = self.child.stderr.take();

        let read_out = async {
            match stdout {
                Some(mut stream) => stream.read_to_string(&mut out).await.map(|_| ()),
                None => Ok(()),
            }
        };
        let read_err = async {
            if let Some(mut stream) = stderr {
                let _ = stream.read_to_string(&mut err).await;
            }
        };
        let (out_result, ()) = tokio::join!(read_out, read_err);
        out_result.map_err(StreamError::Read)?;

        let status = self.child.wait().await.map_err(StreamError::Read)?;
        if status.success() {
            Ok(out)
        } else {
            Err(ExecutionError::Failed {
                code: status.code(),
                stderr: err.trim().to_string(),
            }
            .into())
        }
    }

    /// Converts the handle into an incremental line stream
    #[must_use]
    pub fn lines(mut self) -> LineStream {
        let lines = self.stdout.take().map(|s| BufReader::new(s).lines());
        LineStream {
            lines,
            child: self.child,
            stdin: self.stdin.take(),
            interruptible: self.interruptible,
            cancelled: false,
        }
    }
}

/// A lazy sequence of output lines from a remote command.
///
/// Finite for one-shot commands, unbounded for a following log command.
/// [`cancel`](Self::cancel) returns within a bounded time regardless of
/// remote responsiveness.
#[derive(Debug)]
pub struct LineStream {
    lines: Option<Lines<BufReader<ChildStdout>>>,
    child: Child,
    stdin: Option<ChildStdin>,
    interruptible: bool,
    cancelled: bool,
}

impl LineStream {
    /// Yields the next line, or `None` when the stream has ended
    /// (naturally or after cancellation).
    ///
    /// # Errors
    ///
    /// Returns [`StreamError`] on a mid-read I/O failure.
    pub async fn next_line(&mut self) -> Result<Option<String>, StreamError> {
        if self.cancelled {
            return Ok(None);
        }
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };
        let line = lines.next_line().await.map_err(StreamError::Read)?;
        // TTY channels emit CRLF
        Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
    }

    /// Cancels the stream: sends the remote interrupt (TTY channels),
    /// then kills and reaps the local channel process.
    ///
    /// Idempotent; every step runs under a timeout, so this returns even
    /// if the remote never acknowledges. Cancellation is a requested
    /// transition, not an error, and surfaces no failure.
    pub async fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        if self.interruptible && let Some(mut stdin) = self.stdin.take() {
            let _ = timeout(CANCEL_STEP_TIMEOUT, async {
                let _ = stdin.write_all(&[INTERRUPT_BYTE]).await;
                let _ = stdin.flush().await;
            })
            .await;
        }
        let _ = self.child.start_kill();
        let _ = timeout(CANCEL_STEP_TIMEOUT, self.child.wait()).await;
    }

    /// Whether [`cancel`](Self::cancel) has run
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
