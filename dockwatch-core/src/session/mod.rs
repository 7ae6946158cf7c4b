//! Remote execution sessions over the OpenSSH client
//!
//! A [`RemoteSession`] owns one multiplexed SSH transport (a ControlMaster
//! process and its control socket) and spawns command channels over it.
//! Channels are consumed either in complete-capture mode or as an
//! incremental, cancellable line stream.
//!
//! This module is presentation-free; it handles only transport lifecycle
//! and command I/O. Rendering and user intent live in the CLI crate.

mod command;
mod ssh;

pub use command::{CommandHandle, LineStream};
pub use ssh::{CONNECT_TIMEOUT_SECS, RemoteSession, capture_exec_factory};
