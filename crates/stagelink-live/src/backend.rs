//! Live-session backend capability.
//!
//! The actual network transport lives outside this crate. The controller
//! consumes it through [`LiveBackend`], which reports progress by value so
//! heartbeat ticks never block on I/O.

use crate::LiveSessionInfo;
use crate::error::Result;

/// Progress of a connection attempt, polled once per tick while starting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectProgress {
    /// Still establishing; poll again on the next tick.
    Pending,
    /// Connection is up.
    Connected,
    /// Establishment failed.
    Failed(String),
}

/// Result of one keep-alive round, polled once per tick while active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeepAlive {
    /// Session is healthy.
    Ok,
    /// Session dropped.
    Lost(String),
}

/// Connection to the live-session server, as seen by the controller.
///
/// All methods must return promptly: `begin_connect` only kicks off the
/// attempt, `poll_connect` and `keep_alive` report the latest known state,
/// and `disconnect` requests teardown without waiting for it. Timeout policy
/// for connection establishment belongs to the implementor; the controller
/// only consumes the reported outcome.
pub trait LiveBackend: Send + Sync {
    /// Kick off a connection attempt. An error here means the attempt was
    /// refused outright and no session was started.
    fn begin_connect(&self, info: &LiveSessionInfo) -> Result<()>;

    /// Report progress of the current connection attempt.
    fn poll_connect(&self) -> ConnectProgress;

    /// Perform one keep-alive round and report session health.
    fn keep_alive(&self) -> KeepAlive;

    /// Request teardown of the connection.
    fn disconnect(&self);
}
