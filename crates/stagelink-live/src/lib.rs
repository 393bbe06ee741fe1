//! Live-session lifecycle for the Stagelink bridge.
//!
//! [`LiveSessionController`] owns the session state machine
//! (stopped → starting → active → stopping → stopped). Hosts call
//! `start()`/`stop()`; an external periodic scheduler, consumed through the
//! [`Heartbeat`] capability trait, drives progress by invoking `tick()`. The
//! connection itself is delegated to a [`LiveBackend`] implementation that
//! reports success/failure by value, keeping every tick prompt.
//!
//! # Example
//!
//! ```rust,ignore
//! use stagelink_live::{LiveSessionController, LiveSessionInfo, TokioHeartbeat};
//!
//! let controller = LiveSessionController::new(workspace, scheduler, backend, interval);
//! let mut events = controller.subscribe();
//! controller.start(LiveSessionInfo::from_settings(&settings))?;
//! ```

mod backend;
mod controller;
mod error;
mod event;
mod heartbeat;
mod info;
mod state;

pub use backend::{ConnectProgress, KeepAlive, LiveBackend};
pub use controller::LiveSessionController;
pub use error::{LiveError, Result};
pub use event::SessionEvent;
pub use heartbeat::{Heartbeat, HeartbeatHandle, TickFn, TokioHeartbeat};
pub use info::LiveSessionInfo;
pub use state::SessionState;
