//! The live-session state machine.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use stagelink_config::WorkspaceConfig;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::backend::{ConnectProgress, KeepAlive, LiveBackend};
use crate::error::{LiveError, Result};
use crate::event::SessionEvent;
use crate::heartbeat::{Heartbeat, HeartbeatHandle};
use crate::info::LiveSessionInfo;
use crate::state::SessionState;

/// State guarded by the controller lock. Kept together so no caller ever
/// observes the state without its matching heartbeat registration.
struct ControllerInner {
    state: SessionState,
    heartbeat: Option<HeartbeatHandle>,
    info: Option<LiveSessionInfo>,
}

/// Owns the live-session lifecycle.
///
/// Driven from two sides: `start()`/`stop()` from host actions, and `tick()`
/// from the scheduler the controller registered with. All three serialize on
/// one lock, so a stop racing a pending tick is safe. Each tick performs at
/// most one state transition.
///
/// The heartbeat is registered exactly once per excursion out of
/// [`SessionState::Stopped`] and released exactly once on the way back.
/// Dropping a running controller cancels the heartbeat and disconnects the
/// backend.
pub struct LiveSessionController {
    inner: Mutex<ControllerInner>,
    workspace: Arc<WorkspaceConfig>,
    scheduler: Arc<dyn Heartbeat>,
    backend: Arc<dyn LiveBackend>,
    interval: Duration,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<SessionEvent>>>,
}

impl LiveSessionController {
    /// Create a controller in the stopped state.
    ///
    /// Returned in an [`Arc`] because the scheduler callback holds a weak
    /// reference back to the controller.
    pub fn new(
        workspace: Arc<WorkspaceConfig>,
        scheduler: Arc<dyn Heartbeat>,
        backend: Arc<dyn LiveBackend>,
        interval: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(ControllerInner {
                state: SessionState::Stopped,
                heartbeat: None,
                info: None,
            }),
            workspace,
            scheduler,
            backend,
            interval,
            subscribers: Mutex::new(Vec::new()),
        })
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.inner.lock().state
    }

    /// Connection parameters of the session underway, if any.
    pub fn session_info(&self) -> Option<LiveSessionInfo> {
        self.inner.lock().info.clone()
    }

    /// Subscribe to session lifecycle events.
    ///
    /// Receivers that are dropped get pruned on the next emit.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Start a live session.
    ///
    /// Fails with [`LiveError::NoWorkspaceConfigured`] when no workspace
    /// root is set. A no-op unless the session is stopped. On success the
    /// session moves to starting, the backend connection attempt is kicked
    /// off, and the heartbeat is registered; the connection comes up (or
    /// fails) on a later tick.
    pub fn start(self: &Arc<Self>, info: LiveSessionInfo) -> Result<()> {
        if !self.workspace.is_configured() {
            return Err(LiveError::NoWorkspaceConfigured);
        }

        let mut inner = self.inner.lock();
        if inner.state != SessionState::Stopped {
            debug!(state = %inner.state, "start ignored, session already underway");
            return Ok(());
        }

        self.backend.begin_connect(&info)?;

        let weak = Arc::downgrade(self);
        let handle = self.scheduler.register(
            self.interval,
            Arc::new(move || {
                if let Some(controller) = weak.upgrade() {
                    controller.tick();
                }
            }),
        );

        info!(url = %info.live_url, channel = %info.channel_id, "live session starting");
        inner.heartbeat = Some(handle);
        inner.info = Some(info);
        inner.state = SessionState::Starting;
        Ok(())
    }

    /// Request teardown of the session.
    ///
    /// Idempotent. Teardown completes on the next tick; a stop issued while
    /// starting supersedes the pending activation.
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        match inner.state {
            SessionState::Stopped | SessionState::Stopping => {}
            SessionState::Starting | SessionState::Active => {
                info!(state = %inner.state, "live session stop requested");
                inner.state = SessionState::Stopping;
            }
        }
    }

    /// Advance the session by one heartbeat.
    ///
    /// Invoked by the scheduler while a heartbeat is registered. Safe to
    /// call after the registration was cancelled (a late tick finds the
    /// session stopped and does nothing).
    pub fn tick(&self) {
        let mut inner = self.inner.lock();
        match inner.state {
            SessionState::Stopped => {}
            SessionState::Starting => match self.backend.poll_connect() {
                ConnectProgress::Pending => {}
                ConnectProgress::Connected => {
                    inner.state = SessionState::Active;
                    info!("live session active");
                    self.emit(SessionEvent::Activated);
                }
                ConnectProgress::Failed(reason) => {
                    self.release(&mut inner);
                    warn!(%reason, "live session connection failed");
                    self.emit(SessionEvent::ConnectionFailed { reason });
                }
            },
            SessionState::Active => match self.backend.keep_alive() {
                KeepAlive::Ok => {}
                KeepAlive::Lost(reason) => {
                    self.backend.disconnect();
                    self.release(&mut inner);
                    warn!(%reason, "live session lost");
                    self.emit(SessionEvent::SessionLost { reason });
                }
            },
            SessionState::Stopping => {
                self.backend.disconnect();
                self.release(&mut inner);
                info!("live session stopped");
                self.emit(SessionEvent::Stopped);
            }
        }
    }

    /// Return to stopped: cancel the heartbeat and clear session data.
    fn release(&self, inner: &mut ControllerInner) {
        if let Some(handle) = inner.heartbeat.take() {
            self.scheduler.cancel(handle);
        }
        inner.info = None;
        inner.state = SessionState::Stopped;
    }

    fn emit(&self, event: SessionEvent) {
        self.subscribers
            .lock()
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl Drop for LiveSessionController {
    fn drop(&mut self) {
        let inner = self.inner.get_mut();
        if inner.state != SessionState::Stopped {
            debug!(state = %inner.state, "controller dropped mid-session, forcing stop");
            if let Some(handle) = inner.heartbeat.take() {
                self.scheduler.cancel(handle);
            }
            self.backend.disconnect();
            inner.state = SessionState::Stopped;
        }
    }
}
