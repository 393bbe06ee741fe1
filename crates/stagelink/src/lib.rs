//! Stagelink - bridge between a local content-creation session and a
//! collaborative live-editing server.
//!
//! [`StudioBridge`] is the surface a host application integrates against:
//! - path resolution: [`is_unresolvable_to_live_path`](StudioBridge::is_unresolvable_to_live_path)
//!   and [`unresolve`](StudioBridge::unresolve), called synchronously on
//!   every path the host resolves
//! - session control: [`start_live_mode`](StudioBridge::start_live_mode) /
//!   [`stop_live_mode`](StudioBridge::stop_live_mode), mapped 1:1 from host
//!   user actions
//! - configuration: [`set_workspace_path`](StudioBridge::set_workspace_path)
//! - the combined [`open_live_stage`](StudioBridge::open_live_stage) flow:
//!   rewrite a live-addressable path and bring the session up in one call
//!
//! The host supplies the two collaborators the bridge consumes: a
//! [`Heartbeat`] scheduler (or the bundled [`TokioHeartbeat`]) and a
//! [`LiveBackend`] connection.

mod error;

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

pub use error::{BridgeError, Result};
pub use stagelink_config::{LiveSettings, StagelinkConfig, WorkspaceConfig, load_config};
pub use stagelink_live::{
    ConnectProgress, Heartbeat, HeartbeatHandle, KeepAlive, LiveBackend, LiveError,
    LiveSessionController, LiveSessionInfo, SessionEvent, SessionState, TickFn, TokioHeartbeat,
};
pub use stagelink_resolver::{ResolveError, is_live_path, normalize_separators, unresolve};

/// The host-facing bridge: workspace configuration, path resolution, and
/// live-session control behind one handle.
pub struct StudioBridge {
    workspace: Arc<WorkspaceConfig>,
    settings: LiveSettings,
    controller: Arc<LiveSessionController>,
    recent: Mutex<Option<String>>,
}

impl StudioBridge {
    /// Create a bridge with no workspace configured.
    pub fn new(
        settings: LiveSettings,
        scheduler: Arc<dyn Heartbeat>,
        backend: Arc<dyn LiveBackend>,
    ) -> Self {
        let workspace = Arc::new(WorkspaceConfig::new());
        let controller = LiveSessionController::new(
            workspace.clone(),
            scheduler,
            backend,
            settings.heartbeat_interval(),
        );
        Self {
            workspace,
            settings,
            controller,
            recent: Mutex::new(None),
        }
    }

    /// Create a bridge from a loaded config file, applying its workspace
    /// path when present.
    pub fn from_config(
        config: StagelinkConfig,
        scheduler: Arc<dyn Heartbeat>,
        backend: Arc<dyn LiveBackend>,
    ) -> Self {
        let bridge = Self::new(config.live, scheduler, backend);
        if let Some(path) = config.workspace_path {
            bridge.set_workspace_path(path);
        }
        bridge
    }

    /// Replace the workspace root. Empty means "unset".
    pub fn set_workspace_path(&self, path: impl Into<String>) {
        self.workspace.set_workspace_path(path);
    }

    /// The current workspace root. Empty when unset.
    pub fn workspace_path(&self) -> String {
        self.workspace.workspace_path()
    }

    /// The live-server settings this bridge was built with.
    pub fn settings(&self) -> &LiveSettings {
        &self.settings
    }

    /// Whether `path` must be redirected into the live workspace rather than
    /// resolved as an ordinary local path.
    pub fn is_unresolvable_to_live_path(&self, path: &str) -> bool {
        is_live_path(path, &self.workspace.workspace_path())
    }

    /// Rewrite a live-addressable path into its canonical session form.
    pub fn unresolve(&self, path: &str) -> std::result::Result<String, ResolveError> {
        unresolve(path, &self.workspace.workspace_path())
    }

    /// Start a live session with explicit connection parameters.
    pub fn start_live_mode(&self, info: LiveSessionInfo) -> stagelink_live::Result<()> {
        self.controller.start(info)
    }

    /// Request live-session teardown. Idempotent.
    pub fn stop_live_mode(&self) {
        self.controller.stop();
    }

    /// Current session state.
    pub fn session_state(&self) -> SessionState {
        self.controller.state()
    }

    /// Subscribe to session lifecycle events.
    pub fn subscribe(&self) -> tokio::sync::mpsc::UnboundedReceiver<SessionEvent> {
        self.controller.subscribe()
    }

    /// The session controller, for hosts wiring the tick entry point to
    /// their own scheduler.
    pub fn controller(&self) -> &Arc<LiveSessionController> {
        &self.controller
    }

    /// Open a live-addressable path: rewrite it to canonical form, start the
    /// live session with parameters built from the settings, and remember
    /// the path. Returns the canonical live path for the host to open.
    ///
    /// A path outside the workspace is a caller error and leaves the session
    /// untouched.
    pub fn open_live_stage(&self, path: &str) -> Result<String> {
        let canonical = self.unresolve(path)?;
        let info = LiveSessionInfo::from_settings(&self.settings);
        info!(url = %info.live_url, path = %canonical, "opening live stage");
        self.controller.start(info)?;
        *self.recent.lock() = Some(path.to_string());
        Ok(canonical)
    }

    /// The most recent path successfully opened via
    /// [`open_live_stage`](Self::open_live_stage).
    pub fn recent_live_path(&self) -> Option<String> {
        self.recent.lock().clone()
    }
}
