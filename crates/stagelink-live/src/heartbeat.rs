//! Periodic-scheduler capability.
//!
//! The session controller does not own a timer. It registers a tick callback
//! with whatever scheduler the host provides through the [`Heartbeat`] trait
//! and holds the returned [`HeartbeatHandle`] until the session returns to
//! stopped. [`TokioHeartbeat`] is a bundled implementation for hosts without
//! a timer service of their own.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Tick callback invoked by the scheduler on its cadence.
pub type TickFn = Arc<dyn Fn() + Send + Sync>;

/// Opaque registration token returned by [`Heartbeat::register`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct HeartbeatHandle(u64);

impl HeartbeatHandle {
    /// Create a handle from a scheduler-chosen id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The scheduler-chosen id behind this handle.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A periodic scheduler the controller can register tick callbacks with.
///
/// Contract for implementors:
/// - `register` must not invoke `on_tick` synchronously; the first tick
///   arrives on the scheduler's own cadence.
/// - `cancel` must not block waiting for an in-flight tick to finish —
///   `cancel` is called from within tick handling.
/// - After `cancel` returns, late ticks may still be in flight; the
///   controller tolerates them.
pub trait Heartbeat: Send + Sync {
    /// Register a callback to be invoked every `interval`.
    fn register(&self, interval: Duration, on_tick: TickFn) -> HeartbeatHandle;

    /// Cancel a registration. Unknown handles are ignored.
    fn cancel(&self, handle: HeartbeatHandle);
}

/// Heartbeat scheduler backed by a tokio interval task per registration.
pub struct TokioHeartbeat {
    runtime: tokio::runtime::Handle,
    next_id: AtomicU64,
    tasks: Mutex<HashMap<u64, JoinHandle<()>>>,
}

impl TokioHeartbeat {
    /// Create a scheduler on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime; use
    /// [`with_handle`](Self::with_handle) from non-runtime threads.
    pub fn new() -> Self {
        Self::with_handle(tokio::runtime::Handle::current())
    }

    /// Create a scheduler spawning onto an explicit runtime handle.
    pub fn with_handle(runtime: tokio::runtime::Handle) -> Self {
        Self {
            runtime,
            next_id: AtomicU64::new(1),
            tasks: Mutex::new(HashMap::new()),
        }
    }
}

impl Heartbeat for TokioHeartbeat {
    fn register(&self, interval: Duration, on_tick: TickFn) -> HeartbeatHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let task = self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The zeroth interval tick completes immediately; skip it so the
            // first callback lands one full interval after registration.
            ticker.tick().await;
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                on_tick();
            }
        });
        self.tasks.lock().insert(id, task);
        debug!(id, ?interval, "heartbeat registered");
        HeartbeatHandle(id)
    }

    fn cancel(&self, handle: HeartbeatHandle) {
        if let Some(task) = self.tasks.lock().remove(&handle.0) {
            // Abort without joining; the interval task has no cleanup to run
            // and cancel may be called from inside a tick.
            task.abort();
            debug!(id = handle.0, "heartbeat cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_cadence() {
        let scheduler = TokioHeartbeat::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();

        let handle = scheduler.register(
            Duration::from_millis(100),
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        // No synchronous tick at registration time.
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(350)).await;
        tokio::task::yield_now().await;
        assert!(count.load(Ordering::SeqCst) >= 3);

        scheduler.cancel(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let scheduler = TokioHeartbeat::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();

        let handle = scheduler.register(
            Duration::from_millis(100),
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        tokio::time::sleep(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;
        scheduler.cancel(handle);
        let at_cancel = count.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        assert_eq!(count.load(Ordering::SeqCst), at_cancel);
    }

    #[tokio::test]
    async fn test_cancel_unknown_handle_is_ignored() {
        let scheduler = TokioHeartbeat::new();
        scheduler.cancel(HeartbeatHandle::new(999));
    }
}
