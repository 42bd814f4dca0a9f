//! Outstanding-work tracking for graceful drain.
//!
//! Every handler launch is counted before its task starts and released
//! when the task finishes, whatever the outcome. A shutdown sequence
//! stops feeding events to the server and waits for the count to reach
//! zero; no cancellation signal is ever propagated into running handlers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Notify;

/// Count of handler invocations launched but not yet completed.
///
/// A cheap-clone handle over shared state: the dispatch server owns one,
/// shutdown sequences clone it. Never ambient process state.
#[derive(Debug, Clone, Default)]
pub struct DispatchTracker {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    outstanding: AtomicUsize,
    drained: Notify,
}

impl DispatchTracker {
    /// Create a tracker with no outstanding work.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one handler launch.
    ///
    /// Called before the handler's task is spawned so the count reflects
    /// truth even if the task starts running immediately. The returned
    /// guard releases the count when dropped; holding it for the task's
    /// whole lifetime makes the release unconditional, panics included.
    pub fn begin(&self) -> WorkGuard {
        self.inner.outstanding.fetch_add(1, Ordering::AcqRel);
        WorkGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Number of handler invocations currently in flight.
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::Acquire)
    }

    /// Wait until no handler invocations are in flight.
    ///
    /// Resolves immediately when the count is already zero. Any number of
    /// waiters may wait concurrently.
    pub async fn wait_for_drain(&self) {
        loop {
            let notified = self.inner.drained.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }

            notified.await;
        }
    }

    /// Wait for drain, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`DrainTimeout`] carrying the number of handlers still in
    /// flight when the budget expired.
    pub async fn wait_for_drain_timeout(&self, timeout: Duration) -> Result<(), DrainTimeout> {
        tokio::time::timeout(timeout, self.wait_for_drain())
            .await
            .map_err(|_| DrainTimeout {
                outstanding: self.outstanding(),
            })
    }
}

/// Releases one unit of outstanding work on drop.
#[derive(Debug)]
pub struct WorkGuard {
    inner: Arc<Inner>,
}

impl Drop for WorkGuard {
    fn drop(&mut self) {
        if self.inner.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.inner.drained.notify_waiters();
        }
    }
}

/// The drain budget expired with work still in flight.
#[derive(Debug, Error)]
#[error("Drain timed out with {outstanding} handler(s) still in flight")]
pub struct DrainTimeout {
    /// Handlers still running when the budget expired
    pub outstanding: usize,
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
