use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::Duration;

use crate::telemetry::Metrics;

use super::guards::ConnectionGuard;

/// Counts live connections so shutdown can wait for them
pub struct ConnectionTracker {
    active_connections: Arc<AtomicUsize>,
    connections_closed_tx: watch::Sender<()>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        let (connections_closed_tx, _) = watch::channel(());
        Self { active_connections: Arc::new(AtomicUsize::new(0)), connections_closed_tx }
    }

    /// Number of connections currently being served
    pub fn active(&self) -> usize {
        self.active_connections.load(Ordering::Acquire)
    }

    /// Register a new connection; it stays counted until the guard is dropped
    pub fn track(&self, metrics: Option<&Arc<Metrics>>) -> ConnectionGuard {
        self.active_connections.fetch_add(1, Ordering::AcqRel);
        if let Some(m) = metrics {
            m.record_connection_opened();
        }
        ConnectionGuard::new(
            self.active_connections.clone(),
            self.connections_closed_tx.clone(),
            metrics.cloned(),
        )
    }

    /// Wait until no connection is left or `timeout` elapses
    ///
    /// Returns true if every connection closed in time.
    pub async fn wait_for_drain(&self, timeout: Duration) -> bool {
        let mut closed_rx = self.connections_closed_tx.subscribe();
        let drained = async {
            while self.active() > 0 {
                if closed_rx.changed().await.is_err() {
                    break;
                }
            }
        };
        tokio::time::timeout(timeout, drained).await.is_ok()
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drains_immediately_without_connections() {
        let tracker = ConnectionTracker::new();
        assert!(tracker.wait_for_drain(Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn counts_guards() {
        let tracker = ConnectionTracker::new();
        let first = tracker.track(None);
        let second = tracker.track(None);
        assert_eq!(tracker.active(), 2);
        drop(first);
        assert_eq!(tracker.active(), 1);
        drop(second);
        assert_eq!(tracker.active(), 0);
    }

    #[tokio::test]
    async fn drain_waits_for_last_guard() {
        let tracker = ConnectionTracker::new();
        let guard = tracker.track(None);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            drop(guard);
        });
        assert!(tracker.wait_for_drain(Duration::from_secs(5)).await);
        assert_eq!(tracker.active(), 0);
    }

    #[tokio::test]
    async fn drain_times_out_while_connections_remain() {
        let tracker = ConnectionTracker::new();
        let _guard = tracker.track(None);
        assert!(!tracker.wait_for_drain(Duration::from_millis(20)).await);
    }
}
