//! Shutdown coordination for the scanner.

use std::future::pending;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that the scan loop and signal listener share.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
            fired: false,
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Get the number of active subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of [`Shutdown`].
///
/// Once a trigger is observed it stays observed. A dropped coordinator
/// never counts as a trigger.
pub struct ShutdownListener {
    rx: broadcast::Receiver<()>,
    fired: bool,
}

impl ShutdownListener {
    /// Non-blocking check, used at iteration boundaries.
    pub fn is_triggered(&mut self) -> bool {
        if !self.fired {
            self.fired = matches!(
                self.rx.try_recv(),
                Ok(()) | Err(TryRecvError::Lagged(_))
            );
        }
        self.fired
    }

    /// Resolve once shutdown is triggered. Pends forever if the
    /// coordinator is dropped without triggering.
    pub async fn triggered(&mut self) {
        if self.fired {
            return;
        }
        match self.rx.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => self.fired = true,
            Err(RecvError::Closed) => pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_trigger_observed() {
        let shutdown = Shutdown::new();
        let mut listener = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 1);

        assert!(!listener.is_triggered());
        shutdown.trigger();
        assert!(listener.is_triggered());
        // Sticky.
        assert!(listener.is_triggered());
    }

    #[test]
    fn test_dropped_coordinator_is_not_a_trigger() {
        let shutdown = Shutdown::new();
        let mut listener = shutdown.subscribe();
        drop(shutdown);
        assert!(!listener.is_triggered());
    }

    #[tokio::test]
    async fn test_triggered_future() {
        let shutdown = Shutdown::new();
        let mut listener = shutdown.subscribe();
        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), listener.triggered())
            .await
            .expect("trigger should resolve");
    }

    #[tokio::test(start_paused = true)]
    async fn test_triggered_pends_after_drop() {
        let shutdown = Shutdown::new();
        let mut listener = shutdown.subscribe();
        drop(shutdown);
        let waited = tokio::time::timeout(Duration::from_secs(5), listener.triggered()).await;
        assert!(waited.is_err());
    }
}
