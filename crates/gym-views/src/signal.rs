use tokio::sync::broadcast;

/// Completion signal linking mutation views to the status board
///
/// Registration and assignment fire it after a successful submission;
/// every subscribed board re-fetches the next time it checks.
#[derive(Clone)]
pub struct RefreshSignal {
    refresh_tx: broadcast::Sender<()>,
}

impl RefreshSignal {
    /// Create a new refresh signal
    pub fn new() -> Self {
        let (refresh_tx, _) = broadcast::channel(16);
        Self { refresh_tx }
    }

    /// Get a receiver for refresh notifications
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.refresh_tx.subscribe()
    }

    /// Fire the signal after a successful mutation
    pub fn notify(&self) {
        log::debug!("refresh signal fired");
        let _ = self.refresh_tx.send(());
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}
