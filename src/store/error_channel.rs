use std::sync::Arc;
use tokio::sync::watch;

/// Single-slot, last-write-wins error message store.
///
/// Cloning yields another handle to the same slot. The initial value is the
/// empty string, which readers treat as "nothing to show". There is no
/// queueing and no expiry: a write replaces whatever was there.
#[derive(Clone, Debug)]
pub struct ErrorChannel {
    tx: Arc<watch::Sender<String>>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { tx: Arc::new(tx) }
    }

    /// Replace the current message unconditionally
    pub fn set(&self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("Error channel set to '{}'", message);
        self.tx.send_replace(message);
    }

    /// Current message, empty when nothing has been reported
    pub fn get(&self) -> String {
        self.tx.borrow().clone()
    }

    pub fn has_error(&self) -> bool {
        !self.tx.borrow().is_empty()
    }

    /// Receiver notified on every write
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for ErrorChannel {
    fn default() -> Self {
        Self::new()
    }
}
