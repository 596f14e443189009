//! Wallet adapter abstraction.
//!
//! The adapter owns the real wallet connection; this crate only needs to read
//! its current state and hear about changes.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Connection state reported by a wallet adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub connected: bool,
    pub public_key: Option<String>,
}

impl WalletSnapshot {
    pub fn connected(public_key: impl Into<String>) -> Self {
        Self {
            connected: true,
            public_key: Some(public_key.into()),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }
}

/// Source of wallet connection state.
pub trait WalletAdapter: Send + Sync {
    /// Current connection state.
    fn snapshot(&self) -> WalletSnapshot;

    /// Stream of connection state changes, delivered in order and without loss.
    ///
    /// The stream ends once the adapter is dropped.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<WalletSnapshot>;
}

/// In-process adapter driven by the host application.
///
/// Notifications are only emitted when the snapshot actually changes.
pub struct LocalWalletAdapter {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    state: WalletSnapshot,
    subscribers: Vec<mpsc::UnboundedSender<WalletSnapshot>>,
}

impl LocalWalletAdapter {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn connect(&self, public_key: impl Into<String>) -> bool {
        self.update(WalletSnapshot::connected(public_key))
    }

    pub fn disconnect(&self) -> bool {
        self.update(WalletSnapshot::disconnected())
    }

    /// Replace the current snapshot. Returns `false` if nothing changed.
    pub fn update(&self, next: WalletSnapshot) -> bool {
        // Held across the send so notifications keep the order of updates.
        let mut inner = self.lock();
        if inner.state == next {
            return false;
        }
        inner.state = next.clone();

        // Subscribers whose receiver is gone are dropped.
        inner
            .subscribers
            .retain(|tx| tx.send(next.clone()).is_ok());
        true
    }
}

impl Default for LocalWalletAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletAdapter for LocalWalletAdapter {
    fn snapshot(&self) -> WalletSnapshot {
        self.lock().state.clone()
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<WalletSnapshot> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().subscribers.push(tx);
        rx
    }
}
