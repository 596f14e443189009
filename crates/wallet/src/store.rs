//! Application-level observable wallet store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::adapter::WalletSnapshot;

/// Observable wallet state read by the rest of the application.
///
/// Cloning is cheap; all clones share the same state.
#[derive(Clone)]
pub struct WalletStore {
    state: Arc<watch::Sender<WalletSnapshot>>,
    updates: Arc<AtomicU64>,
}

impl WalletStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(WalletSnapshot::disconnected());
        Self {
            state: Arc::new(state),
            updates: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Write the wallet state. Subscribers are only notified when a value changes.
    ///
    /// Returns `true` if the stored state was modified.
    pub fn set_wallet(&self, connected: bool, public_key: Option<String>) -> bool {
        let modified = self.state.send_if_modified(|current| {
            if current.connected == connected && current.public_key == public_key {
                return false;
            }
            current.connected = connected;
            current.public_key = public_key;
            true
        });

        if modified {
            self.updates.fetch_add(1, Ordering::SeqCst);
        }
        modified
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    pub fn public_key(&self) -> Option<String> {
        self.state.borrow().public_key.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WalletSnapshot> {
        self.state.subscribe()
    }

    /// Number of writes that modified the state.
    pub fn update_count(&self) -> u64 {
        self.updates.load(Ordering::SeqCst)
    }
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new()
    }
}
