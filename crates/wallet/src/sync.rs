//! Wallet sync bridge — mirrors adapter connection state into the [`WalletStore`].
//!
//! The bridge subscribes to the adapter's change notifications and issues one
//! store write per change, in the order the adapter reported them. There is no
//! polling and no transformation of the mirrored values.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::adapter::{WalletAdapter, WalletSnapshot};
use crate::store::WalletStore;

pub struct WalletSync {
    store: WalletStore,
    last: Option<WalletSnapshot>,
}

impl WalletSync {
    pub fn new(store: WalletStore) -> Self {
        Self { store, last: None }
    }

    /// Mirror one snapshot. Repeats of the last mirrored snapshot are ignored.
    ///
    /// Returns `true` if a store write was issued.
    pub fn apply(&mut self, snapshot: WalletSnapshot) -> bool {
        if self.last.as_ref() == Some(&snapshot) {
            return false;
        }

        debug!(
            connected = snapshot.connected,
            public_key = snapshot.public_key.as_deref().unwrap_or("-"),
            "Mirroring wallet state"
        );
        self.store
            .set_wallet(snapshot.connected, snapshot.public_key.clone());
        self.last = Some(snapshot);
        true
    }

    /// Mirror `initial`, then every change from `changes` until the adapter goes away.
    pub async fn run(
        mut self,
        initial: WalletSnapshot,
        mut changes: mpsc::UnboundedReceiver<WalletSnapshot>,
    ) {
        self.apply(initial);

        while let Some(snapshot) = changes.recv().await {
            self.apply(snapshot);
        }
        debug!("Wallet adapter closed; stopping sync");
    }

    /// Subscribe to `adapter` and mirror it into `store` on a background task.
    ///
    /// The task ends once the adapter is dropped.
    pub fn spawn<A>(adapter: &A, store: WalletStore) -> JoinHandle<()>
    where
        A: WalletAdapter + ?Sized,
    {
        // Subscribe before reading the snapshot so no change falls in between.
        let changes = adapter.subscribe();
        let initial = adapter.snapshot();
        tokio::spawn(Self::new(store).run(initial, changes))
    }
}
