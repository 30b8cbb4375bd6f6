//! Session-change subscriptions.
//!
//! Gateways own a [`SessionListeners`] registry and call
//! [`SessionListeners::notify`] on every session transition. Consumers hold a
//! [`SessionSubscription`]; dropping it (or calling `unsubscribe`) removes the
//! registration.
//!
//! Every notification is numbered when it is published. A
//! [`SessionSequence`] reads the newest number and change straight from the
//! registry, so a consumer can tell whether anything was published since a
//! point in time even while older deliveries are still queued.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tokio::sync::mpsc;

use crate::identity::Identity;

/// Payload of a session notification: the new identity, or `None` after
/// sign-out / invalidation.
pub type SessionChange = Option<Identity>;

/// A notification together with its publication number.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedChange {
    /// Starts at 1 and grows by one per `notify`.
    pub sequence: u64,
    pub change: SessionChange,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    senders: HashMap<u64, mpsc::UnboundedSender<PublishedChange>>,
    latest: Option<PublishedChange>,
}

fn lock(table: &Mutex<ListenerTable>) -> MutexGuard<'_, ListenerTable> {
    table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Registry of live session subscriptions.
#[derive(Clone, Default)]
pub struct SessionListeners {
    table: Arc<Mutex<ListenerTable>>,
}

impl SessionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> SessionSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut table = lock(&self.table);
        let id = table.next_id;
        table.next_id += 1;
        table.senders.insert(id, tx);

        SessionSubscription {
            id,
            receiver: rx,
            table: Arc::downgrade(&self.table),
        }
    }

    /// Deliver `change` to every live subscriber. Returns how many received it.
    pub fn notify(&self, change: SessionChange) -> usize {
        let mut table = lock(&self.table);
        let sequence = table.latest.as_ref().map_or(0, |p| p.sequence) + 1;
        let published = PublishedChange { sequence, change };
        table
            .senders
            .retain(|_, sender| sender.send(published.clone()).is_ok());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sequence,
            delivered = table.senders.len(),
            signed_in = published.change.is_some(),
            "session change published"
        );
        table.latest = Some(published);
        table.senders.len()
    }

    /// Number of the most recent notification, 0 if none was published.
    pub fn sequence(&self) -> u64 {
        lock(&self.table).latest.as_ref().map_or(0, |p| p.sequence)
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.table).senders.len()
    }
}

/// Scoped handle to a session-change stream.
pub struct SessionSubscription {
    id: u64,
    receiver: mpsc::UnboundedReceiver<PublishedChange>,
    table: Weak<Mutex<ListenerTable>>,
}

impl SessionSubscription {
    /// Wait for the next change. `None` once the publishing side is gone.
    pub async fn recv(&mut self) -> Option<SessionChange> {
        self.recv_published().await.map(|published| published.change)
    }

    /// Like [`recv`](Self::recv), keeping the publication number.
    pub async fn recv_published(&mut self) -> Option<PublishedChange> {
        self.receiver.recv().await
    }

    /// Non-blocking poll for a pending change.
    pub fn try_recv(&mut self) -> Option<SessionChange> {
        self.receiver.try_recv().ok().map(|published| published.change)
    }

    /// Read-only view of the registry's publication counter. Holding it
    /// does not keep a registration alive.
    pub fn sequence(&self) -> SessionSequence {
        SessionSequence {
            table: self.table.clone(),
        }
    }

    /// Release the registration. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            lock(&table).senders.remove(&self.id);
        }
    }
}

/// Publication counter of a [`SessionListeners`] registry.
#[derive(Clone)]
pub struct SessionSequence {
    table: Weak<Mutex<ListenerTable>>,
}

impl SessionSequence {
    /// Number of the most recent notification, 0 if none was published or
    /// the registry is gone.
    pub fn current(&self) -> u64 {
        self.latest().map_or(0, |p| p.sequence)
    }

    /// The most recent notification, whether or not it was delivered yet.
    pub fn latest(&self) -> Option<PublishedChange> {
        let table = self.table.upgrade()?;
        let latest = lock(&table).latest.clone();
        latest
    }
}

impl std::fmt::Debug for SessionSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSequence")
            .field("current", &self.current())
            .finish()
    }
}

impl std::fmt::Debug for SessionSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSubscription")
            .field("id", &self.id)
            .finish()
    }
}
