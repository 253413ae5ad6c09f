//! Subscription hub: fan-out of collection snapshots to live sockets.
//!
//! DESIGN
//! ======
//! Each websocket owns one bounded `mpsc` channel and registers its sender
//! under every collection it subscribes to. A change to a collection turns
//! into one freshly loaded snapshot, delivered to every subscriber of that
//! collection as a replacement (no incremental diff).
//!
//! ERROR HANDLING
//! ==============
//! Delivery uses `try_send`. A closed or full channel drops the subscriber
//! from every hub entry for that collection; a full queue means the socket
//! stopped draining and will not see further snapshots.

use std::collections::HashMap;
use std::sync::Arc;

use frames::Frame;
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::frame::{ErrorCode, push};
use crate::services::collection;
use crate::state::AppState;

type Subscribers = HashMap<Uuid, mpsc::Sender<Frame>>;

#[derive(Clone, Default)]
pub struct SubscriptionHub {
    collections: Arc<RwLock<HashMap<String, Subscribers>>>,
}

impl SubscriptionHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` for `collection`. Re-subscribing replaces the sender.
    pub async fn subscribe(&self, collection: &str, subscriber: Uuid, tx: mpsc::Sender<Frame>) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(subscriber, tx);
    }

    /// Remove one subscription. Returns whether it existed.
    pub async fn unsubscribe(&self, collection: &str, subscriber: Uuid) -> bool {
        let mut collections = self.collections.write().await;
        let Some(subs) = collections.get_mut(collection) else {
            return false;
        };
        let removed = subs.remove(&subscriber).is_some();
        if subs.is_empty() {
            collections.remove(collection);
        }
        removed
    }

    /// Remove `subscriber` from every collection (socket closed).
    pub async fn unsubscribe_all(&self, subscriber: Uuid) {
        let mut collections = self.collections.write().await;
        collections.retain(|_, subs| {
            subs.remove(&subscriber);
            !subs.is_empty()
        });
    }

    pub async fn subscriber_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, HashMap::len)
    }

    /// Collections with at least one live subscriber.
    pub async fn collections(&self) -> Vec<String> {
        self.collections.read().await.keys().cloned().collect()
    }

    /// Deliver `frame` to every subscriber of `collection`, pruning dead
    /// channels. Returns the number of successful deliveries.
    pub async fn broadcast(&self, collection: &str, frame: &Frame) -> usize {
        let targets: Vec<(Uuid, mpsc::Sender<Frame>)> = {
            let collections = self.collections.read().await;
            let Some(subs) = collections.get(collection) else {
                return 0;
            };
            subs.iter().map(|(id, tx)| (*id, tx.clone())).collect()
        };

        let mut delivered = 0;
        let mut dead = Vec::new();
        for (id, tx) in targets {
            match tx.try_send(frame.clone()) {
                Ok(()) => delivered += 1,
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!(subscriber = %id, %collection, "hub: subscriber queue full; dropping subscriber");
                    dead.push(id);
                }
                Err(mpsc::error::TrySendError::Closed(_)) => dead.push(id),
            }
        }

        if !dead.is_empty() {
            let mut collections = self.collections.write().await;
            if let Some(subs) = collections.get_mut(collection) {
                for id in &dead {
                    subs.remove(id);
                }
                if subs.is_empty() {
                    collections.remove(collection);
                }
            }
        }

        delivered
    }
}

/// Reload `collection` and push the snapshot to its subscribers.
///
/// Load failures are pushed as error frames so views can show them inline.
pub async fn publish_snapshot(state: &AppState, collection: &str) -> usize {
    if state.hub.subscriber_count(collection).await == 0 {
        return 0;
    }

    let frame = match collection::snapshot(&state.pool, collection).await {
        Ok(documents) => {
            debug!(%collection, count = documents.len(), "hub: publishing snapshot");
            push(frames::SYSCALL_SNAPSHOT, collection).with_data(frames::KEY_DOCUMENTS, documents)
        }
        Err(e) => {
            warn!(error = %e, %collection, "hub: snapshot reload failed");
            push(frames::SYSCALL_SNAPSHOT, collection).into_error(e.to_string(), e.error_code())
        }
    };

    state.hub.broadcast(collection, &frame).await
}

#[cfg(test)]
#[path = "hub_test.rs"]
mod tests;
