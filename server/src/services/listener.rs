//! Change listener: turns store notifications into live snapshots.
//!
//! DESIGN
//! ======
//! The `documents` trigger raises `NOTIFY collection_changed, <collection>`
//! on every write, including writes made outside this process. One
//! background task holds a `PgListener` on that channel and republishes the
//! named collection to its subscribers.
//!
//! ERROR HANDLING
//! ==============
//! Notifications sent while the listener connection is down are lost, so a
//! detected reconnect republishes every subscribed collection. Connection
//! setup failures are retried after a fixed delay.

use std::convert::Infallible;
use std::time::Duration;

use sqlx::postgres::PgListener;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::db::CHANGE_CHANNEL;
use crate::services::hub::publish_snapshot;
use crate::state::AppState;

const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Spawn the background change listener. Returns a handle for shutdown.
pub fn spawn_change_listener(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let Err(e) = listen(&state).await;
            warn!(error = %e, retry = ?RETRY_DELAY, "change listener failed");
            tokio::time::sleep(RETRY_DELAY).await;
        }
    })
}

async fn listen(state: &AppState) -> Result<Infallible, sqlx::Error> {
    let mut listener = PgListener::connect_with(&state.pool).await?;
    listener.listen(CHANGE_CHANNEL).await?;
    info!(channel = CHANGE_CHANNEL, "change listener ready");

    loop {
        if let Some(notification) = listener.try_recv().await? {
            let collection = notification.payload();
            let delivered = publish_snapshot(state, collection).await;
            info!(%collection, delivered, "collection changed");
        } else {
            warn!("change listener connection lost; refreshing all subscriptions");
            refresh_all(state).await;
        }
    }
}

/// Republish every collection that currently has subscribers.
pub async fn refresh_all(state: &AppState) -> usize {
    let mut delivered = 0;
    for collection in state.hub.collections().await {
        delivered += publish_snapshot(state, &collection).await;
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_helpers;

    #[tokio::test]
    async fn refresh_all_without_subscribers_is_a_noop() {
        let state = test_helpers::test_app_state();
        assert_eq!(refresh_all(&state).await, 0);
    }
}
