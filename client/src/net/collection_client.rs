//! Live collection subscription over the frame websocket.
//!
//! A subscription opens its own socket to `/api/ws`, sends
//! `collection:subscribe`, and hands every snapshot (the subscribe reply and
//! each later `collection:snapshot` push) to the caller as a full replacement.
//! Closing the handle sends `collection:unsubscribe` and closes the socket.
//!
//! ERROR HANDLING
//! ==============
//! Error frames and transport failures surface once as
//! [`SubscriptionEvent::Failed`]. There is no reconnect loop.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "collection_client_test.rs"]
mod collection_client_test;

use frames::{Frame, Status};
use serde_json::Value;

const DEFAULT_FAILURE: &str = "Subscription failed.";

#[derive(Clone, Debug, PartialEq)]
pub enum SubscriptionEvent {
    /// Complete document list, unsorted, as sent by the server.
    Snapshot(Vec<Value>),
    Failed(String),
}

fn next_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn subscribe_request(collection: &str) -> Frame {
    Frame::request(next_id(), frames::SYSCALL_SUBSCRIBE).with_collection(collection)
}

pub fn unsubscribe_request(collection: &str) -> Frame {
    Frame::request(next_id(), frames::SYSCALL_UNSUBSCRIBE).with_collection(collection)
}

/// Interpret an incoming frame for a subscription to `collection`.
///
/// Frames for other collections, greetings, and unsubscribe acks yield `None`.
pub fn classify_frame(frame: &Frame, collection: &str) -> Option<SubscriptionEvent> {
    if frame.collection_name() != Some(collection) {
        return None;
    }
    let is_subscription =
        frame.syscall == frames::SYSCALL_SUBSCRIBE || frame.syscall == frames::SYSCALL_SNAPSHOT;
    if !is_subscription {
        return None;
    }
    match frame.status {
        Status::Error => Some(SubscriptionEvent::Failed(
            frame.error_message().unwrap_or(DEFAULT_FAILURE).to_owned(),
        )),
        Status::Done | Status::Item => Some(SubscriptionEvent::Snapshot(frame.documents().to_vec())),
        Status::Request | Status::Cancel => None,
    }
}

/// Handle for a running subscription. Closing or dropping it ends the socket.
#[cfg(feature = "hydrate")]
pub struct CollectionSubscription {
    stop: Option<futures::channel::oneshot::Sender<()>>,
}

#[cfg(feature = "hydrate")]
impl CollectionSubscription {
    pub fn close(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

/// Subscribe to `collection`, calling `on_event` for every snapshot or failure.
#[cfg(feature = "hydrate")]
pub fn subscribe_collection<F>(collection: &str, on_event: F) -> CollectionSubscription
where
    F: Fn(SubscriptionEvent) + 'static,
{
    let (stop_tx, stop_rx) = futures::channel::oneshot::channel();
    let collection = collection.to_owned();

    leptos::task::spawn_local(async move {
        if let Err(e) = run_subscription(&collection, &on_event, stop_rx).await {
            leptos::logging::warn!("subscription to {collection} ended: {e}");
            on_event(SubscriptionEvent::Failed(e));
        }
    });

    CollectionSubscription { stop: Some(stop_tx) }
}

#[cfg(feature = "hydrate")]
fn ws_url() -> String {
    let location = web_sys::window().map(|w| w.location());
    let href = location
        .as_ref()
        .and_then(|l| l.href().ok())
        .unwrap_or_default();
    let ws_proto = if href.starts_with("https") { "wss" } else { "ws" };
    let host = location
        .and_then(|l| l.host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    format!("{ws_proto}://{host}/api/ws")
}

#[cfg(feature = "hydrate")]
async fn run_subscription<F>(
    collection: &str,
    on_event: &F,
    stop: futures::channel::oneshot::Receiver<()>,
) -> Result<(), String>
where
    F: Fn(SubscriptionEvent),
{
    use futures::future::Either;
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(&ws_url()).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    ws_write
        .send(Message::Bytes(frames::encode_frame(&subscribe_request(collection))))
        .await
        .map_err(|e| e.to_string())?;

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Bytes(bytes)) => match frames::decode_frame(&bytes) {
                    Ok(frame) => {
                        if let Some(event) = classify_frame(&frame, collection) {
                            on_event(event);
                        } else if frame.status == Status::Error {
                            leptos::logging::warn!("{} frame: {}", frame.syscall, frame.data);
                        }
                    }
                    Err(e) => leptos::logging::warn!("undecodable frame: {e}"),
                },
                Ok(Message::Text(_)) => {}
                Err(e) => return Err(e.to_string()),
            }
        }
        Err("connection closed".to_owned())
    };

    // A dropped handle cancels the oneshot, which also counts as a stop.
    match futures::future::select(stop, Box::pin(recv_task)).await {
        Either::Left(_) => {
            let _ = ws_write
                .send(Message::Bytes(frames::encode_frame(&unsubscribe_request(collection))))
                .await;
            let _ = ws_write.close().await;
            Ok(())
        }
        Either::Right((result, _)) => result,
    }
}
