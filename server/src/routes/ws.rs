//! WebSocket handler for live collection subscriptions.
//!
//! DESIGN
//! ======
//! On upgrade, the socket gets a subscriber id and one bounded outbound
//! channel, then enters a `select!` loop:
//! - incoming binary frames -> decode -> `handle_request` -> reply
//! - hub pushes (snapshots or error frames) -> forward to the socket
//!
//! `handle_request` is plain request -> reply logic so it can be exercised
//! without a socket.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade -> `session:connected` with `subscriber_id`
//! 2. `collection:subscribe` -> done frame with the full snapshot
//! 3. Store changes -> `collection:snapshot` item frames
//! 4. Close -> every subscription of this socket is released

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use frames::{Frame, Status};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::frame::{ErrorCode, error_reply, next_id};
use crate::services::collection;
use crate::state::AppState;

/// Protocol-level failures that never reach the store.
#[derive(Debug, thiserror::Error)]
pub enum WsError {
    #[error("collection name required")]
    MissingCollection,
    #[error("unknown syscall: {0}")]
    UnknownSyscall(String),
    #[error("malformed frame: {0}")]
    Decode(#[from] frames::CodecError),
}

impl ErrorCode for WsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCollection | Self::Decode(_) => "E_BAD_REQUEST",
            Self::UnknownSyscall(_) => "E_UNKNOWN_SYSCALL",
        }
    }
}

// =============================================================================
// UPGRADE
// =============================================================================

/// `GET /api/ws`: upgrade to a subscription socket.
pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let subscriber_id = Uuid::new_v4();
    let (tx, mut rx) = mpsc::channel::<Frame>(state.config.subscriber_queue_capacity);

    let welcome = Frame::request(next_id(), frames::SYSCALL_CONNECTED).with_data("subscriber_id", subscriber_id.to_string());
    if send_frame(&mut socket, &welcome).await.is_err() {
        return;
    }
    info!(%subscriber_id, "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                let reply = match msg {
                    Message::Binary(bytes) => match frames::decode_frame(&bytes) {
                        Ok(req) => handle_request(&state, subscriber_id, &tx, &req).await,
                        Err(e) => {
                            warn!(%subscriber_id, error = %e, "ws: undecodable frame");
                            gateway_error(&WsError::from(e))
                        }
                    },
                    Message::Close(_) => break,
                    _ => continue,
                };
                if send_frame(&mut socket, &reply).await.is_err() {
                    break;
                }
            }
            Some(frame) = rx.recv() => {
                if send_frame(&mut socket, &frame).await.is_err() {
                    break;
                }
            }
        }
    }

    state.hub.unsubscribe_all(subscriber_id).await;
    info!(%subscriber_id, "ws: client disconnected");
}

async fn send_frame(socket: &mut WebSocket, frame: &Frame) -> Result<(), axum::Error> {
    socket.send(Message::Binary(frames::encode_frame(frame).into())).await
}

fn gateway_error(err: &WsError) -> Frame {
    Frame::request(next_id(), "gateway:error").into_error(err.to_string(), err.error_code())
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Answer one request frame. Subscriptions register `tx` with the hub.
pub(crate) async fn handle_request(state: &AppState, subscriber_id: Uuid, tx: &mpsc::Sender<Frame>, req: &Frame) -> Frame {
    debug!(%subscriber_id, syscall = %req.syscall, "ws: request");
    match req.syscall.as_str() {
        frames::SYSCALL_SUBSCRIBE => subscribe(state, subscriber_id, tx, req).await,
        frames::SYSCALL_UNSUBSCRIBE => unsubscribe(state, subscriber_id, req).await,
        other => error_reply(req, &WsError::UnknownSyscall(other.to_owned())),
    }
}

async fn subscribe(state: &AppState, subscriber_id: Uuid, tx: &mpsc::Sender<Frame>, req: &Frame) -> Frame {
    let Some(name) = req.collection_name().map(str::to_owned) else {
        return error_reply(req, &WsError::MissingCollection);
    };
    if let Err(e) = collection::ensure_readable(&state.config, &name) {
        warn!(%subscriber_id, collection = %name, "ws: subscription denied");
        return error_reply(req, &e);
    }

    // Register before loading so a write racing the initial read still
    // produces a later snapshot push.
    state.hub.subscribe(&name, subscriber_id, tx.clone()).await;

    match collection::snapshot(&state.pool, &name).await {
        Ok(documents) => {
            info!(%subscriber_id, collection = %name, count = documents.len(), "ws: subscribed");
            req.reply(next_id(), Status::Done)
                .with_collection(name)
                .with_data(frames::KEY_DOCUMENTS, documents)
        }
        Err(e) => {
            warn!(%subscriber_id, collection = %name, error = %e, "ws: initial snapshot failed");
            state.hub.unsubscribe(&name, subscriber_id).await;
            error_reply(req, &e)
        }
    }
}

async fn unsubscribe(state: &AppState, subscriber_id: Uuid, req: &Frame) -> Frame {
    let Some(name) = req.collection_name().map(str::to_owned) else {
        return error_reply(req, &WsError::MissingCollection);
    };
    let removed = state.hub.unsubscribe(&name, subscriber_id).await;
    req.reply(next_id(), Status::Done)
        .with_collection(name)
        .with_data("removed", removed)
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
