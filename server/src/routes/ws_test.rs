use super::*;
use crate::state::test_helpers;
use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::time::{Duration, timeout};
use tokio_tungstenite::tungstenite::Message as WsMessage;

fn channel() -> (mpsc::Sender<Frame>, mpsc::Receiver<Frame>) {
    mpsc::channel(4)
}

fn error_code(frame: &Frame) -> Option<&str> {
    frame.data.get(frames::KEY_CODE).and_then(serde_json::Value::as_str)
}

// =============================================================================
// DISPATCH
// =============================================================================

#[tokio::test]
async fn subscribe_without_collection_is_bad_request() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = channel();
    let req = Frame::request("r1", frames::SYSCALL_SUBSCRIBE);

    let reply = handle_request(&state, Uuid::new_v4(), &tx, &req).await;
    assert_eq!(reply.status, Status::Error);
    assert_eq!(reply.parent_id.as_deref(), Some("r1"));
    assert_eq!(error_code(&reply), Some("E_BAD_REQUEST"));
}

#[tokio::test]
async fn subscribe_outside_allow_list_is_forbidden_and_not_registered() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = channel();
    let req = Frame::request("r1", frames::SYSCALL_SUBSCRIBE).with_collection("admins");

    let reply = handle_request(&state, Uuid::new_v4(), &tx, &req).await;
    assert_eq!(error_code(&reply), Some("E_FORBIDDEN"));
    assert_eq!(reply.error_message(), Some("Missing or insufficient permissions."));
    assert_eq!(state.hub.subscriber_count("admins").await, 0);
}

#[tokio::test]
async fn unknown_syscall_is_rejected() {
    let state = test_helpers::test_app_state();
    let (tx, _rx) = channel();
    let req = Frame::request("r1", "collection:drop");

    let reply = handle_request(&state, Uuid::new_v4(), &tx, &req).await;
    assert_eq!(error_code(&reply), Some("E_UNKNOWN_SYSCALL"));
    assert_eq!(reply.error_message(), Some("unknown syscall: collection:drop"));
}

#[tokio::test]
async fn unsubscribe_reports_whether_subscription_existed() {
    let state = test_helpers::test_app_state();
    let subscriber = Uuid::new_v4();
    let (tx, _rx) = channel();
    state.hub.subscribe("events", subscriber, tx.clone()).await;

    let req = Frame::request("r1", frames::SYSCALL_UNSUBSCRIBE).with_collection("events");
    let first = handle_request(&state, subscriber, &tx, &req).await;
    assert_eq!(first.status, Status::Done);
    assert_eq!(first.data.get("removed"), Some(&json!(true)));
    assert_eq!(state.hub.subscriber_count("events").await, 0);

    let second = handle_request(&state, subscriber, &tx, &req).await;
    assert_eq!(second.data.get("removed"), Some(&json!(false)));
}

#[test]
fn ws_error_codes() {
    assert_eq!(WsError::MissingCollection.error_code(), "E_BAD_REQUEST");
    assert_eq!(WsError::UnknownSyscall("x".into()).error_code(), "E_UNKNOWN_SYSCALL");
    assert_eq!(WsError::Decode(frames::CodecError::InvalidStatus(9)).error_code(), "E_BAD_REQUEST");
}

// =============================================================================
// SOCKET
// =============================================================================

async fn next_frame<S>(stream: &mut S) -> Frame
where
    S: futures::Stream<Item = Result<WsMessage, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    loop {
        let msg = timeout(Duration::from_secs(2), stream.next())
            .await
            .expect("frame receive timed out")
            .expect("socket should stay open")
            .expect("socket read should succeed");
        if let WsMessage::Binary(bytes) = msg {
            return frames::decode_frame(&bytes).expect("server frames should decode");
        }
    }
}

#[tokio::test]
async fn socket_greets_and_answers_requests() {
    let state = test_helpers::test_app_state();
    let app = crate::routes::api_routes(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let (socket, _) = tokio_tungstenite::connect_async(format!("ws://{addr}/api/ws"))
        .await
        .expect("websocket connect");
    let (mut sink, mut stream) = socket.split();

    let welcome = next_frame(&mut stream).await;
    assert_eq!(welcome.syscall, frames::SYSCALL_CONNECTED);
    assert!(welcome.data.get("subscriber_id").and_then(serde_json::Value::as_str).is_some());

    let req = Frame::request("r1", frames::SYSCALL_SUBSCRIBE).with_collection("admins");
    sink.send(WsMessage::Binary(frames::encode_frame(&req).into()))
        .await
        .expect("send subscribe");
    let reply = next_frame(&mut stream).await;
    assert_eq!(reply.parent_id.as_deref(), Some("r1"));
    assert_eq!(error_code(&reply), Some("E_FORBIDDEN"));

    sink.send(WsMessage::Binary(vec![0xff, 0xff, 0xff].into()))
        .await
        .expect("send garbage");
    let reply = next_frame(&mut stream).await;
    assert_eq!(reply.syscall, "gateway:error");
    assert_eq!(error_code(&reply), Some("E_BAD_REQUEST"));
}
