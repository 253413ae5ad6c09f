use super::*;
use serde_json::json;

fn snapshot_push(collection: &str, docs: Value) -> Frame {
    let mut frame = Frame::request("push-1", frames::SYSCALL_SNAPSHOT)
        .with_collection(collection)
        .with_data(frames::KEY_DOCUMENTS, docs);
    frame.status = Status::Item;
    frame
}

#[test]
fn subscribe_request_targets_collection() {
    let req = subscribe_request("resources");
    assert_eq!(req.syscall, frames::SYSCALL_SUBSCRIBE);
    assert_eq!(req.status, Status::Request);
    assert_eq!(req.collection_name(), Some("resources"));
    assert_ne!(req.id, subscribe_request("resources").id);
}

#[test]
fn unsubscribe_request_targets_collection() {
    let req = unsubscribe_request("resources");
    assert_eq!(req.syscall, frames::SYSCALL_UNSUBSCRIBE);
    assert_eq!(req.collection_name(), Some("resources"));
}

#[test]
fn subscribe_reply_is_a_snapshot() {
    let req = subscribe_request("resources");
    let reply = req
        .reply("r1", Status::Done)
        .with_data(frames::KEY_DOCUMENTS, vec![json!({"name": "Library"})]);
    assert_eq!(
        classify_frame(&reply, "resources"),
        Some(SubscriptionEvent::Snapshot(vec![json!({"name": "Library"})]))
    );
}

#[test]
fn pushed_snapshot_replaces_documents() {
    let frame = snapshot_push("resources", json!([]));
    assert_eq!(classify_frame(&frame, "resources"), Some(SubscriptionEvent::Snapshot(vec![])));
}

#[test]
fn other_collections_are_ignored() {
    let frame = snapshot_push("events", json!([{"title": "Picnic"}]));
    assert_eq!(classify_frame(&frame, "resources"), None);
}

#[test]
fn error_reply_surfaces_message() {
    let reply = subscribe_request("resources")
        .reply("r1", Status::Error)
        .into_error("Missing or insufficient permissions.", "E_FORBIDDEN");
    assert_eq!(
        classify_frame(&reply, "resources"),
        Some(SubscriptionEvent::Failed("Missing or insufficient permissions.".into()))
    );
}

#[test]
fn error_without_message_uses_default() {
    let mut reply = subscribe_request("resources").reply("r1", Status::Error);
    reply.data = json!({});
    assert_eq!(
        classify_frame(&reply, "resources"),
        Some(SubscriptionEvent::Failed("Subscription failed.".into()))
    );
}

#[test]
fn greeting_and_unsubscribe_ack_are_ignored() {
    let hello = Frame::request("s1", frames::SYSCALL_CONNECTED).with_data("subscriber_id", "abc");
    assert_eq!(classify_frame(&hello, "resources"), None);

    let ack = unsubscribe_request("resources").reply("r2", Status::Done);
    assert_eq!(classify_frame(&ack, "resources"), None);
}
