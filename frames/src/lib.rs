//! Shared frame model and protobuf codec for live collection subscriptions.
//!
//! Both the `server` hub and the `client` resource view speak this wire
//! format. Payloads stay loosely typed (`serde_json::Value`) because the
//! documents they carry are untyped; the envelope is encoded as protobuf and
//! sent over binary websocket messages.
//!
//! EXCHANGE
//! ========
//! - client `collection:subscribe` (request) -> server `collection:subscribe`
//!   (done, full snapshot) -> server `collection:snapshot` (item, full
//!   snapshot) on every later change.
//! - client `collection:unsubscribe` (request) -> server (done).
//! - any failure -> `error` frame carrying `message` + `code`.

use std::time::{SystemTime, UNIX_EPOCH};

use prost::Message;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Subscribe to a named collection.
pub const SYSCALL_SUBSCRIBE: &str = "collection:subscribe";
/// Release a subscription.
pub const SYSCALL_UNSUBSCRIBE: &str = "collection:unsubscribe";
/// Server push carrying a replacement snapshot.
pub const SYSCALL_SNAPSHOT: &str = "collection:snapshot";
/// Greeting sent once per websocket connection.
pub const SYSCALL_CONNECTED: &str = "session:connected";

/// Data key holding the collection name.
pub const KEY_COLLECTION: &str = "collection";
/// Data key holding the snapshot document array.
pub const KEY_DOCUMENTS: &str = "documents";
/// Data key holding a human readable error message.
pub const KEY_MESSAGE: &str = "message";
/// Data key holding a grepable error code.
pub const KEY_CODE: &str = "code";

/// Error returned by [`decode_frame`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to decode protobuf frame: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("invalid frame status: {0}")]
    InvalidStatus(i32),
}

/// Position of a frame within a request/response exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Request,
    /// Unsolicited push within a live subscription.
    Item,
    Done,
    Error,
    Cancel,
}

impl Status {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        let wire = match self {
            Self::Request => WireFrameStatus::Request,
            Self::Item => WireFrameStatus::Item,
            Self::Done => WireFrameStatus::Done,
            Self::Error => WireFrameStatus::Error,
            Self::Cancel => WireFrameStatus::Cancel,
        };
        wire as i32
    }

    fn from_i32(value: i32) -> Result<Self, CodecError> {
        match WireFrameStatus::try_from(value) {
            Ok(WireFrameStatus::Request) => Ok(Self::Request),
            Ok(WireFrameStatus::Item) => Ok(Self::Item),
            Ok(WireFrameStatus::Done) => Ok(Self::Done),
            Ok(WireFrameStatus::Error) => Ok(Self::Error),
            Ok(WireFrameStatus::Cancel) => Ok(Self::Cancel),
            Err(_) => Err(CodecError::InvalidStatus(value)),
        }
    }
}

/// One message on the subscription socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame identifier (UUID string on the server, free-form on the client).
    pub id: String,
    /// Request this frame answers, if any.
    pub parent_id: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub ts: i64,
    /// Collection the frame concerns, if any.
    pub collection: Option<String>,
    pub syscall: String,
    pub status: Status,
    pub data: Value,
}

fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

impl Frame {
    /// Build a request frame with an empty payload.
    pub fn request(id: impl Into<String>, syscall: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            ts: now_ms(),
            collection: None,
            syscall: syscall.into(),
            status: Status::Request,
            data: Value::Object(Map::new()),
        }
    }

    /// Build a response to `self` with the given status and id.
    #[must_use]
    pub fn reply(&self, id: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            parent_id: Some(self.id.clone()),
            ts: now_ms(),
            collection: self.collection.clone(),
            syscall: self.syscall.clone(),
            status,
            data: Value::Object(Map::new()),
        }
    }

    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        let collection = collection.into();
        self.data = with_key(self.data, KEY_COLLECTION, Value::String(collection.clone()));
        self.collection = Some(collection);
        self
    }

    #[must_use]
    pub fn with_data(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data = with_key(self.data, key, value.into());
        self
    }

    /// Turn a frame into an error frame carrying `message` and `code`.
    #[must_use]
    pub fn into_error(mut self, message: impl Into<String>, code: &str) -> Self {
        self.status = Status::Error;
        self.with_data(KEY_MESSAGE, message.into())
            .with_data(KEY_CODE, code)
    }

    /// Collection named by the envelope, falling back to the payload.
    #[must_use]
    pub fn collection_name(&self) -> Option<&str> {
        self.collection
            .as_deref()
            .or_else(|| self.data.get(KEY_COLLECTION).and_then(Value::as_str))
    }

    /// Snapshot documents carried by this frame; empty when absent.
    #[must_use]
    pub fn documents(&self) -> &[Value] {
        self.data
            .get(KEY_DOCUMENTS)
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Error message carried by an error frame.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.data.get(KEY_MESSAGE).and_then(Value::as_str)
    }
}

fn with_key(data: Value, key: &str, value: Value) -> Value {
    let mut map = match data {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert(key.to_owned(), value);
    Value::Object(map)
}

/// Encode a frame into protobuf bytes.
#[must_use]
pub fn encode_frame(frame: &Frame) -> Vec<u8> {
    let wire = frame_to_wire(frame);

    let mut out = Vec::with_capacity(wire.encoded_len());
    // Vec<u8> grows on demand, so prost cannot report BufferTooSmall here.
    wire.encode(&mut out).unwrap_or_default();
    out
}

/// Decode protobuf bytes into a frame.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed bytes and
/// [`CodecError::InvalidStatus`] for out-of-range status values.
pub fn decode_frame(bytes: &[u8]) -> Result<Frame, CodecError> {
    let wire = WireFrame::decode(bytes)?;
    Ok(Frame {
        status: Status::from_i32(wire.status)?,
        id: wire.id,
        parent_id: wire.parent_id,
        ts: wire.ts,
        collection: wire.collection,
        syscall: wire.syscall,
        data: wire
            .data
            .map_or(Value::Object(Map::new()), |v| proto_to_json(&v)),
    })
}

fn frame_to_wire(frame: &Frame) -> WireFrame {
    WireFrame {
        id: frame.id.clone(),
        parent_id: frame.parent_id.clone(),
        ts: frame.ts,
        collection: frame.collection.clone(),
        syscall: frame.syscall.clone(),
        status: frame.status.as_i32(),
        data: Some(json_to_proto(&frame.data)),
    }
}

fn json_to_proto(value: &Value) -> prost_types::Value {
    use prost_types::value::Kind;

    let kind = match value {
        Value::Null => Kind::NullValue(prost_types::NullValue::NullValue as i32),
        Value::Bool(v) => Kind::BoolValue(*v),
        Value::Number(v) => Kind::NumberValue(v.as_f64().unwrap_or(0.0)),
        Value::String(v) => Kind::StringValue(v.clone()),
        Value::Array(items) => Kind::ListValue(prost_types::ListValue { values: items.iter().map(json_to_proto).collect() }),
        Value::Object(fields) => Kind::StructValue(prost_types::Struct {
            fields: fields
                .iter()
                .map(|(k, v)| (k.clone(), json_to_proto(v)))
                .collect(),
        }),
    };

    prost_types::Value { kind: Some(kind) }
}

fn proto_to_json(value: &prost_types::Value) -> Value {
    use prost_types::value::Kind;

    match &value.kind {
        None | Some(Kind::NullValue(_)) => Value::Null,
        Some(Kind::BoolValue(v)) => Value::Bool(*v),
        // Whole numbers come back as integers so timestamps and counts survive
        // the f64 hop unchanged for consumers that read them with `as_i64`.
        Some(Kind::NumberValue(v)) => number_to_json(*v),
        Some(Kind::StringValue(v)) => Value::String(v.clone()),
        Some(Kind::ListValue(list)) => Value::Array(list.values.iter().map(proto_to_json).collect()),
        Some(Kind::StructValue(s)) => Value::Object(
            s.fields
                .iter()
                .map(|(k, v)| (k.clone(), proto_to_json(v)))
                .collect(),
        ),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn number_to_json(v: f64) -> Value {
    const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INT {
        return Value::from(v as i64);
    }
    serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
}

#[derive(Clone, PartialEq, Message)]
struct WireFrame {
    #[prost(string, tag = "1")]
    id: String,
    #[prost(string, optional, tag = "2")]
    parent_id: Option<String>,
    #[prost(int64, tag = "3")]
    ts: i64,
    #[prost(string, optional, tag = "4")]
    collection: Option<String>,
    #[prost(string, tag = "5")]
    syscall: String,
    #[prost(enumeration = "WireFrameStatus", tag = "6")]
    status: i32,
    #[prost(message, optional, tag = "7")]
    data: Option<prost_types::Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, prost::Enumeration)]
#[repr(i32)]
enum WireFrameStatus {
    Request = 0,
    Done = 1,
    Error = 2,
    Cancel = 3,
    Item = 4,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
