//! Server-side helpers around the shared `frames::Frame` envelope.
//!
//! DESIGN
//! ======
//! The wire model lives in the `frames` crate so the client decodes exactly
//! what the server encodes. This module only adds server concerns: fresh
//! frame ids and the grepable error-code contract used by error frames.

use frames::{Frame, Status};
use uuid::Uuid;

/// Grepable error code attached to error frames.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

/// Fresh server-issued frame id.
#[must_use]
pub fn next_id() -> String {
    Uuid::new_v4().to_string()
}

/// Reply to `req` with an error frame built from `err`.
#[must_use]
pub fn error_reply<E: ErrorCode>(req: &Frame, err: &E) -> Frame {
    req.reply(next_id(), Status::Error)
        .into_error(err.to_string(), err.error_code())
}

/// Unsolicited frame pushed to subscribers of `collection`.
#[must_use]
pub fn push(syscall: &str, collection: &str) -> Frame {
    let mut frame = Frame::request(next_id(), syscall).with_collection(collection);
    frame.status = Status::Item;
    frame
}
