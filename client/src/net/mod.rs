//! Networking modules for HTTP + websocket frame protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `collection_client` manages live collection
//! subscriptions over the shared `frames` wire model.

pub mod api;
pub mod collection_client;
