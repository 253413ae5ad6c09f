//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use crate::state::events::Event;

/// Body of a successful seed response.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SeedResult {
    pub inserted: usize,
}

#[cfg(any(test, feature = "hydrate"))]
fn seed_endpoint(collection: &str) -> String {
    format!("/api/collections/{collection}/seed")
}

#[cfg(any(test, feature = "hydrate"))]
fn seed_failed_message(status: u16) -> String {
    match status {
        404 => "seeding is disabled on this server".to_owned(),
        403 => "collection is not writable".to_owned(),
        _ => format!("seed request failed: {status}"),
    }
}

pub fn seed_success_message(result: &SeedResult) -> String {
    match result.inserted {
        1 => "Inserted 1 event.".to_owned(),
        n => format!("Inserted {n} events."),
    }
}

/// Write the fixed event list into the `events` collection.
///
/// # Errors
///
/// Returns a display message when the request fails or the server rejects it.
pub async fn seed_events(events: &[Event]) -> Result<SeedResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&seed_endpoint("events"))
            .json(&events)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(seed_failed_message(resp.status()));
        }
        resp.json::<SeedResult>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = events;
        Err("not available on server".to_owned())
    }
}
