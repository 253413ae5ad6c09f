//! Collection routes: one-shot snapshots and the event seeding utility.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::services::collection::{self, CollectionError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub inserted: usize,
    pub ids: Vec<Uuid>,
}

/// `GET /api/collections/{name}`: full snapshot, newest first.
pub async fn list_collection(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    collection::ensure_readable(&state.config, &name).map_err(collection_error_to_status)?;
    let docs = collection::snapshot(&state.pool, &name)
        .await
        .map_err(collection_error_to_status)?;
    Ok(Json(docs))
}

/// `POST /api/collections/{name}/seed`: insert a fixed list of documents.
///
/// Enabled only when `SEED_ENABLED=true`.
pub async fn seed_collection(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(docs): Json<Vec<Value>>,
) -> Result<(StatusCode, Json<SeedResponse>), StatusCode> {
    if !state.config.seed_enabled {
        return Err(StatusCode::NOT_FOUND);
    }
    collection::ensure_readable(&state.config, &name).map_err(collection_error_to_status)?;

    let ids = collection::insert_documents(&state.pool, &name, &docs)
        .await
        .map_err(collection_error_to_status)?;
    info!(collection = %name, inserted = ids.len(), "collection seeded");

    Ok((StatusCode::CREATED, Json(SeedResponse { inserted: ids.len(), ids })))
}

pub(crate) fn collection_error_to_status(err: CollectionError) -> StatusCode {
    match err {
        CollectionError::Forbidden(_) => StatusCode::FORBIDDEN,
        CollectionError::InvalidDocument(_) => StatusCode::BAD_REQUEST,
        CollectionError::Database(e) => {
            warn!(error = %e, "collection query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "collections_test.rs"]
mod tests;
