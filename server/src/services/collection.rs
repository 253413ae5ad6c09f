//! Collection service, the document store behind the resource directory.
//!
//! DESIGN
//! ======
//! Documents are untyped JSON objects grouped by collection name in the
//! `documents` table. Reads return whole snapshots ordered newest first;
//! there is no pagination or partial diffing. Clients receive each document
//! flattened: stored fields plus `id`, with `created_at` (epoch millis)
//! filled from the row when the document does not carry its own.
//!
//! Access is governed by the configured allow-list only. Writes happen
//! through the seeding endpoint.

use serde_json::{Map, Value};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::frame::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Missing or insufficient permissions.")]
    Forbidden(String),
    #[error("invalid document at index {0}: expected a JSON object")]
    InvalidDocument(usize),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ErrorCode for CollectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Forbidden(_) => "E_FORBIDDEN",
            Self::InvalidDocument(_) => "E_BAD_REQUEST",
            Self::Database(_) => "E_DATABASE",
        }
    }
}

/// One stored document row.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub collection: String,
    pub data: Value,
    pub created_at_ms: i64,
}

impl Document {
    /// Flatten into the shape sent to clients.
    #[must_use]
    pub fn to_wire(&self) -> Value {
        let mut fields = match &self.data {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        fields.insert("id".into(), Value::String(self.id.to_string()));
        fields
            .entry("created_at")
            .or_insert_with(|| Value::from(self.created_at_ms));
        Value::Object(fields)
    }
}

/// Reject collections the configuration does not expose.
///
/// # Errors
///
/// Returns [`CollectionError::Forbidden`] for names outside the allow-list.
pub fn ensure_readable(config: &ServerConfig, collection: &str) -> Result<(), CollectionError> {
    if config.is_readable(collection) {
        Ok(())
    } else {
        Err(CollectionError::Forbidden(collection.to_owned()))
    }
}

/// Load every document of a collection, newest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_documents(pool: &PgPool, collection: &str) -> Result<Vec<Document>, CollectionError> {
    let rows = sqlx::query_as::<_, (Uuid, String, Value, i64)>(
        "SELECT id, collection, data, (extract(epoch FROM created_at) * 1000)::bigint
         FROM documents
         WHERE collection = $1
         ORDER BY created_at DESC, id",
    )
    .bind(collection)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, collection, data, created_at_ms)| Document { id, collection, data, created_at_ms })
        .collect())
}

/// Snapshot of a collection in wire shape.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn snapshot(pool: &PgPool, collection: &str) -> Result<Vec<Value>, CollectionError> {
    let docs = list_documents(pool, collection).await?;
    Ok(docs.iter().map(Document::to_wire).collect())
}

/// Check that every seed item is a JSON object before touching the database.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidDocument`] with the first offending index.
pub fn validate_documents(docs: &[Value]) -> Result<(), CollectionError> {
    match docs.iter().position(|doc| !doc.is_object()) {
        Some(index) => Err(CollectionError::InvalidDocument(index)),
        None => Ok(()),
    }
}

/// Insert a batch of documents in one transaction, returning their ids.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidDocument`] for non-object items and a
/// database error if any insert fails (nothing is committed in that case).
pub async fn insert_documents(pool: &PgPool, collection: &str, docs: &[Value]) -> Result<Vec<Uuid>, CollectionError> {
    validate_documents(docs)?;

    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(docs.len());
    for doc in docs {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(doc)
            .execute(&mut *tx)
            .await?;
        ids.push(id);
    }
    tx.commit().await?;

    Ok(ids)
}

#[cfg(test)]
#[path = "collection_test.rs"]
mod tests;
