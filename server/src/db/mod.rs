//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup creates the shared SQLx pool here and applies the `documents`
//! schema (table, index, change-notification trigger) before serving.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Postgres `NOTIFY` channel raised by the `documents` trigger. The payload
/// is the name of the collection that changed.
pub const CHANGE_CHANNEL: &str = "collection_changed";

/// Initialize the `PostgreSQL` connection pool and run migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
