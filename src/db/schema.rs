//! One-shot schema bootstrap
//!
//! Executes the configured DDL statement once at startup, before the
//! listener binds. Failure here is fatal; the caller must abort rather
//! than serve against a missing table. No retries.

use sqlx::SqlitePool;

/// DDL used when no `--schema` override is given.
pub const DEFAULT_SCHEMA: &str =
    "CREATE TABLE IF NOT EXISTS pets (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)";

/// Run the configured DDL against the pool.
pub async fn init(pool: &SqlitePool, ddl: &str) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema bootstrap");
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}
