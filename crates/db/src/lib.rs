//! PostgreSQL persistence for the movie catalog.
//!
//! Repositories are zero-sized structs whose methods take the request
//! session as `&mut PgConnection`. Handlers open one [`Session`] per
//! request, thread it through every call, then commit it.

use serde::Serialize;
use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;

pub use error::{RepoError, RepoResult};

pub type DbPool = sqlx::PgPool;

/// A request-scoped unit of work.
///
/// Committed explicitly on success. Dropping it without a commit rolls the
/// transaction back and returns the connection to the pool.
pub type Session = sqlx::Transaction<'static, sqlx::Postgres>;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Open a new session (transaction) on a pooled connection.
pub async fn begin_session(pool: &DbPool) -> Result<Session, sqlx::Error> {
    pool.begin().await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Connection pool and schema state reported by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DbStatus {
    /// Open connections, idle or in use.
    pub pool_size: u32,
    pub idle_connections: usize,
    /// Newest successfully applied migration, `None` on an unmigrated database.
    pub schema_version: Option<i64>,
}

/// Probe the database and report pool usage and the applied schema version.
///
/// Fails when no connection can be acquired or the migrations table is
/// missing.
pub async fn status(pool: &DbPool) -> Result<DbStatus, sqlx::Error> {
    let schema_version =
        sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(version) FROM _sqlx_migrations WHERE success")
            .fetch_one(pool)
            .await?;

    Ok(DbStatus {
        pool_size: pool.size(),
        idle_connections: pool.num_idle(),
        schema_version,
    })
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
