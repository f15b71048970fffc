//! Persistence layer for the estate record service.
//!
//! - [`entity`]: the record/entity capability traits every model implements
//! - [`models`]: row structs for each table and the composite view
//! - [`repositories`]: generic store access plus the user credential lookup
//! - [`allocator`]: `max + 1` identifier allocation
//! - [`lifecycle`]: the generic create/read/replace/patch/delete service

use sqlx::postgres::PgPoolOptions;

pub mod allocator;
pub mod entity;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
