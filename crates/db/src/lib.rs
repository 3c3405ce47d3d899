//! PostgreSQL persistence for MentorHub.
//!
//! Row models and DTOs live in [`models`], zero-sized query repositories in
//! [`repositories`], and [`PgStore`] adapts the repositories to the store
//! ports declared by `mentorhub_core::store`.

use mentorhub_core::error::CoreError;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod pg_store;
pub mod repositories;

pub use pg_store::PgStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Translate a sqlx failure into the domain error the managers propagate.
///
/// Unique violations on `uq_*` constraints and foreign-key violations become
/// `Conflict`; check violations become `Validation`; anything else is a
/// `Store` failure carrying the driver's message.
pub fn store_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some("23505") if constraint.starts_with("uq_") => {
                return CoreError::Conflict(format!("Duplicate value violates {constraint}"));
            }
            Some("23503") => {
                return CoreError::Conflict(format!(
                    "Referenced record missing or still in use ({constraint})"
                ));
            }
            Some("23514") => {
                return CoreError::Validation(format!("Value violates {constraint}"));
            }
            _ => {}
        }
    }
    CoreError::Store(err.to_string())
}
