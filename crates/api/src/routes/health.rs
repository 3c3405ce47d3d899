//! Liveness probe, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
}

/// GET /health
///
/// Always 200; a dead database only downgrades `status`.
async fn health(State(state): State<AppState>) -> Json<Health> {
    let database = match mentorhub_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health probe could not reach the database");
            false
        }
    };
    Json(Health {
        status: if database { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
