//! Handlers for the admin account routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mentorhub_db::models::admin::{Admin, CreateAdmin};
use mentorhub_db::repositories::AdminRepo;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::state::AppState;

/// GET /api/v1/admin
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Admin>>> {
    Ok(Json(AdminRepo::list(&state.pool).await?))
}

/// POST /api/v1/admin
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateAdmin>,
) -> AppResult<(StatusCode, Json<Admin>)> {
    let admin = AdminRepo::create(&state.pool, &input).await?;
    tracing::info!(admin_id = admin.id, "Admin created");
    Ok((StatusCode::CREATED, Json(admin)))
}
