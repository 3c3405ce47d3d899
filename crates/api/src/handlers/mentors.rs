//! Handlers for the `/faculty` account routes and the admin mentor routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mentorhub_core::error::CoreError;
use mentorhub_core::types::DbId;
use mentorhub_db::models::account::ResetPassword;
use mentorhub_db::models::mentor::{CreateMentor, Mentor, UpdateMentor};
use mentorhub_db::repositories::MentorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ValidJson};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found("Mentor", id))
}

/// GET /api/v1/faculty
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mentor>>> {
    Ok(Json(MentorRepo::list(&state.pool).await?))
}

/// POST /api/v1/faculty
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateMentor>,
) -> AppResult<(StatusCode, Json<Mentor>)> {
    let mentor = MentorRepo::create(&state.pool, &input).await?;
    tracing::info!(mentor_id = mentor.id, "Mentor created");
    Ok((StatusCode::CREATED, Json(mentor)))
}

/// GET /api/v1/faculty/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Mentor>> {
    let mentor = MentorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(mentor))
}

/// PUT /api/v1/faculty/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateMentor>,
) -> AppResult<Json<Mentor>> {
    let mentor = MentorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(mentor))
}

/// DELETE /api/v1/faculty/{id}
/// DELETE /api/v1/admin/mentors/{id}
///
/// A mentor with assigned projects cannot be deleted (409).
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MentorRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(mentor_id = id, "Mentor deleted");
    Ok(Json(MessageResponse::new("Mentor deleted successfully")))
}

/// PUT /api/v1/admin/reset-mentor-password/{id}
pub async fn reset_password(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<ResetPassword>,
) -> AppResult<Json<MessageResponse>> {
    if !MentorRepo::reset_password(&state.pool, id, &input.new_password).await? {
        return Err(not_found(id));
    }
    tracing::info!(mentor_id = id, "Mentor password reset");
    Ok(Json(MessageResponse::new("Password reset successfully")))
}
