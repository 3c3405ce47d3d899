//! Handlers for the `/student` account routes and the admin student routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mentorhub_core::error::CoreError;
use mentorhub_core::types::DbId;
use mentorhub_db::models::account::ResetPassword;
use mentorhub_db::models::project::ProjectDetail;
use mentorhub_db::models::student::{
    AssignMentor, CreateStudent, MentoredStudent, Student, StudentWithMentor, UpdateGithubProfile,
    UpdateStudent,
};
use mentorhub_db::repositories::{ProjectRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ValidJson};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found("Student", id))
}

/// GET /api/v1/student
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StudentWithMentor>>> {
    Ok(Json(StudentRepo::list(&state.pool).await?))
}

/// POST /api/v1/student
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = StudentRepo::create(&state.pool, &input).await?;
    tracing::info!(student_id = student.id, "Student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/v1/student/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<StudentWithMentor>> {
    let student = StudentRepo::find_with_mentor(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(student))
}

/// PUT /api/v1/student/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(student))
}

/// DELETE /api/v1/student/{id}
/// DELETE /api/v1/admin/students/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !StudentRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(student_id = id, "Student deleted");
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// PUT /api/v1/student/{id}/github
pub async fn update_github(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<UpdateGithubProfile>,
) -> AppResult<Json<MessageResponse>> {
    if !StudentRepo::update_github_link(&state.pool, id, input.github_link.trim()).await? {
        return Err(not_found(id));
    }
    Ok(Json(MessageResponse::new("GitHub link updated successfully")))
}

/// GET /api/v1/student/{id}/projects
pub async fn projects(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Vec<ProjectDetail>>> {
    Ok(Json(ProjectRepo::list_by_student(&state.pool, id).await?))
}

/// GET /api/v1/student/mentor/{mentor_id}
/// GET /api/v1/faculty/{id}/students
pub async fn list_by_mentor(
    State(state): State<AppState>,
    ApiPath(mentor_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<MentoredStudent>>> {
    Ok(Json(StudentRepo::list_by_mentor(&state.pool, mentor_id).await?))
}

/// PUT /api/v1/admin/assign-mentor
///
/// An unknown mentor violates the foreign key and answers 409.
pub async fn assign_mentor(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AssignMentor>,
) -> AppResult<Json<MessageResponse>> {
    if !StudentRepo::assign_mentor(&state.pool, input.student_id, input.mentor_id).await? {
        return Err(not_found(input.student_id));
    }
    tracing::info!(
        student_id = input.student_id,
        mentor_id = input.mentor_id,
        "Mentor assigned"
    );
    Ok(Json(MessageResponse::new("Mentor assigned successfully")))
}

/// PUT /api/v1/admin/reset-student-password/{id}
pub async fn reset_password(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidJson(input): ValidJson<ResetPassword>,
) -> AppResult<Json<MessageResponse>> {
    if !StudentRepo::reset_password(&state.pool, id, &input.new_password).await? {
        return Err(not_found(id));
    }
    tracing::info!(student_id = id, "Student password reset");
    Ok(Json(MessageResponse::new("Password reset successfully")))
}
