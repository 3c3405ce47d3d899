//! Login handlers for the three account kinds.
//!
//! Credentials are compared as stored (plaintext). Every failure, unknown
//! account or wrong password, answers with the same 401.

use axum::extract::State;
use axum::Json;
use mentorhub_core::error::CoreError;
use mentorhub_db::models::account::LoginRequest;
use mentorhub_db::models::admin::Admin;
use mentorhub_db::models::mentor::Mentor;
use mentorhub_db::models::student::Student;
use mentorhub_db::repositories::{AdminRepo, MentorRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::response::LoginResponse;
use crate::state::AppState;

const LOGIN_OK: &str = "Login successful";

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// POST /api/v1/student/login
pub async fn student_login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<Json<LoginResponse<Student>>> {
    let student = StudentRepo::find_by_email(&state.pool, &input.username)
        .await?
        .filter(|s| s.password == input.password)
        .ok_or_else(|| {
            tracing::info!(username = %input.username, "Student login rejected");
            invalid_credentials()
        })?;

    tracing::info!(student_id = student.id, "Student logged in");
    Ok(Json(LoginResponse {
        message: LOGIN_OK,
        role: "student",
        profile: student,
    }))
}

/// POST /api/v1/faculty/login
pub async fn faculty_login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<Json<LoginResponse<Mentor>>> {
    let mentor = MentorRepo::find_by_email(&state.pool, &input.username)
        .await?
        .filter(|m| m.password == input.password)
        .ok_or_else(|| {
            tracing::info!(username = %input.username, "Faculty login rejected");
            invalid_credentials()
        })?;

    tracing::info!(mentor_id = mentor.id, "Faculty logged in");
    Ok(Json(LoginResponse {
        message: LOGIN_OK,
        role: "mentor",
        profile: mentor,
    }))
}

/// POST /api/v1/admin/login
pub async fn admin_login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<Json<LoginResponse<Admin>>> {
    let admin = AdminRepo::find_by_username(&state.pool, &input.username)
        .await?
        .filter(|a| a.password == input.password)
        .ok_or_else(|| {
            tracing::info!(username = %input.username, "Admin login rejected");
            invalid_credentials()
        })?;

    tracing::info!(admin_id = admin.id, "Admin logged in");
    Ok(Json(LoginResponse {
        message: LOGIN_OK,
        role: "admin",
        profile: admin,
    }))
}
