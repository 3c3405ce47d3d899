//! Handlers for the `/projects` resource and the project-scoped routes of
//! the student, faculty and admin groups.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mentorhub_core::error::CoreError;
use mentorhub_core::lifecycle::{Intake, ProjectProposal};
use mentorhub_core::store::ProjectApproval;
use mentorhub_core::types::DbId;
use mentorhub_db::models::project::ProjectDetail;
use mentorhub_db::repositories::ProjectRepo;
use serde::Deserialize;

use super::{project_ref, required};
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::{MessageResponse, ProjectCreated, StatusUpdated, Updated};
use crate::state::AppState;

/// Body of the unscoped status route.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: Option<String>,
    pub feedback: Option<String>,
}

/// Body of the faculty status route. The mentor id scopes the update.
#[derive(Debug, Deserialize)]
pub struct FacultyStatusBody {
    pub mentor_id: Option<DbId>,
    pub status: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressBody {
    pub progress_percentage: Option<i32>,
    pub status: Option<String>,
}

/// Body of the student github route. `student_id` is the ownership claim.
#[derive(Debug, Deserialize)]
pub struct StudentGithubBody {
    pub github_link: Option<String>,
    pub student_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct GithubBody {
    pub github_link: Option<String>,
}

async fn submit(
    state: &AppState,
    proposal: ProjectProposal,
    intake: Intake,
    message: &'static str,
) -> AppResult<(StatusCode, Json<ProjectCreated>)> {
    let project = state.lifecycle().submit(proposal, intake).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProjectCreated {
            message,
            project_code: project.project_code,
            id: project.id,
        }),
    ))
}

/// POST /api/v1/projects
pub async fn propose(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProjectProposal>,
) -> AppResult<(StatusCode, Json<ProjectCreated>)> {
    submit(&state, input, Intake::Proposal, "Project created successfully").await
}

/// POST /api/v1/student/projects
pub async fn student_submit(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProjectProposal>,
) -> AppResult<(StatusCode, Json<ProjectCreated>)> {
    submit(
        &state,
        input,
        Intake::StudentSubmission,
        "Project submitted successfully",
    )
    .await
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectDetail>>> {
    Ok(Json(ProjectRepo::list(&state.pool).await?))
}

/// GET /api/v1/projects/student/{student_id}
pub async fn list_by_student(
    State(state): State<AppState>,
    ApiPath(student_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<ProjectDetail>>> {
    Ok(Json(
        ProjectRepo::list_by_student(&state.pool, student_id).await?,
    ))
}

/// GET /api/v1/projects/mentor/{mentor_id}
pub async fn list_by_mentor(
    State(state): State<AppState>,
    ApiPath(mentor_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<ProjectDetail>>> {
    Ok(Json(ProjectRepo::list_by_mentor(&state.pool, mentor_id).await?))
}

/// GET /api/v1/projects/{ref}
pub async fn get_by_ref(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> AppResult<Json<ProjectDetail>> {
    let reference = project_ref(&raw)?;
    let project = ProjectRepo::find_detail(&state.pool, reference)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", reference))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{ref}/status
pub async fn set_status(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
    ApiJson(input): ApiJson<StatusBody>,
) -> AppResult<Json<StatusUpdated>> {
    let reference = project_ref(&raw)?;
    let status = required(input.status, "status")?;
    let changed = state
        .lifecycle()
        .set_status(reference, &status, input.feedback, None)
        .await?;
    Ok(Json(StatusUpdated {
        message: changed.message,
        status: changed.project.status.to_string(),
        updated_at: changed.updated_at,
    }))
}

/// PUT /api/v1/faculty/projects/{ref}/status
pub async fn faculty_set_status(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
    ApiJson(input): ApiJson<FacultyStatusBody>,
) -> AppResult<Json<StatusUpdated>> {
    let reference = project_ref(&raw)?;
    let mentor_id = required(input.mentor_id, "mentor_id")?;
    let status = required(input.status, "status")?;
    let changed = state
        .lifecycle()
        .set_status(reference, &status, input.feedback, Some(mentor_id))
        .await?;
    Ok(Json(StatusUpdated {
        message: changed.message,
        status: changed.project.status.to_string(),
        updated_at: changed.updated_at,
    }))
}

/// PUT /api/v1/projects/{ref}/progress
pub async fn set_progress(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
    ApiJson(input): ApiJson<ProgressBody>,
) -> AppResult<Json<Updated>> {
    let reference = project_ref(&raw)?;
    let project = state
        .lifecycle()
        .set_progress(reference, input.progress_percentage, input.status.as_deref())
        .await?;
    Ok(Json(Updated {
        message: "Project progress updated successfully",
        updated_at: project.last_updated,
    }))
}

/// PUT /api/v1/student/projects/{ref}/github
pub async fn student_update_github(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
    ApiJson(input): ApiJson<StudentGithubBody>,
) -> AppResult<Json<Updated>> {
    let reference = project_ref(&raw)?;
    let student_id = required(input.student_id, "student_id")?;
    let updated_at = state
        .lifecycle()
        .update_github_link(reference, input.github_link.as_deref(), Some(student_id))
        .await?;
    Ok(Json(Updated {
        message: "GitHub link updated successfully",
        updated_at,
    }))
}

/// PUT /api/v1/admin/projects/{ref}/github
pub async fn admin_update_github(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
    ApiJson(input): ApiJson<GithubBody>,
) -> AppResult<Json<Updated>> {
    let reference = project_ref(&raw)?;
    let updated_at = state
        .lifecycle()
        .update_github_link(reference, input.github_link.as_deref(), None)
        .await?;
    Ok(Json(Updated {
        message: "GitHub link updated successfully",
        updated_at,
    }))
}

/// DELETE /api/v1/projects/{ref}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> AppResult<Json<MessageResponse>> {
    let reference = project_ref(&raw)?;
    state.lifecycle().delete(reference).await?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

/// GET /api/v1/projects/{ref}/approvals
pub async fn approvals(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> AppResult<Json<Vec<ProjectApproval>>> {
    let reference = project_ref(&raw)?;
    Ok(Json(state.lifecycle().approvals(reference).await?))
}
