//! Project row model and joined read views.

use mentorhub_core::error::CoreError;
use mentorhub_core::project_ref::ProjectCode;
use mentorhub_core::project_status::ProjectStatus;
use mentorhub_core::store::Project;
use mentorhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table with code and status still in their
/// stored text form.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub project_code: String,
    pub title: String,
    pub description: Option<String>,
    pub student_id: DbId,
    pub mentor_id: DbId,
    pub status: String,
    pub progress_percentage: i32,
    pub mentor_feedback: Option<String>,
    pub github_link: Option<String>,
    pub submission_date: Timestamp,
    pub last_updated: Timestamp,
}

impl TryFrom<ProjectRow> for Project {
    type Error = CoreError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |e: CoreError| CoreError::Internal(format!("project {id} is corrupt: {e}"));
        Ok(Project {
            id,
            project_code: ProjectCode::parse(&row.project_code).map_err(corrupt)?,
            status: ProjectStatus::from_str(&row.status).map_err(corrupt)?,
            title: row.title,
            description: row.description,
            student_id: row.student_id,
            mentor_id: row.mentor_id,
            progress_percentage: row.progress_percentage,
            mentor_feedback: row.mentor_feedback,
            github_link: row.github_link,
            submission_date: row.submission_date,
            last_updated: row.last_updated,
        })
    }
}

/// A project joined with the names and emails of its student and mentor.
///
/// Used by every listing endpoint and by the single-project view. The joins
/// are LEFT joins so a project stays visible even if an account lookup fails.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectDetail {
    pub id: DbId,
    pub project_code: String,
    pub title: String,
    pub description: Option<String>,
    pub student_id: DbId,
    pub mentor_id: DbId,
    pub status: String,
    pub progress_percentage: i32,
    pub mentor_feedback: Option<String>,
    pub github_link: Option<String>,
    pub submission_date: Timestamp,
    pub last_updated: Timestamp,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub mentor_name: Option<String>,
    pub mentor_email: Option<String>,
}
