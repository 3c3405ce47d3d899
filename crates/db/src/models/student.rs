//! Student entity model and DTOs.

use mentorhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full student row from the `students` table.
///
/// Holds the stored password; it is skipped on serialization so the row can
/// be returned from handlers as-is.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub prn: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub mentor_id: Option<DbId>,
    pub github_link: Option<String>,
    pub created_at: Timestamp,
}

/// Student joined with the name of the assigned mentor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentWithMentor {
    pub id: DbId,
    pub name: String,
    pub prn: String,
    pub email: String,
    pub mentor_id: Option<DbId>,
    pub github_link: Option<String>,
    pub created_at: Timestamp,
    pub mentor_name: Option<String>,
}

/// A mentor's student, with the title and state of their latest project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MentoredStudent {
    pub id: DbId,
    pub name: String,
    pub prn: String,
    pub email: String,
    pub github_link: Option<String>,
    pub project_title: Option<String>,
    pub project_status: Option<String>,
    pub progress_percentage: Option<i32>,
}

/// DTO for creating a student.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "PRN is required"))]
    pub prn: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub mentor_id: Option<DbId>,
    pub github_link: Option<String>,
}

/// DTO for updating a student. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub prn: Option<String>,
    pub email: Option<String>,
    pub mentor_id: Option<DbId>,
    pub github_link: Option<String>,
}

/// Body of the student profile github update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGithubProfile {
    #[validate(length(min = 1, message = "GitHub link is required"))]
    pub github_link: String,
}

/// Body of the admin mentor assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignMentor {
    pub student_id: DbId,
    pub mentor_id: DbId,
}
