//! Repository for the `projects` table.

use mentorhub_core::project_ref::{ProjectRef, PROJECT_CODE_PREFIX};
use mentorhub_core::store::{NewProject, ProgressUpdate, StatusUpdate};
use mentorhub_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::project::{ProjectDetail, ProjectRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_code, title, description, student_id, mentor_id, status, \
     progress_percentage, mentor_feedback, github_link, submission_date, last_updated";

/// Joined column list for [`ProjectDetail`]; expects `projects p`,
/// `students s` and `mentors m` aliases.
const DETAIL_COLUMNS: &str = "p.id, p.project_code, p.title, p.description, p.student_id, \
     p.mentor_id, p.status, p.progress_percentage, p.mentor_feedback, p.github_link, \
     p.submission_date, p.last_updated, \
     s.name AS student_name, s.email AS student_email, \
     m.name AS mentor_name, m.email AS mentor_email";

const DETAIL_FROM: &str = "projects p \
     LEFT JOIN students s ON s.id = p.student_id \
     LEFT JOIN mentors m ON m.id = p.mentor_id";

/// Matches a row by either identifier. Binds `$1` (id) and `$2` (code);
/// exactly one of them is non-null.
const REF_MATCH: &str = "(id = $1 OR project_code = $2)";

/// Split a reference into the two nullable binds used by [`REF_MATCH`].
fn ref_binds(reference: ProjectRef) -> (Option<DbId>, Option<String>) {
    match reference {
        ProjectRef::Id(id) => (Some(id), None),
        ProjectRef::Code(code) => (None, Some(code.to_string())),
    }
}

/// Provides queries for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Highest numeric suffix among existing project codes, or `None` if the
    /// table is empty.
    pub async fn max_code_number(pool: &PgPool) -> Result<Option<i64>, sqlx::Error> {
        let query = format!(
            "SELECT MAX(CAST(SUBSTRING(project_code FROM {}) AS BIGINT)) FROM projects",
            PROJECT_CODE_PREFIX.len() + 1
        );
        sqlx::query_scalar::<_, Option<i64>>(&query)
            .fetch_one(pool)
            .await
    }

    /// Insert a new project, returning the created row. Progress starts at 0.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<ProjectRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (project_code, title, description, student_id, mentor_id, status,
                 github_link, submission_date, last_updated)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(input.project_code.to_string())
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.student_id)
            .bind(input.mentor_id)
            .bind(input.status.as_str())
            .bind(&input.github_link)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Resolve a reference to its row.
    pub async fn find(
        pool: &PgPool,
        reference: ProjectRef,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let (id, code) = ref_binds(reference);
        let query = format!("SELECT {COLUMNS} FROM projects WHERE {REF_MATCH}");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a reference to its joined view.
    pub async fn find_detail(
        pool: &PgPool,
        reference: ProjectRef,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let (id, code) = ref_binds(reference);
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM}
             WHERE (p.id = $1 OR p.project_code = $2)"
        );
        sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(id)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List every project ordered by the numeric part of its code.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM}
             ORDER BY CAST(SUBSTRING(p.project_code FROM {}) AS BIGINT)",
            PROJECT_CODE_PREFIX.len() + 1
        );
        sqlx::query_as::<_, ProjectDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// List a student's projects, most recently updated first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM}
             WHERE p.student_id = $1
             ORDER BY p.last_updated DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List the projects assigned to a mentor, most recently updated first.
    pub async fn list_by_mentor(
        pool: &PgPool,
        mentor_id: DbId,
    ) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM {DETAIL_FROM}
             WHERE p.mentor_id = $1
             ORDER BY p.last_updated DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProjectDetail>(&query)
            .bind(mentor_id)
            .fetch_all(pool)
            .await
    }

    /// Set status, feedback and `last_updated` in one statement.
    ///
    /// When `update.mentor_id` is set the row must also belong to that mentor.
    /// Returns `None` if nothing matched.
    pub async fn update_status(
        pool: &PgPool,
        reference: ProjectRef,
        update: &StatusUpdate,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let (id, code) = ref_binds(reference);
        let query = format!(
            "UPDATE projects SET
                status = $3,
                mentor_feedback = $4,
                last_updated = $5
             WHERE {REF_MATCH} AND ($6::BIGINT IS NULL OR mentor_id = $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(code)
            .bind(update.status.as_str())
            .bind(&update.feedback)
            .bind(update.at)
            .bind(update.mentor_id)
            .fetch_optional(pool)
            .await
    }

    /// Set progress (and status when given) plus `last_updated`.
    pub async fn update_progress(
        pool: &PgPool,
        reference: ProjectRef,
        update: &ProgressUpdate,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let (id, code) = ref_binds(reference);
        let query = format!(
            "UPDATE projects SET
                progress_percentage = $3,
                status = COALESCE($4, status),
                last_updated = $5
             WHERE {REF_MATCH}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(code)
            .bind(update.progress_percentage)
            .bind(update.status.map(|s| s.as_str()))
            .bind(update.at)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was updated.
    pub async fn update_github_link(
        pool: &PgPool,
        id: DbId,
        link: &str,
        at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE projects SET github_link = $2, last_updated = $3 WHERE id = $1")
                .bind(id)
                .bind(link)
                .bind(at)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project. Messages and approval rows cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, reference: ProjectRef) -> Result<bool, sqlx::Error> {
        let (id, code) = ref_binds(reference);
        let query = format!("DELETE FROM projects WHERE {REF_MATCH}");
        let result = sqlx::query(&query).bind(id).bind(code).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
