//! Repository for the `project_approvals` audit table.

use mentorhub_core::store::NewApproval;
use mentorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::approval::ApprovalRow;

const COLUMNS: &str = "id, project_id, mentor_id, approval_date, comments";

/// Append-only access to approval audit rows.
pub struct ApprovalRepo;

impl ApprovalRepo {
    pub async fn create(pool: &PgPool, input: &NewApproval) -> Result<ApprovalRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_approvals (project_id, mentor_id, approval_date, comments)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApprovalRow>(&query)
            .bind(input.project_id)
            .bind(input.mentor_id)
            .bind(input.approval_date)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
    }

    /// Approval rows for a project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ApprovalRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_approvals
             WHERE project_id = $1
             ORDER BY approval_date DESC, id DESC"
        );
        sqlx::query_as::<_, ApprovalRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
