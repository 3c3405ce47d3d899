//! Approval audit row model.

use mentorhub_core::store::ProjectApproval;
use mentorhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `project_approvals` table.
#[derive(Debug, Clone, FromRow)]
pub struct ApprovalRow {
    pub id: DbId,
    pub project_id: DbId,
    pub mentor_id: DbId,
    pub approval_date: Timestamp,
    pub comments: Option<String>,
}

impl From<ApprovalRow> for ProjectApproval {
    fn from(row: ApprovalRow) -> Self {
        ProjectApproval {
            id: row.id,
            project_id: row.project_id,
            mentor_id: row.mentor_id,
            approval_date: row.approval_date,
            comments: row.comments,
        }
    }
}
