//! Store ports consumed by the managers, and the records they exchange.
//!
//! The managers never hold state between calls: every operation reads and
//! writes through one of these traits. `mentorhub_db::PgStore` implements
//! them over PostgreSQL; the core's own tests use an in-memory store.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreResult;
use crate::project_ref::{ProjectCode, ProjectRef};
use crate::project_status::ProjectStatus;
use crate::roles::ParticipantRole;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A project as the lifecycle manager sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_code: ProjectCode,
    pub title: String,
    pub description: Option<String>,
    pub student_id: DbId,
    pub mentor_id: DbId,
    pub status: ProjectStatus,
    pub progress_percentage: i32,
    pub mentor_feedback: Option<String>,
    pub github_link: Option<String>,
    pub submission_date: Timestamp,
    pub last_updated: Timestamp,
}

/// Insert payload for a project. The code is allocated by the manager.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub project_code: ProjectCode,
    pub title: String,
    pub description: Option<String>,
    pub student_id: DbId,
    pub mentor_id: DbId,
    pub status: ProjectStatus,
    pub github_link: Option<String>,
    pub created_at: Timestamp,
}

/// Status transition applied in a single row update.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: ProjectStatus,
    pub feedback: Option<String>,
    /// When set, only a project assigned to this mentor matches.
    pub mentor_id: Option<DbId>,
    pub at: Timestamp,
}

/// Progress change, optionally carrying a status change.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub progress_percentage: i32,
    pub status: Option<ProjectStatus>,
    pub at: Timestamp,
}

/// Append-only audit row written when a project is approved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectApproval {
    pub id: DbId,
    pub project_id: DbId,
    pub mentor_id: DbId,
    pub approval_date: Timestamp,
    pub comments: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewApproval {
    pub project_id: DbId,
    pub mentor_id: DbId,
    pub approval_date: Timestamp,
    pub comments: Option<String>,
}

/// A stored message, without display enrichment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: DbId,
    pub project_id: DbId,
    pub sender_type: ParticipantRole,
    pub sender_id: DbId,
    pub message_text: String,
    pub sent_at: Timestamp,
    pub is_read: bool,
}

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub project_id: DbId,
    pub sender_type: ParticipantRole,
    pub sender_id: DbId,
    pub message_text: String,
    pub sent_at: Timestamp,
}

/// A message with its sender's display name resolved against the student or
/// mentor table, depending on `sender_type`. The name is `None` when the
/// sender no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadMessage {
    #[serde(flatten)]
    pub message: Message,
    pub sender_name: Option<String>,
}

/// A thread message annotated with the project it belongs to, for inbox views
/// that span projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InboxMessage {
    #[serde(flatten)]
    pub message: ThreadMessage,
    pub project_code: ProjectCode,
    pub project_title: String,
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Persistence contract for projects and their approval audit trail.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Highest numeric suffix among existing project codes.
    async fn max_project_number(&self) -> CoreResult<Option<i64>>;

    async fn insert_project(&self, input: &NewProject) -> CoreResult<Project>;

    /// Resolve a reference (id or code). Returns `None` when nothing matches.
    async fn find_project(&self, reference: ProjectRef) -> CoreResult<Option<Project>>;

    /// Apply a status change and stamp `last_updated`. Returns the updated
    /// project, or `None` when no row matched (including a mentor mismatch).
    async fn update_status(
        &self,
        reference: ProjectRef,
        update: &StatusUpdate,
    ) -> CoreResult<Option<Project>>;

    async fn update_progress(
        &self,
        reference: ProjectRef,
        update: &ProgressUpdate,
    ) -> CoreResult<Option<Project>>;

    /// Returns `true` if a row was updated.
    async fn update_github_link(&self, id: DbId, link: &str, at: Timestamp) -> CoreResult<bool>;

    /// Returns `true` if a row was deleted.
    async fn delete_project(&self, reference: ProjectRef) -> CoreResult<bool>;

    async fn insert_approval(&self, input: &NewApproval) -> CoreResult<ProjectApproval>;

    /// Approval rows for a project, newest first.
    async fn list_approvals(&self, project_id: DbId) -> CoreResult<Vec<ProjectApproval>>;
}

/// Persistence contract for project message threads.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert_message(&self, input: &NewMessage) -> CoreResult<Message>;

    /// Fetch one message with its sender name resolved.
    async fn find_thread_message(&self, id: DbId) -> CoreResult<Option<ThreadMessage>>;

    /// All messages of a project with sender names resolved.
    async fn list_thread(&self, project_id: DbId) -> CoreResult<Vec<ThreadMessage>>;

    /// All messages of every project where the user is the owning student
    /// (`role == Student`) or the assigned mentor (`role == Mentor`).
    async fn list_for_participant(
        &self,
        role: ParticipantRole,
        user_id: DbId,
    ) -> CoreResult<Vec<InboxMessage>>;

    /// Unread messages sent by the other party across the user's projects.
    async fn count_unread(&self, role: ParticipantRole, user_id: DbId) -> CoreResult<i64>;

    /// Flip `is_read` on every unread message of the project whose sender
    /// type differs from `reader`. Returns the number of rows changed.
    async fn mark_read(&self, project_id: DbId, reader: ParticipantRole) -> CoreResult<u64>;
}
