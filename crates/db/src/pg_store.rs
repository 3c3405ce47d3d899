//! PostgreSQL adapter for the core store ports.

use async_trait::async_trait;
use mentorhub_core::error::CoreResult;
use mentorhub_core::project_ref::ProjectRef;
use mentorhub_core::roles::ParticipantRole;
use mentorhub_core::store::{
    InboxMessage, Message, MessageStore, NewApproval, NewMessage, NewProject, ProgressUpdate,
    Project, ProjectApproval, ProjectStore, StatusUpdate, ThreadMessage,
};
use mentorhub_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::repositories::{ApprovalRepo, MessageRepo, ProjectRepo};
use crate::store_error;

/// Store handle over a shared pool. Cheap to clone; handlers build one per
/// request from the application state.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn max_project_number(&self) -> CoreResult<Option<i64>> {
        ProjectRepo::max_code_number(&self.pool)
            .await
            .map_err(store_error)
    }

    async fn insert_project(&self, input: &NewProject) -> CoreResult<Project> {
        ProjectRepo::create(&self.pool, input)
            .await
            .map_err(store_error)?
            .try_into()
    }

    async fn find_project(&self, reference: ProjectRef) -> CoreResult<Option<Project>> {
        ProjectRepo::find(&self.pool, reference)
            .await
            .map_err(store_error)?
            .map(Project::try_from)
            .transpose()
    }

    async fn update_status(
        &self,
        reference: ProjectRef,
        update: &StatusUpdate,
    ) -> CoreResult<Option<Project>> {
        ProjectRepo::update_status(&self.pool, reference, update)
            .await
            .map_err(store_error)?
            .map(Project::try_from)
            .transpose()
    }

    async fn update_progress(
        &self,
        reference: ProjectRef,
        update: &ProgressUpdate,
    ) -> CoreResult<Option<Project>> {
        ProjectRepo::update_progress(&self.pool, reference, update)
            .await
            .map_err(store_error)?
            .map(Project::try_from)
            .transpose()
    }

    async fn update_github_link(&self, id: DbId, link: &str, at: Timestamp) -> CoreResult<bool> {
        ProjectRepo::update_github_link(&self.pool, id, link, at)
            .await
            .map_err(store_error)
    }

    async fn delete_project(&self, reference: ProjectRef) -> CoreResult<bool> {
        ProjectRepo::delete(&self.pool, reference)
            .await
            .map_err(store_error)
    }

    async fn insert_approval(&self, input: &NewApproval) -> CoreResult<ProjectApproval> {
        ApprovalRepo::create(&self.pool, input)
            .await
            .map(ProjectApproval::from)
            .map_err(store_error)
    }

    async fn list_approvals(&self, project_id: DbId) -> CoreResult<Vec<ProjectApproval>> {
        let rows = ApprovalRepo::list_by_project(&self.pool, project_id)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(ProjectApproval::from).collect())
    }
}

#[async_trait]
impl MessageStore for PgStore {
    async fn insert_message(&self, input: &NewMessage) -> CoreResult<Message> {
        MessageRepo::create(&self.pool, input)
            .await
            .map_err(store_error)?
            .try_into()
    }

    async fn find_thread_message(&self, id: DbId) -> CoreResult<Option<ThreadMessage>> {
        MessageRepo::find_with_sender(&self.pool, id)
            .await
            .map_err(store_error)?
            .map(ThreadMessage::try_from)
            .transpose()
    }

    async fn list_thread(&self, project_id: DbId) -> CoreResult<Vec<ThreadMessage>> {
        MessageRepo::list_by_project(&self.pool, project_id)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(ThreadMessage::try_from)
            .collect()
    }

    async fn list_for_participant(
        &self,
        role: ParticipantRole,
        user_id: DbId,
    ) -> CoreResult<Vec<InboxMessage>> {
        MessageRepo::list_for_participant(&self.pool, role, user_id)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(InboxMessage::try_from)
            .collect()
    }

    async fn count_unread(&self, role: ParticipantRole, user_id: DbId) -> CoreResult<i64> {
        MessageRepo::count_unread(&self.pool, role, user_id)
            .await
            .map_err(store_error)
    }

    async fn mark_read(&self, project_id: DbId, reader: ParticipantRole) -> CoreResult<u64> {
        MessageRepo::mark_read(&self.pool, project_id, reader)
            .await
            .map_err(store_error)
    }
}
