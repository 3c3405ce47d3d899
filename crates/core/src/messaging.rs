//! Per-project message threads with role-scoped read tracking.
//!
//! A thread has exactly two parties, the project's student and its mentor.
//! Read state is tracked per role rather than per recipient: a message is
//! "unread" for the party whose role differs from `sender_type`. That is
//! exact for two-party threads and does not generalize beyond them.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::project_ref::ProjectRef;
use crate::roles::ParticipantRole;
use crate::store::{InboxMessage, MessageStore, NewMessage, ProjectStore, ThreadMessage};
use crate::types::{self, DbId};

/// Raw message fields as received from a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMessage {
    pub project_id: Option<ProjectRef>,
    pub sender_type: Option<String>,
    pub sender_id: Option<DbId>,
    pub message_text: Option<String>,
}

/// Outcome of posting a message.
///
/// Creating the row is the only step that can fail the call. If reading the
/// enriched row back fails, the caller still gets the new id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Posted {
    Enriched(ThreadMessage),
    Bare { message_id: DbId },
}

impl Posted {
    pub fn message_id(&self) -> DbId {
        match self {
            Self::Enriched(message) => message.message.id,
            Self::Bare { message_id } => *message_id,
        }
    }
}

/// Thread operations over an injected store.
pub struct MessageThreads<S> {
    store: S,
}

impl<S: ProjectStore + MessageStore> MessageThreads<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a message to a project's thread.
    pub async fn post(&self, input: PostMessage) -> CoreResult<Posted> {
        let text = input.message_text.filter(|t| !t.trim().is_empty());
        let sender_type = input.sender_type.filter(|s| !s.is_empty());
        let (Some(reference), Some(sender_type), Some(sender_id), Some(message_text)) =
            (input.project_id, sender_type, input.sender_id, text)
        else {
            return Err(CoreError::Validation(
                "Missing required fields: project_id, sender_type, sender_id and message_text \
                 are required"
                    .into(),
            ));
        };
        let sender_type = ParticipantRole::parse(&sender_type, "sender_type")?;

        let project = self
            .store
            .find_project(reference)
            .await?
            .ok_or_else(|| CoreError::not_found("Project", reference))?;

        let created = self
            .store
            .insert_message(&NewMessage {
                project_id: project.id,
                sender_type,
                sender_id,
                message_text,
                sent_at: types::now(),
            })
            .await?;

        tracing::info!(
            message_id = created.id,
            project_id = project.id,
            sender_type = %sender_type,
            sender_id,
            "Message posted"
        );

        match self.store.find_thread_message(created.id).await {
            Ok(Some(enriched)) => Ok(Posted::Enriched(enriched)),
            Ok(None) => {
                tracing::warn!(message_id = created.id, "Posted message vanished before read-back");
                Ok(Posted::Bare {
                    message_id: created.id,
                })
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    message_id = created.id,
                    "Could not load sender details for posted message"
                );
                Ok(Posted::Bare {
                    message_id: created.id,
                })
            }
        }
    }

    /// The project's thread in chronological order. An unknown project has
    /// an empty thread.
    pub async fn thread(&self, reference: ProjectRef) -> CoreResult<Vec<ThreadMessage>> {
        let Some(project) = self.store.find_project(reference).await? else {
            return Ok(Vec::new());
        };
        let mut messages = self.store.list_thread(project.id).await?;
        messages.sort_by_key(|m| (m.message.sent_at, m.message.id));
        tracing::debug!(project_id = project.id, count = messages.len(), "Loaded thread");
        Ok(messages)
    }

    /// Every message in the user's projects, most recent first.
    pub async fn inbox(&self, role: &str, user_id: DbId) -> CoreResult<Vec<InboxMessage>> {
        let role = ParticipantRole::parse(role, "user_type")?;
        let mut messages = self.store.list_for_participant(role, user_id).await?;
        messages.sort_by_key(|m| {
            std::cmp::Reverse((m.message.message.sent_at, m.message.message.id))
        });
        Ok(messages)
    }

    /// Messages from the other party the user has not read yet.
    pub async fn unread_count(&self, role: &str, user_id: DbId) -> CoreResult<i64> {
        let role = ParticipantRole::parse(role, "user_type")?;
        self.store.count_unread(role, user_id).await
    }

    /// Mark everything the other party sent in this thread as read.
    ///
    /// Returns the number of messages flipped. Calling it again right away
    /// returns 0. An unknown project also returns 0.
    pub async fn mark_read(&self, reference: ProjectRef, reader: &str) -> CoreResult<u64> {
        let reader = ParticipantRole::parse(reader, "reader_type")?;
        let Some(project) = self.store.find_project(reference).await? else {
            return Ok(0);
        };
        let count = self.store.mark_read(project.id, reader).await?;
        tracing::info!(project_id = project.id, reader = %reader, count, "Messages marked as read");
        Ok(count)
    }
}
