//! Message row models.
//!
//! `sender_type` is stored as text guarded by `ck_messages_sender_type`; the
//! conversions below parse it back into a `ParticipantRole`.

use mentorhub_core::error::CoreError;
use mentorhub_core::project_ref::ProjectCode;
use mentorhub_core::roles::ParticipantRole;
use mentorhub_core::store::{InboxMessage, Message, ThreadMessage};
use mentorhub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct MessageRow {
    pub id: DbId,
    pub project_id: DbId,
    pub sender_type: String,
    pub sender_id: DbId,
    pub message_text: String,
    pub sent_at: Timestamp,
    pub is_read: bool,
}

/// A message joined with the sender's display name.
#[derive(Debug, Clone, FromRow)]
pub struct ThreadMessageRow {
    #[sqlx(flatten)]
    pub message: MessageRow,
    pub sender_name: Option<String>,
}

/// A thread message joined with its project's code and title.
#[derive(Debug, Clone, FromRow)]
pub struct InboxMessageRow {
    #[sqlx(flatten)]
    pub message: ThreadMessageRow,
    pub project_code: String,
    pub project_title: String,
}

impl TryFrom<MessageRow> for Message {
    type Error = CoreError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let sender_type = ParticipantRole::parse(&row.sender_type, "sender_type")
            .map_err(|e| CoreError::Internal(format!("message {} is corrupt: {e}", row.id)))?;
        Ok(Message {
            id: row.id,
            project_id: row.project_id,
            sender_type,
            sender_id: row.sender_id,
            message_text: row.message_text,
            sent_at: row.sent_at,
            is_read: row.is_read,
        })
    }
}

impl TryFrom<ThreadMessageRow> for ThreadMessage {
    type Error = CoreError;

    fn try_from(row: ThreadMessageRow) -> Result<Self, Self::Error> {
        Ok(ThreadMessage {
            message: row.message.try_into()?,
            sender_name: row.sender_name,
        })
    }
}

impl TryFrom<InboxMessageRow> for InboxMessage {
    type Error = CoreError;

    fn try_from(row: InboxMessageRow) -> Result<Self, Self::Error> {
        let project_code = ProjectCode::parse(&row.project_code)
            .map_err(|e| CoreError::Internal(format!("joined project is corrupt: {e}")))?;
        Ok(InboxMessage {
            message: row.message.try_into()?,
            project_code,
            project_title: row.project_title,
        })
    }
}
