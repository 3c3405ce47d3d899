//! Repository for the `messages` table.

use mentorhub_core::roles::ParticipantRole;
use mentorhub_core::store::NewMessage;
use mentorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{InboxMessageRow, MessageRow, ThreadMessageRow};

const COLUMNS: &str = "id, project_id, sender_type, sender_id, message_text, sent_at, is_read";

/// Message columns plus the sender's display name. `sender_id` is resolved
/// against the table selected by `sender_type`; expects the `msg` alias.
const THREAD_COLUMNS: &str = "msg.id, msg.project_id, msg.sender_type, msg.sender_id, \
     msg.message_text, msg.sent_at, msg.is_read, \
     COALESCE(s.name, m.name) AS sender_name";

const THREAD_FROM: &str = "messages msg \
     LEFT JOIN students s ON msg.sender_type = 'student' AND s.id = msg.sender_id \
     LEFT JOIN mentors m ON msg.sender_type = 'mentor' AND m.id = msg.sender_id";

/// Project column that identifies a participant in the given role.
fn participant_column(role: ParticipantRole) -> &'static str {
    match role {
        ParticipantRole::Student => "p.student_id",
        ParticipantRole::Mentor => "p.mentor_id",
    }
}

/// Provides queries for project message threads.
pub struct MessageRepo;

impl MessageRepo {
    /// Insert an unread message, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewMessage) -> Result<MessageRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (project_id, sender_type, sender_id, message_text, sent_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MessageRow>(&query)
            .bind(input.project_id)
            .bind(input.sender_type.as_str())
            .bind(input.sender_id)
            .bind(&input.message_text)
            .bind(input.sent_at)
            .fetch_one(pool)
            .await
    }

    /// Fetch one message with its sender name.
    pub async fn find_with_sender(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ThreadMessageRow>, sqlx::Error> {
        let query = format!("SELECT {THREAD_COLUMNS} FROM {THREAD_FROM} WHERE msg.id = $1");
        sqlx::query_as::<_, ThreadMessageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Messages of one project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ThreadMessageRow>, sqlx::Error> {
        let query = format!(
            "SELECT {THREAD_COLUMNS} FROM {THREAD_FROM}
             WHERE msg.project_id = $1
             ORDER BY msg.sent_at ASC, msg.id ASC"
        );
        sqlx::query_as::<_, ThreadMessageRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Messages across every project the user participates in, newest first.
    pub async fn list_for_participant(
        pool: &PgPool,
        role: ParticipantRole,
        user_id: DbId,
    ) -> Result<Vec<InboxMessageRow>, sqlx::Error> {
        let query = format!(
            "SELECT {THREAD_COLUMNS}, p.project_code, p.title AS project_title
             FROM {THREAD_FROM}
             JOIN projects p ON p.id = msg.project_id
             WHERE {} = $1
             ORDER BY msg.sent_at DESC, msg.id DESC",
            participant_column(role)
        );
        sqlx::query_as::<_, InboxMessageRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Unread messages sent by the other party across the user's projects.
    pub async fn count_unread(
        pool: &PgPool,
        role: ParticipantRole,
        user_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM messages msg
             JOIN projects p ON p.id = msg.project_id
             WHERE {} = $1 AND msg.sender_type <> $2 AND msg.is_read = FALSE",
            participant_column(role)
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(user_id)
            .bind(role.as_str())
            .fetch_one(pool)
            .await
    }

    /// Mark every unread message of the project not sent by `reader` as read.
    /// Returns the number of rows changed.
    pub async fn mark_read(
        pool: &PgPool,
        project_id: DbId,
        reader: ParticipantRole,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = TRUE
             WHERE project_id = $1 AND sender_type <> $2 AND is_read = FALSE",
        )
        .bind(project_id)
        .bind(reader.as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
