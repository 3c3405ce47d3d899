//! Shared response bodies for API handlers.

use mentorhub_core::project_ref::ProjectCode;
use mentorhub_core::store::ThreadMessage;
use mentorhub_core::types::{DbId, Timestamp};
use serde::Serialize;

/// `{ "message": ... }` confirmation for deletes and simple updates.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a successful project submission.
#[derive(Debug, Serialize)]
pub struct ProjectCreated {
    pub message: &'static str,
    pub project_code: ProjectCode,
    pub id: DbId,
}

/// Body of a status change.
#[derive(Debug, Serialize)]
pub struct StatusUpdated {
    pub message: String,
    pub status: String,
    pub updated_at: Timestamp,
}

/// Body of an update that only reports when it happened.
#[derive(Debug, Serialize)]
pub struct Updated {
    pub message: &'static str,
    pub updated_at: Timestamp,
}

/// Body of a posted message. `data` is absent when the sender lookup after
/// the insert did not succeed; `message_id` is always present.
#[derive(Debug, Serialize)]
pub struct MessagePosted {
    pub message: &'static str,
    pub message_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ThreadMessage>,
}

/// Body of a mark-read call.
#[derive(Debug, Serialize)]
pub struct MarkedRead {
    pub message: &'static str,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub unread_count: i64,
}

/// Successful login: a confirmation plus the account profile.
#[derive(Debug, Serialize)]
pub struct LoginResponse<T: Serialize> {
    pub message: &'static str,
    pub role: &'static str,
    #[serde(flatten)]
    pub profile: T,
}
