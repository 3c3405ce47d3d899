//! Handlers for `/messages` and the `/projects/{ref}/messages` routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use mentorhub_core::messaging::{PostMessage, Posted};
use mentorhub_core::project_ref::ProjectRef;
use mentorhub_core::store::{InboxMessage, ThreadMessage};
use mentorhub_core::types::DbId;
use serde::Deserialize;

use super::{project_ref, required};
use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::{MarkedRead, MessagePosted, UnreadCount};
use crate::state::AppState;

/// Body of `PUT /messages/read`. `reader_id` is required but does not narrow
/// the update: read state is tracked per role.
#[derive(Debug, Deserialize)]
pub struct MarkReadBody {
    pub project_id: Option<ProjectRef>,
    pub reader_type: Option<String>,
    pub reader_id: Option<DbId>,
}

/// Body of `PUT /projects/{ref}/messages/read`.
#[derive(Debug, Deserialize)]
pub struct ReaderBody {
    pub reader_type: Option<String>,
}

/// Body of `POST /projects/{ref}/messages`; the project comes from the path.
#[derive(Debug, Deserialize)]
pub struct ThreadPostBody {
    pub sender_type: Option<String>,
    pub sender_id: Option<DbId>,
    pub message_text: Option<String>,
}

async fn post_message(
    state: &AppState,
    input: PostMessage,
) -> AppResult<(StatusCode, Json<MessagePosted>)> {
    let posted = state.threads().post(input).await?;
    let message_id = posted.message_id();
    let data = match posted {
        Posted::Enriched(message) => Some(message),
        Posted::Bare { .. } => None,
    };
    Ok((
        StatusCode::CREATED,
        Json(MessagePosted {
            message: "Message sent successfully",
            message_id,
            data,
        }),
    ))
}

/// POST /api/v1/messages
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<PostMessage>,
) -> AppResult<(StatusCode, Json<MessagePosted>)> {
    post_message(&state, input).await
}

/// POST /api/v1/projects/{ref}/messages
pub async fn create_in_project(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
    ApiJson(input): ApiJson<ThreadPostBody>,
) -> AppResult<(StatusCode, Json<MessagePosted>)> {
    let input = PostMessage {
        project_id: Some(project_ref(&raw)?),
        sender_type: input.sender_type,
        sender_id: input.sender_id,
        message_text: input.message_text,
    };
    post_message(&state, input).await
}

/// GET /api/v1/messages/project/{ref}
/// GET /api/v1/projects/{ref}/messages
pub async fn list_by_project(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> AppResult<Json<Vec<ThreadMessage>>> {
    let reference = project_ref(&raw)?;
    Ok(Json(state.threads().thread(reference).await?))
}

/// GET /api/v1/messages/user/{role}/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    ApiPath((role, user_id)): ApiPath<(String, DbId)>,
) -> AppResult<Json<Vec<InboxMessage>>> {
    Ok(Json(state.threads().inbox(&role, user_id).await?))
}

/// GET /api/v1/messages/unread/{role}/{user_id}
pub async fn unread_count(
    State(state): State<AppState>,
    ApiPath((role, user_id)): ApiPath<(String, DbId)>,
) -> AppResult<Json<UnreadCount>> {
    let unread_count = state.threads().unread_count(&role, user_id).await?;
    Ok(Json(UnreadCount { unread_count }))
}

/// PUT /api/v1/messages/read
pub async fn mark_read(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MarkReadBody>,
) -> AppResult<Json<MarkedRead>> {
    let reference = required(input.project_id, "project_id")?;
    let reader_type = required(input.reader_type, "reader_type")?;
    required(input.reader_id, "reader_id")?;
    let count = state.threads().mark_read(reference, &reader_type).await?;
    Ok(Json(MarkedRead {
        message: "Messages marked as read",
        count,
    }))
}

/// PUT /api/v1/projects/{ref}/messages/read
pub async fn mark_project_read(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
    ApiJson(input): ApiJson<ReaderBody>,
) -> AppResult<Json<MarkedRead>> {
    let reference = project_ref(&raw)?;
    let reader_type = required(input.reader_type, "reader_type")?;
    let count = state.threads().mark_read(reference, &reader_type).await?;
    Ok(Json(MarkedRead {
        message: "Messages marked as read",
        count,
    }))
}
