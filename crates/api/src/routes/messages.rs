//! Route definitions for the `/messages` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// POST   /                           -> create
/// GET    /project/{ref}              -> list_by_project
/// GET    /user/{role}/{user_id}      -> list_by_user
/// GET    /unread/{role}/{user_id}    -> unread_count
/// PUT    /read                       -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(messages::create))
        .route("/project/{ref}", get(messages::list_by_project))
        .route("/user/{role}/{user_id}", get(messages::list_by_user))
        .route("/unread/{role}/{user_id}", get(messages::unread_count))
        .route("/read", put(messages::mark_read))
}
