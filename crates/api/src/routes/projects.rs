//! Route definitions for the `/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{messages, projects};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                           -> list
/// POST   /                           -> propose
/// GET    /student/{student_id}       -> list_by_student
/// GET    /mentor/{mentor_id}         -> list_by_mentor
/// GET    /{ref}                      -> get_by_ref
/// DELETE /{ref}                      -> delete
/// PUT    /{ref}/status               -> set_status
/// PUT    /{ref}/progress             -> set_progress
/// GET    /{ref}/approvals            -> approvals
/// GET    /{ref}/messages             -> messages::list_by_project
/// POST   /{ref}/messages             -> messages::create_in_project
/// PUT    /{ref}/messages/read        -> messages::mark_project_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::propose))
        .route("/student/{student_id}", get(projects::list_by_student))
        .route("/mentor/{mentor_id}", get(projects::list_by_mentor))
        .route("/{ref}", get(projects::get_by_ref).delete(projects::delete))
        .route("/{ref}/status", put(projects::set_status))
        .route("/{ref}/progress", put(projects::set_progress))
        .route("/{ref}/approvals", get(projects::approvals))
        .route(
            "/{ref}/messages",
            get(messages::list_by_project).post(messages::create_in_project),
        )
        .route("/{ref}/messages/read", put(messages::mark_project_read))
}
