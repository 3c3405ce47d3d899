//! Route definitions for the `/faculty` group (mentors).

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{auth, mentors, projects, students};
use crate::state::AppState;

/// Routes mounted at `/faculty`.
///
/// ```text
/// GET    /                           -> list
/// POST   /                           -> create
/// POST   /login                      -> faculty_login
/// PUT    /projects/{ref}/status      -> faculty_set_status
/// GET    /{id}                       -> get_by_id
/// PUT    /{id}                       -> update
/// DELETE /{id}                       -> delete
/// GET    /{id}/students              -> students::list_by_mentor
/// GET    /{id}/projects              -> projects::list_by_mentor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mentors::list).post(mentors::create))
        .route("/login", post(auth::faculty_login))
        .route(
            "/projects/{ref}/status",
            put(projects::faculty_set_status),
        )
        .route(
            "/{id}",
            get(mentors::get_by_id)
                .put(mentors::update)
                .delete(mentors::delete),
        )
        .route("/{id}/students", get(students::list_by_mentor))
        .route("/{id}/projects", get(projects::list_by_mentor))
}
