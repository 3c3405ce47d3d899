//! Route definitions for the `/student` group.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{auth, projects, students};
use crate::state::AppState;

/// Routes mounted at `/student`.
///
/// ```text
/// GET    /                           -> list
/// POST   /                           -> create
/// POST   /login                      -> student_login
/// POST   /projects                   -> student_submit
/// PUT    /projects/{ref}/github      -> student_update_github
/// GET    /mentor/{mentor_id}         -> list_by_mentor
/// GET    /{id}                       -> get_by_id
/// PUT    /{id}                       -> update
/// DELETE /{id}                       -> delete
/// PUT    /{id}/github                -> update_github
/// GET    /{id}/projects              -> projects
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(students::list).post(students::create))
        .route("/login", post(auth::student_login))
        .route("/projects", post(projects::student_submit))
        .route(
            "/projects/{ref}/github",
            put(projects::student_update_github),
        )
        .route("/mentor/{mentor_id}", get(students::list_by_mentor))
        .route(
            "/{id}",
            get(students::get_by_id)
                .put(students::update)
                .delete(students::delete),
        )
        .route("/{id}/github", put(students::update_github))
        .route("/{id}/projects", get(students::projects))
}
