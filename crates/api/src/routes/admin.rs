//! Route definitions for the `/admin` group.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{admins, auth, mentors, projects, students};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /                                 -> admins::list
/// POST   /                                 -> admins::create
/// POST   /login                            -> admin_login
/// GET    /students                         -> students::list
/// POST   /students                         -> students::create
/// DELETE /students/{id}                    -> students::delete
/// GET    /mentors                          -> mentors::list
/// POST   /mentors                          -> mentors::create
/// DELETE /mentors/{id}                     -> mentors::delete
/// GET    /projects                         -> projects::list
/// DELETE /projects/{ref}                   -> projects::delete
/// PUT    /projects/{ref}/github            -> admin_update_github
/// PUT    /assign-mentor                    -> assign_mentor
/// PUT    /reset-student-password/{id}      -> students::reset_password
/// PUT    /reset-mentor-password/{id}       -> mentors::reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admins::list).post(admins::create))
        .route("/login", post(auth::admin_login))
        .route("/students", get(students::list).post(students::create))
        .route("/students/{id}", delete(students::delete))
        .route("/mentors", get(mentors::list).post(mentors::create))
        .route("/mentors/{id}", delete(mentors::delete))
        .route("/projects", get(projects::list))
        .route("/projects/{ref}", delete(projects::delete))
        .route("/projects/{ref}/github", put(projects::admin_update_github))
        .route("/assign-mentor", put(students::assign_mentor))
        .route(
            "/reset-student-password/{id}",
            put(students::reset_password),
        )
        .route("/reset-mentor-password/{id}", put(mentors::reset_password))
}
