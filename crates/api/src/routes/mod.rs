pub mod admin;
pub mod faculty;
pub mod health;
pub mod messages;
pub mod projects;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (`{ref}` is a numeric project id or a `PRJ<n>` code):
///
/// ```text
/// /student                                   list, create
/// /student/login                             login by email (POST)
/// /student/projects                          submit project (POST, status Submitted)
/// /student/projects/{ref}/github             update project link, owner only (PUT)
/// /student/mentor/{mentor_id}                students of a mentor
/// /student/{id}                              get, update, delete
/// /student/{id}/github                       update profile link (PUT)
/// /student/{id}/projects                     the student's projects
///
/// /faculty                                   list, create
/// /faculty/login                             login by email (POST)
/// /faculty/projects/{ref}/status             set status, scoped to mentor_id (PUT)
/// /faculty/{id}                              get, update, delete
/// /faculty/{id}/students                     the mentor's students with their project
/// /faculty/{id}/projects                     the mentor's projects
///
/// /admin                                     list, create admins
/// /admin/login                               login by username (POST)
/// /admin/students                            list, create
/// /admin/students/{id}                       delete
/// /admin/mentors                             list, create
/// /admin/mentors/{id}                        delete
/// /admin/projects                            list with names and emails
/// /admin/projects/{ref}                      delete
/// /admin/projects/{ref}/github               update project link (PUT)
/// /admin/assign-mentor                       assign a mentor to a student (PUT)
/// /admin/reset-student-password/{id}         (PUT)
/// /admin/reset-mentor-password/{id}          (PUT)
///
/// /projects                                  list, propose (status Pending)
/// /projects/student/{student_id}             projects of a student
/// /projects/mentor/{mentor_id}               projects of a mentor
/// /projects/{ref}                            get, delete
/// /projects/{ref}/status                     set status (PUT)
/// /projects/{ref}/progress                   set progress (PUT)
/// /projects/{ref}/approvals                  approval audit trail
/// /projects/{ref}/messages                   thread, post
/// /projects/{ref}/messages/read              mark read for a role (PUT)
///
/// /messages                                  post (POST)
/// /messages/project/{ref}                    thread
/// /messages/user/{role}/{user_id}            inbox across projects
/// /messages/unread/{role}/{user_id}          unread count
/// /messages/read                             mark read for a role (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/student", student::router())
        .nest("/faculty", faculty::router())
        .nest("/admin", admin::router())
        .nest("/projects", projects::router())
        .nest("/messages", messages::router())
}
