//! HTTP-level tests for project submission, status, progress, github links
//! and deletion.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_mentor, create_student, delete, get, post_json, put_json,
    submit_project,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn student_submission_is_submitted_with_next_code(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", mentor).await;

    let (_, first_code) = submit_project(&pool, "Compiler", student, mentor).await;
    assert_eq!(first_code, "PRJ1001");

    let (id, code) = submit_project(&pool, "X", student, mentor).await;
    assert_eq!(code, "PRJ1002");

    let response = get(build_test_app(pool), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "Submitted");
    assert_eq!(json["title"], "X");
    assert_eq!(json["progress_percentage"], 0);
    assert_eq!(json["student_name"], "Alan");
    assert_eq!(json["mentor_name"], "Grace");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn proposal_is_pending(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", mentor).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        json!({"title": "Linker", "student_id": student, "mentor_id": mentor}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["message"], "Project created successfully");

    let code = created["project_code"].as_str().unwrap();
    let json = body_json(get(build_test_app(pool), &format!("/api/v1/projects/{code}")).await).await;
    assert_eq!(json["status"], "Pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submission_without_title_is_rejected(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", mentor).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/student/projects",
        json!({"title": "   ", "student_id": student, "mentor_id": mentor}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let list = body_json(get(build_test_app(pool), "/api/v1/projects").await).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_body_is_a_json_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/projects",
        json!({"title": "X", "student_id": "not-a-number"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_project_is_404_and_bad_reference_is_400(pool: PgPool) {
    let response = get(build_test_app(pool.clone()), "/api/v1/projects/PRJ4242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(build_test_app(pool), "/api/v1/projects/nonsense").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn mentor_approval_records_feedback_and_audit(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", mentor).await;
    let (id, _) = submit_project(&pool, "X", student, mentor).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/faculty/projects/{id}/status"),
        json!({"mentor_id": mentor, "status": "Approved", "feedback": "Good work"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "Approved");
    assert_eq!(json["message"], "Project approved successfully");
    assert!(json["updated_at"].is_string());

    let project = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(project["status"], "Approved");
    assert_eq!(project["mentor_feedback"], "Good work");

    let approvals = body_json(
        get(build_test_app(pool), &format!("/api/v1/projects/{id}/approvals")).await,
    )
    .await;
    let approvals = approvals.as_array().unwrap();
    assert_eq!(approvals.len(), 1);
    assert_eq!(approvals[0]["project_id"], id);
    assert_eq!(approvals[0]["mentor_id"], mentor);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_status_leaves_project_unchanged(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", mentor).await;
    let (id, code) = submit_project(&pool, "X", student, mentor).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/projects/{code}/status"),
        json!({"status": "Done"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let project = body_json(get(build_test_app(pool), &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(project["status"], "Submitted");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn faculty_status_requires_mentor_and_ownership(pool: PgPool) {
    let owner = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let other = create_mentor(&pool, "Barbara", "barbara@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", owner).await;
    let (id, _) = submit_project(&pool, "X", student, owner).await;
    let uri = format!("/api/v1/faculty/projects/{id}/status");

    let response = put_json(build_test_app(pool.clone()), &uri, json!({"status": "Rejected"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        build_test_app(pool),
        &uri,
        json!({"mentor_id": other, "status": "Rejected"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn progress_bounds_are_enforced(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", mentor).await;
    let (id, _) = submit_project(&pool, "X", student, mentor).await;
    let uri = format!("/api/v1/projects/{id}/progress");

    for bad in [-1, 101] {
        let response = put_json(
            build_test_app(pool.clone()),
            &uri,
            json!({"progress_percentage": bad}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "progress {bad}");
    }

    for good in [0, 100] {
        let response = put_json(
            build_test_app(pool.clone()),
            &uri,
            json!({"progress_percentage": good}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "progress {good}");
    }

    let response = put_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"progress_percentage": 50, "status": "In Progress"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let project = body_json(get(build_test_app(pool), &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(project["progress_percentage"], 50);
    assert_eq!(project["status"], "In Progress");
}

// ---------------------------------------------------------------------------
// GitHub links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn only_the_owner_may_change_the_github_link(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let owner = create_student(&pool, "Alan", "alan@student.test", mentor).await;
    let stranger = create_student(&pool, "Eve", "eve@student.test", mentor).await;
    let (id, _) = submit_project(&pool, "X", owner, mentor).await;
    let uri = format!("/api/v1/student/projects/{id}/github");

    let before = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/projects/{id}")).await).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"github_link": "https://git.test/eve", "student_id": stranger}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"github_link": "https://git.test/alan", "student_id": owner}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "GitHub link updated successfully"
    );

    let after = body_json(get(build_test_app(pool), &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(after["github_link"], "https://git.test/alan");
    let before_ts: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(before["last_updated"].clone()).unwrap();
    let after_ts: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(after["last_updated"].clone()).unwrap();
    assert!(after_ts > before_ts);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn github_link_validation_and_admin_path(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let owner = create_student(&pool, "Alan", "alan@student.test", mentor).await;
    let (_, code) = submit_project(&pool, "X", owner, mentor).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/student/projects/{code}/github"),
        json!({"github_link": "", "student_id": owner}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/student/projects/{code}/github"),
        json!({"github_link": "https://git.test/alan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/projects/{code}/github"),
        json!({"github_link": "https://git.test/admin"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(
        build_test_app(pool),
        "/api/v1/admin/projects/PRJ9999/github",
        json!({"github_link": "https://git.test/none"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing and deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn listings_are_scoped(pool: PgPool) {
    let grace = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let barbara = create_mentor(&pool, "Barbara", "barbara@faculty.test").await;
    let alan = create_student(&pool, "Alan", "alan@student.test", grace).await;
    let ada = create_student(&pool, "Ada", "ada@student.test", barbara).await;
    submit_project(&pool, "Compiler", alan, grace).await;
    submit_project(&pool, "Engine", ada, barbara).await;

    let all = body_json(get(build_test_app(pool.clone()), "/api/v1/admin/projects").await).await;
    let codes: Vec<_> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["project_code"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(codes, ["PRJ1001", "PRJ1002"]);

    let mine = body_json(
        get(build_test_app(pool.clone()), &format!("/api/v1/projects/student/{ada}")).await,
    )
    .await;
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["title"], "Engine");

    let mentored = body_json(
        get(build_test_app(pool), &format!("/api/v1/faculty/{grace}/projects")).await,
    )
    .await;
    assert_eq!(mentored.as_array().unwrap().len(), 1);
    assert_eq!(mentored[0]["student_email"], "alan@student.test");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_project_once(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", mentor).await;
    let (_, code) = submit_project(&pool, "X", student, mentor).await;
    let uri = format!("/api/v1/admin/projects/{code}");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Project deleted successfully");

    let response = delete(build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Response timestamps
// ---------------------------------------------------------------------------

fn timestamp(value: &serde_json::Value) -> chrono::DateTime<chrono::Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reported_updated_at_matches_stored_rows(pool: PgPool) {
    let mentor = create_mentor(&pool, "Grace", "grace@faculty.test").await;
    let student = create_student(&pool, "Alan", "alan@student.test", mentor).await;
    let (id, _) = submit_project(&pool, "X", student, mentor).await;

    let approved = body_json(
        put_json(
            build_test_app(pool.clone()),
            &format!("/api/v1/faculty/projects/{id}/status"),
            json!({"mentor_id": mentor, "status": "Approved"}),
        )
        .await,
    )
    .await;
    let project = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/projects/{id}")).await).await;
    let approvals = body_json(
        get(build_test_app(pool.clone()), &format!("/api/v1/projects/{id}/approvals")).await,
    )
    .await;
    assert_eq!(timestamp(&approved["updated_at"]), timestamp(&project["last_updated"]));
    assert_eq!(timestamp(&approved["updated_at"]), timestamp(&approvals[0]["approval_date"]));

    let linked = body_json(
        put_json(
            build_test_app(pool.clone()),
            &format!("/api/v1/student/projects/{id}/github"),
            json!({"github_link": "https://git.test/alan", "student_id": student}),
        )
        .await,
    )
    .await;
    let project = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(timestamp(&linked["updated_at"]), timestamp(&project["last_updated"]));

    let progressed = body_json(
        put_json(
            build_test_app(pool.clone()),
            &format!("/api/v1/projects/{id}/progress"),
            json!({"progress_percentage": 30}),
        )
        .await,
    )
    .await;
    let project = body_json(get(build_test_app(pool), &format!("/api/v1/projects/{id}")).await).await;
    assert_eq!(timestamp(&progressed["updated_at"]), timestamp(&project["last_updated"]));
}
