//! Shared fixtures for the database integration tests.

#![allow(dead_code)]

use mentorhub_core::types::DbId;
use mentorhub_db::models::mentor::CreateMentor;
use mentorhub_db::models::student::CreateStudent;
use mentorhub_db::repositories::{MentorRepo, StudentRepo};
use sqlx::PgPool;

pub async fn seed_mentor(pool: &PgPool, name: &str) -> DbId {
    let input = CreateMentor {
        name: name.to_string(),
        email: format!("{}@faculty.test", name.to_lowercase().replace(' ', ".")),
        password: "secret".to_string(),
        department: Some("Computer Engineering".to_string()),
    };
    MentorRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_student(pool: &PgPool, name: &str, mentor_id: Option<DbId>) -> DbId {
    let input = CreateStudent {
        name: name.to_string(),
        prn: format!("PRN-{}", name.to_lowercase()),
        email: format!("{}@student.test", name.to_lowercase().replace(' ', ".")),
        password: "secret".to_string(),
        mentor_id,
        github_link: None,
    };
    StudentRepo::create(pool, &input).await.unwrap().id
}
