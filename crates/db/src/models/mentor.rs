//! Mentor (faculty) entity model and DTOs.

use mentorhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full mentor row from the `mentors` table. The password is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mentor {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub department: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMentor {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub department: Option<String>,
}

/// DTO for updating a mentor. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMentor {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}
