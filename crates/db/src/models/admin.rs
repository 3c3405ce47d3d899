//! Admin entity model and DTOs.

use mentorhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full admin row from the `admins` table. The password is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Admin {
    pub id: DbId,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdmin {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
