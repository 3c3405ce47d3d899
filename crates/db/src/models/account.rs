//! Credential DTOs shared by the student, mentor and admin accounts.

use serde::Deserialize;
use validator::Validate;

/// Login body. `username` is the email for students and mentors and the
/// username for admins.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body of the admin password reset endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPassword {
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}
