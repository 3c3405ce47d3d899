//! HTTP handlers, one module per resource group.
//!
//! Project and message handlers go through the core managers; account
//! handlers call the repositories directly.

pub mod admins;
pub mod auth;
pub mod mentors;
pub mod messages;
pub mod projects;
pub mod students;

use mentorhub_core::error::CoreError;
use mentorhub_core::project_ref::ProjectRef;

use crate::error::AppResult;

/// Parse a `{ref}` path segment: digits are an id, `PRJ<n>` is a code.
pub(crate) fn project_ref(raw: &str) -> AppResult<ProjectRef> {
    Ok(ProjectRef::parse(raw)?)
}

/// Turn an absent required body field into a validation error.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}
