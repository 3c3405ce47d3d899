//! Project lifecycle status and progress validation.
//!
//! The wire strings below must match the `ck_projects_status` CHECK
//! constraint in `20260301000004_create_projects_table.sql`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lowest accepted progress value (inclusive).
pub const MIN_PROGRESS: i32 = 0;

/// Highest accepted progress value (inclusive).
pub const MAX_PROGRESS: i32 = 100;

/// Lifecycle state of a project.
///
/// A project starts as `Pending` (proposal) or `Submitted` (student
/// submission), is moved to `Approved` or `Rejected` by its mentor, and then
/// progresses through `InProgress` to `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Pending,
    Submitted,
    Approved,
    Rejected,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [ProjectStatus; 6] = [
        Self::Pending,
        Self::Submitted,
        Self::Approved,
        Self::Rejected,
        Self::InProgress,
        Self::Completed,
    ];

    /// Return the wire-format string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Submitted => "Submitted",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parse from a wire-format string. Matching is exact.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status value '{s}'. Must be one of: Pending, Submitted, \
                     Approved, Rejected, In Progress, Completed"
                ))
            })
    }

    /// Past-tense verb used in confirmation messages ("Project approved successfully").
    pub fn confirmation_verb(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate that a progress percentage lies in `[0, 100]`.
pub fn validate_progress(progress: i32) -> Result<i32, CoreError> {
    if (MIN_PROGRESS..=MAX_PROGRESS).contains(&progress) {
        Ok(progress)
    } else {
        Err(CoreError::Validation(format!(
            "Progress percentage must be between {MIN_PROGRESS} and {MAX_PROGRESS}, got {progress}"
        )))
    }
}
