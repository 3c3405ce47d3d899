//! Participant roles in a project thread.
//!
//! These strings are stored verbatim in `messages.sender_type` and must match
//! the `ck_messages_sender_type` constraint.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_MENTOR: &str = "mentor";

/// One of the two parties of a project: the owning student or the assigned
/// mentor. Used as a message's sender type, as the reader role when marking
/// messages read, and as the user role for inbox queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Student,
    Mentor,
}

impl ParticipantRole {
    /// Return the wire-format string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => ROLE_STUDENT,
            Self::Mentor => ROLE_MENTOR,
        }
    }

    /// Parse from a wire-format string.
    ///
    /// `field` names the request field in the error message
    /// (`sender_type`, `reader_type`, `user_type`).
    pub fn parse(s: &str, field: &str) -> Result<Self, CoreError> {
        match s {
            ROLE_STUDENT => Ok(Self::Student),
            ROLE_MENTOR => Ok(Self::Mentor),
            _ => Err(CoreError::Validation(format!(
                "Invalid {field}: '{s}'. Must be one of: student, mentor"
            ))),
        }
    }

    /// The other party of the thread.
    pub fn counterpart(&self) -> Self {
        match self {
            Self::Student => Self::Mentor,
            Self::Mentor => Self::Student,
        }
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
