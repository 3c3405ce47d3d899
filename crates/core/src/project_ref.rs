//! Project addressing: internal numeric ids and human-facing codes.
//!
//! Every project carries both a BIGSERIAL `id` and a sequential code such as
//! `PRJ1001`. Callers may address a project by either, so every read, update
//! and delete path takes a [`ProjectRef`] and resolves it through a single
//! store lookup.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::types::DbId;

/// Prefix of every project code.
pub const PROJECT_CODE_PREFIX: &str = "PRJ";

/// Number assigned to the first project when the table is empty.
pub const FIRST_PROJECT_NUMBER: i64 = 1001;

/// Human-facing project code, `PRJ` followed by a decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectCode(i64);

impl ProjectCode {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    /// The numeric suffix of the code.
    pub fn number(&self) -> i64 {
        self.0
    }

    /// Allocate the code following the highest existing number, or
    /// [`FIRST_PROJECT_NUMBER`] when no project exists yet. Fails once the
    /// numeric suffix would overflow `i64`.
    pub fn next_after(max_existing: Option<i64>) -> Result<Self, CoreError> {
        match max_existing {
            Some(max) => max.checked_add(1).map(Self).ok_or_else(|| {
                CoreError::Internal(format!(
                    "no project code follows {PROJECT_CODE_PREFIX}{max}"
                ))
            }),
            None => Ok(Self(FIRST_PROJECT_NUMBER)),
        }
    }

    /// Parse a code of the form `PRJ<digits>`.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let invalid = || {
            CoreError::Validation(format!(
                "Invalid project code '{s}'. Expected {PROJECT_CODE_PREFIX} followed by digits"
            ))
        };
        let digits = s.strip_prefix(PROJECT_CODE_PREFIX).ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.parse::<i64>().map(Self).map_err(|_| invalid())
    }
}

impl std::fmt::Display for ProjectCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{PROJECT_CODE_PREFIX}{}", self.0)
    }
}

impl Serialize for ProjectCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProjectCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A reference to a project by internal id or by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawProjectRef")]
pub enum ProjectRef {
    Id(DbId),
    Code(ProjectCode),
}

impl ProjectRef {
    /// Parse a path or body value. All-digit values are ids, anything else
    /// must be a project code.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<DbId>()
                .map(Self::Id)
                .map_err(|_| CoreError::Validation(format!("Project id '{s}' is out of range")));
        }
        ProjectCode::parse(s).map(Self::Code)
    }
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Code(code) => write!(f, "{code}"),
        }
    }
}

impl From<DbId> for ProjectRef {
    fn from(id: DbId) -> Self {
        Self::Id(id)
    }
}

impl From<ProjectCode> for ProjectRef {
    fn from(code: ProjectCode) -> Self {
        Self::Code(code)
    }
}

/// JSON bodies carry a project reference either as a number or a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawProjectRef {
    Id(DbId),
    Text(String),
}

impl TryFrom<RawProjectRef> for ProjectRef {
    type Error = CoreError;

    fn try_from(raw: RawProjectRef) -> Result<Self, Self::Error> {
        match raw {
            RawProjectRef::Id(id) => Ok(Self::Id(id)),
            RawProjectRef::Text(text) => Self::parse(&text),
        }
    }
}
