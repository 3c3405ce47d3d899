/// Domain-level error shared by the managers, the store implementations and
/// the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {reference}")]
    NotFound {
        entity: &'static str,
        reference: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is known but does not own the entity it tried to change.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The underlying store failed. Carries the store's own message.
    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] keyed by anything printable.
    pub fn not_found(entity: &'static str, reference: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            reference: reference.to_string(),
        }
    }
}

/// Convenience alias used throughout the core.
pub type CoreResult<T> = Result<T, CoreError>;
