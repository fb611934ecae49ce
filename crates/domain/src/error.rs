//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomesteadError`] via `#[from]` or an explicit `From` impl.

/// Top-level error returned by domain validation and application services.
#[derive(Debug, thiserror::Error)]
pub enum HomesteadError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("price must be a finite, non-negative amount")]
    InvalidPrice,

    #[error("{field} must not be negative")]
    NegativeCount { field: &'static str },

    #[error("email must not be empty")]
    EmptyEmail,

    #[error("invalid image list encoding")]
    InvalidImageEncoding,
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
