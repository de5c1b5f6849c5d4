//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// A lookup that matches nothing is not an error here: stores answer with
/// `None`, an empty list or a zero count in the acknowledgement.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The write was understood but the stored value cannot take it
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::Unavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if the store could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
