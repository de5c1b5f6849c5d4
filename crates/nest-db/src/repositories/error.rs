//! Error handling utilities for repositories

use nest_core::error::DomainError;
use sqlx::Error as SqlxError;

/// SQLSTATE raised when arithmetic leaves the column's range
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Convert SQLx error to DomainError
///
/// Failures to reach the server at all are reported as `Unavailable` so the
/// readiness probe can tell them apart from statement errors.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match &e {
        SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) | SqlxError::Tls(_) => {
            DomainError::Unavailable(e.to_string())
        }
        SqlxError::Database(db) if db.code().as_deref() == Some(NUMERIC_VALUE_OUT_OF_RANGE) => {
            DomainError::ValidationError(format!("recommendationCount out of range: {}", db.message()))
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}
