//! Storage-layer errors for SQLite operations.

use super::error_code::{self, UrpgErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    /// A lookup that must match at most one row matched several.
    #[error("ambiguous result for {key}: {count} rows matched")]
    AmbiguousResult { key: String, count: usize },

    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },
}

impl UrpgErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::SqliteError { .. } => error_code::STORAGE_ERROR,
            StorageError::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            StorageError::AmbiguousResult { .. } => error_code::AMBIGUOUS_MATCH,
            StorageError::ConstraintViolation { .. } => error_code::CONSTRAINT_VIOLATION,
        }
    }
}
