//! Service-layer errors raised while assembling views.

use super::error_code::{self, UrpgErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The store returned data the assembler cannot reconcile.
    #[error("invalid lookup state: {message}")]
    InvalidState { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// True for errors caused by the request rather than the backend.
    /// The API maps these to 400.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidState { .. }
                | ServiceError::Storage(StorageError::AmbiguousResult { .. })
        )
    }
}

impl UrpgErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Storage(e) => e.error_code(),
            ServiceError::InvalidState { .. } => error_code::INVALID_STATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_storage_result_is_a_client_error() {
        let err: ServiceError = StorageError::AmbiguousResult {
            key: "species.name=Pikachu".to_string(),
            count: 2,
        }
        .into();
        assert!(err.is_client_error());
        assert_eq!(err.error_code(), error_code::AMBIGUOUS_MATCH);
    }

    #[test]
    fn sqlite_failure_is_not_a_client_error() {
        let err: ServiceError = StorageError::SqliteError {
            message: "disk I/O error".to_string(),
        }
        .into();
        assert!(!err.is_client_error());
        assert_eq!(err.error_code(), error_code::STORAGE_ERROR);
    }
}
