//! API-boundary errors and their HTTP status mapping.

use urpg_core::errors::error_code::{self, UrpgErrorCode};
use urpg_core::errors::{ConfigError, ServiceError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("no route for {path}")]
    NotFound { path: String },

    #[error("method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("runtime not initialized")]
    RuntimeNotInitialized,

    #[error("runtime already initialized")]
    AlreadyInitialized,

    #[error("initialization failed: {message}")]
    Init { message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Service(e) if e.is_client_error() => 400,
            ApiError::Storage(StorageError::AmbiguousResult { .. }) => 400,
            ApiError::InvalidRequest { .. } => 400,
            ApiError::NotFound { .. } => 404,
            ApiError::MethodNotAllowed { .. } => 405,
            _ => 500,
        }
    }
}

impl UrpgErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Service(e) => e.error_code(),
            ApiError::Storage(e) => e.error_code(),
            ApiError::Config(_) => error_code::CONFIG_ERROR,
            ApiError::Serialization(_) => error_code::INTERNAL_ERROR,
            ApiError::InvalidRequest { .. } => error_code::INVALID_REQUEST,
            ApiError::NotFound { .. } => error_code::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => error_code::METHOD_NOT_ALLOWED,
            ApiError::RuntimeNotInitialized => error_code::RUNTIME_NOT_INITIALIZED,
            ApiError::AlreadyInitialized => error_code::ALREADY_INITIALIZED,
            ApiError::Init { .. } => error_code::INIT_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_lookup_is_bad_request() {
        let err: ApiError = ServiceError::from(StorageError::AmbiguousResult {
            key: "species.name=Pikachu".to_string(),
            count: 2,
        })
        .into();
        assert_eq!(err.status(), 400);
        assert_eq!(err.error_code(), error_code::AMBIGUOUS_MATCH);
    }

    #[test]
    fn invalid_state_is_bad_request() {
        let err: ApiError = ServiceError::InvalidState {
            message: "two pages claim dexno 25".to_string(),
        }
        .into();
        assert_eq!(err.status(), 400);
        assert_eq!(err.error_code(), error_code::INVALID_STATE);
    }

    #[test]
    fn backend_failures_are_server_errors() {
        let err: ApiError = ServiceError::from(StorageError::SqliteError {
            message: "database disk image is malformed".to_string(),
        })
        .into();
        assert_eq!(err.status(), 500);
        assert_eq!(err.error_code(), error_code::STORAGE_ERROR);

        let err: ApiError = ConfigError::FileNotFound {
            path: "urpg.toml".to_string(),
        }
        .into();
        assert_eq!(err.status(), 500);
        assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
    }

    #[test]
    fn routing_errors() {
        let err = ApiError::MethodNotAllowed {
            method: "POST".to_string(),
            path: "/pokemon/Pikachu".to_string(),
        };
        assert_eq!(err.status(), 405);
        assert_eq!(
            err.coded_string(),
            "[METHOD_NOT_ALLOWED] method POST not allowed on /pokemon/Pikachu"
        );
        assert_eq!(
            ApiError::NotFound {
                path: "/trainer".to_string()
            }
            .status(),
            404
        );
    }
}
