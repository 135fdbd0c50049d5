//! UrpgErrorCode trait for the API boundary.

/// Every error enum implements this to provide a stable code string that
/// API clients can match on without parsing messages.
pub trait UrpgErrorCode {
    /// Returns the error code string (e.g., "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONSTRAINT_VIOLATION: &str = "CONSTRAINT_VIOLATION";
pub const AMBIGUOUS_MATCH: &str = "AMBIGUOUS_MATCH";
pub const INVALID_STATE: &str = "INVALID_STATE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
pub const RUNTIME_NOT_INITIALIZED: &str = "RUNTIME_NOT_INITIALIZED";
pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
pub const INIT_ERROR: &str = "INIT_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
