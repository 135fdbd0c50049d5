//! Error handling for URPG.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod service_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::UrpgErrorCode;
pub use service_error::{ServiceError, ServiceResult};
pub use storage_error::StorageError;
