//! # urpg-storage
//!
//! SQLite persistence for the species catalog.
//! One serialized writer, a round-robin read pool for file-backed databases,
//! `PRAGMA user_version` migrations, and one query module per table.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use connection::DatabaseManager;
pub use engine::CatalogStorageEngine;

use rusqlite::ErrorCode;
use urpg_core::errors::StorageError;

/// Convert a rusqlite failure into a `StorageError`. `SQLITE_CONSTRAINT`
/// (unique, foreign key, check, not null) becomes `ConstraintViolation`.
pub(crate) fn to_storage_err(e: rusqlite::Error) -> StorageError {
    match e {
        rusqlite::Error::SqliteFailure(ref err, _) if err.code == ErrorCode::ConstraintViolation => {
            StorageError::ConstraintViolation {
                message: e.to_string(),
            }
        }
        other => StorageError::SqliteError {
            message: other.to_string(),
        },
    }
}
