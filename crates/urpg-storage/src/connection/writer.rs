//! Write connection utilities: BEGIN IMMEDIATE transactions.

use rusqlite::{Connection, Transaction, TransactionBehavior};
use urpg_core::errors::StorageError;

/// Execute a write operation inside a BEGIN IMMEDIATE transaction.
/// The write lock is taken at transaction start, so SQLITE_BUSY surfaces
/// before any statement runs. Dropping the transaction uncommitted rolls back.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(|e| {
        StorageError::SqliteError {
            message: format!("failed to begin immediate transaction: {e}"),
        }
    })?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("failed to commit: {e}"),
    })?;

    Ok(result)
}
