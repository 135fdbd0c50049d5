//! Schema migrations, tracked with `PRAGMA user_version`.
//! Each migration runs in its own transaction together with the version bump.

pub mod v001_catalog;
pub mod v002_abilities;

use rusqlite::Connection;
use urpg_core::errors::StorageError;

use crate::to_storage_err;

/// All migrations in application order.
const MIGRATIONS: &[(u32, &str)] = &[
    (1, v001_catalog::MIGRATION_SQL),
    (2, v002_abilities::MIGRATION_SQL),
];

/// The schema version a fully migrated database reports.
pub const LATEST_VERSION: u32 = 2;

/// Read the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(to_storage_err)
}

/// Apply every migration newer than the database's `user_version`.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = current_version(conn)?;

    for &(version, sql) in MIGRATIONS {
        if version <= current {
            continue;
        }

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        tx.execute_batch(sql)
            .and_then(|_| tx.pragma_update(None, "user_version", version))
            .map_err(|e| StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })?;
        tx.commit().map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;

        tracing::info!(version, "applied catalog migration");
    }

    Ok(())
}
