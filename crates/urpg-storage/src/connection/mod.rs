//! Connection management: write-serialized + read-pooled.

pub mod pool;
pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;
use urpg_core::errors::StorageError;

use self::pool::ReadPool;
use self::pragmas::apply_pragmas;
use crate::{migrations, to_storage_err};

/// Manages the single write connection and the read connection pool.
///
/// In-memory databases have no read pool: a second in-memory connection is a
/// separate database, so reads go through the writer.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    readers: Option<ReadPool>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let writer = Connection::open(path).map_err(to_storage_err)?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;

        // Readers are opened after migrations so they see the final schema.
        let readers = ReadPool::open(path, read_pool_size)?;

        tracing::debug!(
            path = %path.display(),
            readers = readers.size(),
            "opened catalog database"
        );

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(readers),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = Connection::open_in_memory().map_err(to_storage_err)?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            path: None,
        })
    }

    /// Execute a write operation with the serialized writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.writer.lock().map_err(|_| StorageError::SqliteError {
            message: "write lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Execute a read operation on the best available connection.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.with_writer(f),
        }
    }

    /// Run a WAL checkpoint (TRUNCATE mode), e.g. after a bulk import.
    pub fn checkpoint(&self) -> Result<(), StorageError> {
        self.with_writer(|conn| {
            conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
                .map_err(to_storage_err)
        })
    }

    /// Get the database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of pooled read connections (0 for in-memory).
    pub fn reader_count(&self) -> usize {
        self.readers.as_ref().map_or(0, ReadPool::size)
    }
}
