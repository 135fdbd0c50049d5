//! Storage configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_PATH, DEFAULT_READ_POOL_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Database path, relative to the project root unless absolute.
    pub db_path: Option<String>,
    /// Read-only connections for file-backed databases. Default: 4.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    pub fn effective_db_path(&self) -> &str {
        self.db_path.as_deref().unwrap_or(DEFAULT_DB_PATH)
    }

    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size.unwrap_or(DEFAULT_READ_POOL_SIZE)
    }
}
