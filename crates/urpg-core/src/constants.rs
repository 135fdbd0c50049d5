//! Catalog-wide constants.

/// Number of species in the catalog when neither config nor store says otherwise.
pub const DEFAULT_NUM_SPECIES: i32 = 807;

/// Lowest valid catalog index.
pub const FIRST_DEXNO: i32 = 1;

/// Default SQLite database location, relative to the project root.
pub const DEFAULT_DB_PATH: &str = ".urpg/urpg.db";

/// Default number of read-only connections in the pool.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Upper bound on the read pool size.
pub const MAX_READ_POOL_SIZE: usize = 8;

/// Acquisition method strings used by the reference data.
pub mod methods {
    pub const LEVEL_UP: &str = "LEVEL-UP";
    pub const SPECIAL: &str = "SPECIAL";
}
