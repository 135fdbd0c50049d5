//! Catalog configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_NUM_SPECIES;

/// Configuration for catalog navigation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Size of the circular catalog. Default: 807.
    pub num_species: Option<i32>,
    /// Use the highest dexno in the store as the catalog size. Default: false.
    pub derive_size_from_store: Option<bool>,
}

impl CatalogConfig {
    pub fn effective_num_species(&self) -> i32 {
        self.num_species.unwrap_or(DEFAULT_NUM_SPECIES)
    }

    pub fn effective_derive_size_from_store(&self) -> bool {
        self.derive_size_from_store.unwrap_or(false)
    }
}
