//! Ability lookups.

use std::sync::Arc;

use urpg_core::errors::ServiceResult;
use urpg_core::models::Ability;
use urpg_core::traits::ICatalogStorage;

use crate::lookup::exact_then_prefix;

pub struct AbilityService {
    store: Arc<dyn ICatalogStorage>,
}

impl AbilityService {
    pub fn new(store: Arc<dyn ICatalogStorage>) -> Self {
        Self { store }
    }

    /// Exact name, then first prefix match in store order.
    pub fn find_by_name(&self, name: &str) -> ServiceResult<Option<Ability>> {
        exact_then_prefix(
            "ability",
            name,
            |n| self.store.find_ability_by_name(n),
            |n| self.store.find_abilities_by_name_starting_with(n),
        )
    }

    pub fn find_all_names(&self) -> ServiceResult<Vec<String>> {
        Ok(self.store.find_all_ability_names()?)
    }
}
