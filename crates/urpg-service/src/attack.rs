//! Attack lookups.

use std::sync::Arc;

use urpg_core::errors::ServiceResult;
use urpg_core::models::Attack;
use urpg_core::traits::ICatalogStorage;

use crate::lookup::exact_then_prefix;

pub struct AttackService {
    store: Arc<dyn ICatalogStorage>,
}

impl AttackService {
    pub fn new(store: Arc<dyn ICatalogStorage>) -> Self {
        Self { store }
    }

    /// Exact name, then first prefix match in store order.
    pub fn find_by_name(&self, name: &str) -> ServiceResult<Option<Attack>> {
        exact_then_prefix(
            "attack",
            name,
            |n| self.store.find_attack_by_name(n),
            |n| self.store.find_attacks_by_name_starting_with(n),
        )
    }

    pub fn find_all_names(&self) -> ServiceResult<Vec<String>> {
        Ok(self.store.find_all_attack_names()?)
    }
}
