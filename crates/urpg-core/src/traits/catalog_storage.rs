use crate::errors::StorageError;
use crate::models::{Ability, Attack, CosmeticForm, Species, SpeciesAbility, SpeciesAttack};

/// Named lookups + CRUD over the species catalog.
///
/// List-returning lookups yield rows in store order (ascending `dbid`);
/// callers rely on that order as the tie-break for "first match".
pub trait ICatalogStorage: Send + Sync {
    // --- Species lookups ---
    fn find_species_by_name(&self, name: &str) -> Result<Option<Species>, StorageError>;
    fn find_species_by_name_starting_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<Species>, StorageError>;
    fn find_species_by_dexno(&self, dexno: i32) -> Result<Vec<Species>, StorageError>;
    fn find_species_by_dbid(&self, dbid: i64) -> Result<Option<Species>, StorageError>;
    fn find_max_dexno(&self) -> Result<Option<i32>, StorageError>;
    fn find_all_species_names(&self) -> Result<Vec<String>, StorageError>;

    // --- Per-species associations ---
    fn find_cosmetic_forms_by_species_dbid(
        &self,
        species_dbid: i64,
    ) -> Result<Vec<CosmeticForm>, StorageError>;
    fn find_attacks_by_species_dbid(
        &self,
        species_dbid: i64,
    ) -> Result<Vec<SpeciesAttack>, StorageError>;
    fn find_abilities_by_species_dbid(
        &self,
        species_dbid: i64,
    ) -> Result<Vec<SpeciesAbility>, StorageError>;

    // --- Abilities ---
    fn find_ability_by_name(&self, name: &str) -> Result<Option<Ability>, StorageError>;
    fn find_abilities_by_name_starting_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<Ability>, StorageError>;
    fn find_all_ability_names(&self) -> Result<Vec<String>, StorageError>;

    // --- Attacks ---
    fn find_attack_by_name(&self, name: &str) -> Result<Option<Attack>, StorageError>;
    fn find_attacks_by_name_starting_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<Attack>, StorageError>;
    fn find_all_attack_names(&self) -> Result<Vec<String>, StorageError>;

    // --- CRUD ---
    fn create_species(&self, species: &Species) -> Result<i64, StorageError>;
    fn update_species(&self, species: &Species) -> Result<(), StorageError>;
    fn delete_species(&self, dbid: i64) -> Result<(), StorageError>;
    fn create_cosmetic_form(&self, form: &CosmeticForm) -> Result<i64, StorageError>;
    fn create_ability(&self, ability: &Ability) -> Result<i64, StorageError>;
    fn create_attack(&self, attack: &Attack) -> Result<i64, StorageError>;
    fn add_species_attack(
        &self,
        species_dbid: i64,
        attack_dbid: i64,
        method: &str,
    ) -> Result<(), StorageError>;
    fn add_species_ability(
        &self,
        species_dbid: i64,
        ability_dbid: i64,
        hidden: bool,
    ) -> Result<(), StorageError>;
}
