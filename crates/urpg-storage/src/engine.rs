//! CatalogStorageEngine: owns the DatabaseManager and implements ICatalogStorage.

use std::path::Path;

use urpg_core::errors::StorageError;
use urpg_core::models::{Ability, Attack, CosmeticForm, Species, SpeciesAbility, SpeciesAttack};
use urpg_core::traits::ICatalogStorage;

use crate::connection::writer::with_immediate_transaction;
use crate::connection::DatabaseManager;
use crate::queries;

/// SQLite-backed catalog store.
pub struct CatalogStorageEngine {
    db: DatabaseManager,
}

impl CatalogStorageEngine {
    /// Open a storage engine backed by a file on disk, creating parent
    /// directories as needed.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::SqliteError {
                message: format!("failed to create database directory: {e}"),
            })?;
        }
        Ok(Self {
            db: DatabaseManager::open(path, read_pool_size)?,
        })
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Access the underlying connection manager.
    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.db.path()
    }

    /// Count total species.
    pub fn species_count(&self) -> Result<i64, StorageError> {
        self.db.with_reader(queries::species::count)
    }
}

impl ICatalogStorage for CatalogStorageEngine {
    fn find_species_by_name(&self, name: &str) -> Result<Option<Species>, StorageError> {
        self.db
            .with_reader(|conn| queries::species::find_by_name(conn, name))
    }

    fn find_species_by_name_starting_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<Species>, StorageError> {
        self.db
            .with_reader(|conn| queries::species::find_by_name_starting_with(conn, prefix))
    }

    fn find_species_by_dexno(&self, dexno: i32) -> Result<Vec<Species>, StorageError> {
        self.db
            .with_reader(|conn| queries::species::find_by_dexno(conn, dexno))
    }

    fn find_species_by_dbid(&self, dbid: i64) -> Result<Option<Species>, StorageError> {
        self.db
            .with_reader(|conn| queries::species::find_by_dbid(conn, dbid))
    }

    fn find_max_dexno(&self) -> Result<Option<i32>, StorageError> {
        self.db.with_reader(queries::species::find_max_dexno)
    }

    fn find_all_species_names(&self) -> Result<Vec<String>, StorageError> {
        self.db.with_reader(queries::species::find_all_names)
    }

    fn find_cosmetic_forms_by_species_dbid(
        &self,
        species_dbid: i64,
    ) -> Result<Vec<CosmeticForm>, StorageError> {
        self.db.with_reader(|conn| {
            queries::cosmetic_forms::find_by_species_dbid(conn, species_dbid)
        })
    }

    fn find_attacks_by_species_dbid(
        &self,
        species_dbid: i64,
    ) -> Result<Vec<SpeciesAttack>, StorageError> {
        self.db.with_reader(|conn| {
            queries::species_attacks::find_by_species_dbid(conn, species_dbid)
        })
    }

    fn find_abilities_by_species_dbid(
        &self,
        species_dbid: i64,
    ) -> Result<Vec<SpeciesAbility>, StorageError> {
        self.db.with_reader(|conn| {
            queries::species_abilities::find_by_species_dbid(conn, species_dbid)
        })
    }

    fn find_ability_by_name(&self, name: &str) -> Result<Option<Ability>, StorageError> {
        self.db
            .with_reader(|conn| queries::abilities::find_by_name(conn, name))
    }

    fn find_abilities_by_name_starting_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<Ability>, StorageError> {
        self.db
            .with_reader(|conn| queries::abilities::find_by_name_starting_with(conn, prefix))
    }

    fn find_all_ability_names(&self) -> Result<Vec<String>, StorageError> {
        self.db.with_reader(queries::abilities::find_all_names)
    }

    fn find_attack_by_name(&self, name: &str) -> Result<Option<Attack>, StorageError> {
        self.db
            .with_reader(|conn| queries::attacks::find_by_name(conn, name))
    }

    fn find_attacks_by_name_starting_with(
        &self,
        prefix: &str,
    ) -> Result<Vec<Attack>, StorageError> {
        self.db
            .with_reader(|conn| queries::attacks::find_by_name_starting_with(conn, prefix))
    }

    fn find_all_attack_names(&self) -> Result<Vec<String>, StorageError> {
        self.db.with_reader(queries::attacks::find_all_names)
    }

    fn create_species(&self, species: &Species) -> Result<i64, StorageError> {
        let dbid = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| queries::species::insert(tx, species))
        })?;
        tracing::debug!(dbid, name = %species.name, dexno = species.dexno, "created species");
        Ok(dbid)
    }

    fn update_species(&self, species: &Species) -> Result<(), StorageError> {
        let updated = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| queries::species::update(tx, species))
        })?;
        if updated == 0 {
            tracing::warn!(dbid = species.dbid, "update_species matched no rows");
        }
        Ok(())
    }

    fn delete_species(&self, dbid: i64) -> Result<(), StorageError> {
        let deleted = self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| queries::species::delete(tx, dbid))
        })?;
        if deleted == 0 {
            tracing::warn!(dbid, "delete_species matched no rows");
        }
        Ok(())
    }

    fn create_cosmetic_form(&self, form: &CosmeticForm) -> Result<i64, StorageError> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| queries::cosmetic_forms::insert(tx, form))
        })
    }

    fn create_ability(&self, ability: &Ability) -> Result<i64, StorageError> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| queries::abilities::insert(tx, ability))
        })
    }

    fn create_attack(&self, attack: &Attack) -> Result<i64, StorageError> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| queries::attacks::insert(tx, attack))
        })
    }

    fn add_species_attack(
        &self,
        species_dbid: i64,
        attack_dbid: i64,
        method: &str,
    ) -> Result<(), StorageError> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                queries::species_attacks::insert(tx, species_dbid, attack_dbid, method)
            })
        })
    }

    fn add_species_ability(
        &self,
        species_dbid: i64,
        ability_dbid: i64,
        hidden: bool,
    ) -> Result<(), StorageError> {
        self.db.with_writer(|conn| {
            with_immediate_transaction(conn, |tx| {
                queries::species_abilities::insert(tx, species_dbid, ability_dbid, hidden)
            })
        })
    }
}
