//! # urpg-core
//!
//! Foundation crate for the URPG species catalog.
//! Defines entities, the catalog storage trait, errors, config, tracing
//! setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

pub use config::UrpgConfig;
pub use errors::{ConfigError, ServiceError, ServiceResult, StorageError};
pub use models::{Ability, Attack, CosmeticForm, Species, SpeciesAbility, SpeciesAttack};
pub use traits::ICatalogStorage;
