//! # urpg-service
//!
//! Read-side services over an `ICatalogStorage`: the species page assembler
//! (circular navigation, altered forms, unique moves) and ability / attack
//! lookups. Services hold an `Arc<dyn ICatalogStorage>` and are immutable
//! once built.

pub mod ability;
pub mod attack;
mod lookup;
pub mod species;
pub mod views;

pub use ability::AbilityService;
pub use attack::AttackService;
pub use species::SpeciesService;
pub use views::{
    AlteredFormView, CosmeticFormView, SpeciesAbilityView, SpeciesAttackView, SpeciesPageTab,
    SpeciesView,
};
