//! Persistence entities: one plain struct per catalog table.

pub mod ability;
pub mod attack;
pub mod cosmetic_form;
pub mod species;
pub mod species_ability;
pub mod species_attack;

pub use ability::Ability;
pub use attack::Attack;
pub use cosmetic_form::CosmeticForm;
pub use species::{BaseStats, Species};
pub use species_ability::SpeciesAbility;
pub use species_attack::SpeciesAttack;
