//! Wire views returned by the services. Plain data, serialized camelCase.

mod altered_form;
mod page_tab;
mod species_view;

pub use altered_form::AlteredFormView;
pub use page_tab::SpeciesPageTab;
pub use species_view::{CosmeticFormView, SpeciesAbilityView, SpeciesAttackView, SpeciesView};
