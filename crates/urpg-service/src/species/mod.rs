//! SpeciesService: assembles the species page from the catalog store.

pub mod deduplicator;
pub mod navigation;
pub mod projector;

use std::sync::Arc;

use urpg_core::config::CatalogConfig;
use urpg_core::errors::{ServiceError, ServiceResult};
use urpg_core::models::Species;
use urpg_core::traits::ICatalogStorage;

use crate::lookup::exact_then_prefix;
use crate::views::{AlteredFormView, SpeciesPageTab, SpeciesView};

pub use deduplicator::apply_unique_moves;
pub use navigation::{next_dex, prev_dex};
pub use projector::{build_altered_form, build_altered_form_list};

/// Species page assembler over a catalog store.
///
/// The catalog size used for circular navigation is fixed at construction.
pub struct SpeciesService {
    store: Arc<dyn ICatalogStorage>,
    catalog_size: i32,
}

impl SpeciesService {
    /// Create a service navigating a catalog of `catalog_size` entries.
    pub fn new(store: Arc<dyn ICatalogStorage>, catalog_size: i32) -> ServiceResult<Self> {
        if catalog_size < 1 {
            return Err(ServiceError::InvalidState {
                message: format!("catalog size must be at least 1, got {catalog_size}"),
            });
        }
        Ok(Self {
            store,
            catalog_size,
        })
    }

    /// Create a service sized from config, or from the store's highest dexno
    /// when `derive_size_from_store` is set. An empty store falls back to the
    /// configured size.
    pub fn from_config(
        store: Arc<dyn ICatalogStorage>,
        config: &CatalogConfig,
    ) -> ServiceResult<Self> {
        let configured = config.effective_num_species();
        let size = if config.effective_derive_size_from_store() {
            match store.find_max_dexno()? {
                Some(max) => max,
                None => {
                    tracing::warn!(
                        fallback = configured,
                        "store is empty, using configured catalog size"
                    );
                    configured
                }
            }
        } else {
            configured
        };
        tracing::debug!(catalog_size = size, "species service ready");
        Self::new(store, size)
    }

    pub fn catalog_size(&self) -> i32 {
        self.catalog_size
    }

    /// Look up a species page by name: exact match first, then the first
    /// prefix match in store order. Empty names match nothing.
    pub fn find_by_name(&self, name: &str) -> ServiceResult<Option<SpeciesView>> {
        let species = exact_then_prefix(
            "species",
            name,
            |n| self.store.find_species_by_name(n),
            |n| self.store.find_species_by_name_starting_with(n),
        )?;
        self.build_species_view(species.as_ref())
    }

    /// Page of the first species stored at `dexno`.
    pub fn find_by_dexno(&self, dexno: i32) -> ServiceResult<Option<SpeciesView>> {
        let species = self.store.find_species_by_dexno(dexno)?;
        self.build_species_view(species.first())
    }

    /// Every species name in store order.
    pub fn find_all_names(&self) -> ServiceResult<Vec<String>> {
        Ok(self.store.find_all_species_names()?)
    }

    /// Assemble the full page for `species`. `None` yields `None`.
    pub fn build_species_view(
        &self,
        species: Option<&Species>,
    ) -> ServiceResult<Option<SpeciesView>> {
        let Some(species) = species else {
            return Ok(None);
        };

        let mut view = SpeciesView::from(species);

        view.next_species = self.page_tab_at(self.get_next_dex(species.dexno))?;
        view.prev_species = self.page_tab_at(self.get_prev_dex(species.dexno))?;

        view.cosmetic_forms = self
            .store
            .find_cosmetic_forms_by_species_dbid(species.dbid)?
            .into_iter()
            .map(Into::into)
            .collect();

        let siblings = self.store.find_species_by_dexno(species.dexno)?;
        let mut altered_forms = build_altered_form_list(&siblings);
        view.unique_moves = self.build_unique_move_list(Some(altered_forms.as_mut_slice()))?;
        view.altered_forms = altered_forms;

        view.attacks = self
            .store
            .find_attacks_by_species_dbid(species.dbid)?
            .into_iter()
            .map(Into::into)
            .collect();
        view.abilities = self
            .store
            .find_abilities_by_species_dbid(species.dbid)?
            .into_iter()
            .map(Into::into)
            .collect();

        tracing::debug!(
            dbid = species.dbid,
            dexno = species.dexno,
            altered_forms = view.altered_forms.len(),
            unique_moves = view.unique_moves.len(),
            "assembled species view"
        );
        Ok(Some(view))
    }

    pub fn get_next_dex(&self, dexno: i32) -> i32 {
        next_dex(dexno, self.catalog_size)
    }

    pub fn get_prev_dex(&self, dexno: i32) -> i32 {
        prev_dex(dexno, self.catalog_size)
    }

    /// Dbids of every species at `dexno`, in store order.
    pub fn find_all_species_dbids_by_dexno(&self, dexno: i32) -> ServiceResult<Vec<i64>> {
        Ok(self
            .store
            .find_species_by_dexno(dexno)?
            .iter()
            .map(|s| s.dbid)
            .collect())
    }

    /// Tab for `species`; `None` gives the empty tab.
    pub fn build_page_tab(species: Option<&Species>) -> SpeciesPageTab {
        SpeciesPageTab::from(species)
    }

    pub fn build_altered_form(species: Option<&Species>) -> AlteredFormView {
        build_altered_form(species)
    }

    pub fn build_altered_form_list(species: &[Species]) -> Vec<AlteredFormView> {
        build_altered_form_list(species)
    }

    /// Fetch each form's moves and record the ones that differ.
    /// `None` or an empty slice yields an empty list.
    pub fn build_unique_move_list(
        &self,
        forms: Option<&mut [AlteredFormView]>,
    ) -> ServiceResult<Vec<String>> {
        let Some(forms) = forms.filter(|f| !f.is_empty()) else {
            return Ok(Vec::new());
        };

        let move_lists = forms
            .iter()
            .map(|f| self.store.find_attacks_by_species_dbid(f.dbid))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(apply_unique_moves(forms, &move_lists))
    }

    fn page_tab_at(&self, dexno: i32) -> ServiceResult<SpeciesPageTab> {
        let species = self.store.find_species_by_dexno(dexno)?;
        Ok(Self::build_page_tab(species.first()))
    }
}
