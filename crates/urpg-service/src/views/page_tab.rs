use serde::{Deserialize, Serialize};
use urpg_core::models::Species;

/// Link to a neighbouring catalog page.
///
/// The default value (`dexno = 0`, no name) stands for an unoccupied index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesPageTab {
    pub dexno: i32,
    /// Display name of the first species at `dexno`.
    pub name: Option<String>,
}

impl SpeciesPageTab {
    pub fn is_empty(&self) -> bool {
        self.dexno == 0 && self.name.is_none()
    }
}

impl From<Option<&Species>> for SpeciesPageTab {
    fn from(species: Option<&Species>) -> Self {
        match species {
            Some(s) => Self {
                dexno: s.dexno,
                name: Some(s.display_name.clone()),
            },
            None => Self::default(),
        }
    }
}
