//! Species ↔ ability association.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesAbility {
    pub species_dbid: i64,
    pub ability_dbid: i64,
    pub ability_name: String,
    pub hidden: bool,
}
