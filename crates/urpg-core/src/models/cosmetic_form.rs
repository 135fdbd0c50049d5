//! Cosmetic forms: visual variants with no stat or move differences.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticForm {
    pub dbid: i64,
    pub species_dbid: i64,
    pub name: String,
    pub display_name: String,
}
