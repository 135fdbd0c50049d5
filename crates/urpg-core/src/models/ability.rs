//! Abilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub dbid: i64,
    pub name: String,
    pub description: String,
}
