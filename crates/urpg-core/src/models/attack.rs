//! Attacks (moves).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub dbid: i64,
    pub name: String,
    pub attack_type: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub pp: i32,
    /// PHYSICAL, SPECIAL or STATUS.
    pub category: String,
    pub description: String,
}
