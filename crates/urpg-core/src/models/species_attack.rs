//! Species ↔ attack association with its acquisition method.

use serde::{Deserialize, Serialize};

/// One move a species can learn.
///
/// `attack_name` is denormalized from the `attack` table on read so the
/// move deduplicator can key by name without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesAttack {
    pub species_dbid: i64,
    pub attack_dbid: i64,
    pub attack_name: String,
    /// e.g. `LEVEL-UP`, `SPECIAL`, `TM`.
    pub method: String,
}
