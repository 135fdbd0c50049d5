use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use urpg_core::models::Species;

/// One sibling form on a shared catalog page.
///
/// `unique_attacks` maps each move that differs across the siblings to this
/// form's method for it, or `None` when this form cannot learn it. It is
/// filled in by the move deduplicator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlteredFormView {
    pub dbid: i64,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub form_name: Option<String>,
    pub type1: Option<String>,
    pub type2: Option<String>,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
    pub unique_attacks: BTreeMap<String, Option<String>>,
}

impl From<&Species> for AlteredFormView {
    fn from(s: &Species) -> Self {
        Self {
            dbid: s.dbid,
            name: Some(s.name.clone()),
            display_name: Some(s.display_name.clone()),
            form_name: s.form_name.clone(),
            type1: Some(s.type1.clone()),
            type2: s.type2.clone(),
            hp: s.hp,
            attack: s.attack,
            defense: s.defense,
            special_attack: s.special_attack,
            special_defense: s.special_defense,
            speed: s.speed,
            unique_attacks: BTreeMap::new(),
        }
    }
}
