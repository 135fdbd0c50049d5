use serde::{Deserialize, Serialize};
use urpg_core::models::{CosmeticForm, Species, SpeciesAbility, SpeciesAttack};

use super::{AlteredFormView, SpeciesPageTab};

/// The species page: one species plus everything shown around it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesView {
    pub dbid: i64,
    pub dexno: i32,
    pub name: String,
    pub display_name: String,
    pub form_name: Option<String>,
    pub type1: String,
    pub type2: Option<String>,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
    pub attacks: Vec<SpeciesAttackView>,
    pub abilities: Vec<SpeciesAbilityView>,
    pub cosmetic_forms: Vec<CosmeticFormView>,
    pub altered_forms: Vec<AlteredFormView>,
    /// Moves whose method differs between the altered forms.
    pub unique_moves: Vec<String>,
    pub next_species: SpeciesPageTab,
    pub prev_species: SpeciesPageTab,
}

impl From<&Species> for SpeciesView {
    /// Identity and stats only; the assembler fills in the rest.
    fn from(s: &Species) -> Self {
        Self {
            dbid: s.dbid,
            dexno: s.dexno,
            name: s.name.clone(),
            display_name: s.display_name.clone(),
            form_name: s.form_name.clone(),
            type1: s.type1.clone(),
            type2: s.type2.clone(),
            hp: s.hp,
            attack: s.attack,
            defense: s.defense,
            special_attack: s.special_attack,
            special_defense: s.special_defense,
            speed: s.speed,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticFormView {
    pub dbid: i64,
    pub name: String,
    pub display_name: String,
}

impl From<CosmeticForm> for CosmeticFormView {
    fn from(f: CosmeticForm) -> Self {
        Self {
            dbid: f.dbid,
            name: f.name,
            display_name: f.display_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesAttackView {
    pub name: String,
    pub method: String,
}

impl From<SpeciesAttack> for SpeciesAttackView {
    fn from(a: SpeciesAttack) -> Self {
        Self {
            name: a.attack_name,
            method: a.method,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesAbilityView {
    pub name: String,
    pub hidden: bool,
}

impl From<SpeciesAbility> for SpeciesAbilityView {
    fn from(a: SpeciesAbility) -> Self {
        Self {
            name: a.ability_name,
            hidden: a.hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_serializes_camel_case_with_empty_collections() {
        let species = Species {
            dbid: 1,
            dexno: 25,
            name: "Pikachu".to_string(),
            display_name: "Pikachu".to_string(),
            type1: "ELECTRIC".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(SpeciesView::from(&species)).unwrap();

        assert_eq!(json["displayName"], "Pikachu");
        assert!(json["formName"].is_null());
        assert_eq!(json["cosmeticForms"], serde_json::json!([]));
        assert_eq!(json["uniqueMoves"], serde_json::json!([]));
        assert_eq!(json["nextSpecies"]["dexno"], 0);
    }

    #[test]
    fn missing_method_serializes_as_null() {
        let mut form = AlteredFormView::default();
        form.unique_attacks.insert("Volt Tackle".to_string(), None);
        form.unique_attacks
            .insert("Thunder".to_string(), Some("SPECIAL".to_string()));

        let json = serde_json::to_value(&form).unwrap();
        assert!(json["uniqueAttacks"]["Volt Tackle"].is_null());
        assert_eq!(json["uniqueAttacks"]["Thunder"], "SPECIAL");
    }
}
