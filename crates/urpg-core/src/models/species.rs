//! Species: one row per catalog entry, including regional and altered forms.

use serde::{Deserialize, Serialize};

/// A species record.
///
/// Several species may share a `dexno`: the catalog index identifies the
/// page, `dbid` identifies the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Surrogate key. Ignored on insert.
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
}

/// The six base stats, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
}

impl BaseStats {
    /// Sum of all six stats.
    pub fn total(&self) -> i32 {
        self.hp
            + self.attack
            + self.defense
            + self.special_attack
            + self.special_defense
            + self.speed
    }
}

impl Species {
    pub fn base_stats(&self) -> BaseStats {
        BaseStats {
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            special_attack: self.special_attack,
            special_defense: self.special_defense,
            speed: self.speed,
        }
    }

    /// Overwrite the stat columns from `stats`.
    pub fn set_base_stats(&mut self, stats: BaseStats) {
        self.hp = stats.hp;
        self.attack = stats.attack;
        self.defense = stats.defense;
        self.special_attack = stats.special_attack;
        self.special_defense = stats.special_defense;
        self.speed = stats.speed;
    }

    /// True when this record is an altered form rather than the base entry.
    pub fn is_altered_form(&self) -> bool {
        self.form_name.as_deref().is_some_and(|f| !f.is_empty())
    }
}
