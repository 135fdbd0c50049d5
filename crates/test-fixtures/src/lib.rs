//! Reference catalog data for URPG tests.
//!
//! Builders return entities with `dbid = 0`; `seed_catalog` inserts them in a
//! fixed order so the dbids below hold on a fresh store.

use urpg_core::constants::methods;
use urpg_core::models::{Ability, Attack, CosmeticForm, Species};
use urpg_core::traits::ICatalogStorage;

pub const TEST_SPECIES_NAME: &str = "Pikachu";
pub const TEST_SPECIES_DEXNO: i32 = 25;
pub const TEST_SPECIES_DBID: i64 = 1;
pub const TEST_ALTERNATE_FORM_NAME: &str = "Pikachu-Belle";
pub const TEST_ALTERNATE_FORM_DBID: i64 = 2;
pub const TEST_PREV_DEX_NAME: &str = "Arbok";
pub const TEST_NEXT_DEX_NAME: &str = "Raichu";
pub const TEST_COSMETIC_FORM_NAME: &str = "Pikachu-Spiky-Eared";

/// Shared by both forms with the same method.
pub const TEST_ATTACK_1_NAME: &str = "Thundershock";
/// Shared by both forms with different methods.
pub const TEST_ATTACK_2_NAME: &str = "Thunder";
/// Pikachu only.
pub const TEST_ATTACK_3_NAME: &str = "Volt Tackle";
/// Pikachu-Belle only.
pub const TEST_ATTACK_4_NAME: &str = "Icicle Crash";

pub const TEST_ABILITY_NAME: &str = "Static";
pub const TEST_HIDDEN_ABILITY_NAME: &str = "Lightning Rod";

fn species(
    dexno: i32,
    name: &str,
    form_name: Option<&str>,
    type1: &str,
    type2: Option<&str>,
    stats: [i32; 6],
) -> Species {
    let [hp, attack, defense, special_attack, special_defense, speed] = stats;
    Species {
        dbid: 0,
        dexno,
        name: name.to_string(),
        display_name: name.replace('-', " "),
        form_name: form_name.map(str::to_string),
        type1: type1.to_string(),
        type2: type2.map(str::to_string),
        hp,
        attack,
        defense,
        special_attack,
        special_defense,
        speed,
    }
}

pub fn pikachu() -> Species {
    species(
        TEST_SPECIES_DEXNO,
        TEST_SPECIES_NAME,
        None,
        "ELECTRIC",
        None,
        [35, 55, 40, 50, 50, 90],
    )
}

pub fn pikachu_belle() -> Species {
    species(
        TEST_SPECIES_DEXNO,
        TEST_ALTERNATE_FORM_NAME,
        Some("Belle"),
        "ELECTRIC",
        Some("ICE"),
        [35, 60, 45, 55, 55, 85],
    )
}

pub fn arbok() -> Species {
    species(
        TEST_SPECIES_DEXNO - 1,
        TEST_PREV_DEX_NAME,
        None,
        "POISON",
        None,
        [60, 95, 69, 65, 79, 80],
    )
}

pub fn raichu() -> Species {
    species(
        TEST_SPECIES_DEXNO + 1,
        TEST_NEXT_DEX_NAME,
        None,
        "ELECTRIC",
        None,
        [60, 90, 55, 90, 80, 110],
    )
}

/// A species at an arbitrary dexno, for catalog-edge tests.
pub fn species_at(dexno: i32, name: &str) -> Species {
    species(dexno, name, None, "NORMAL", None, [50, 50, 50, 50, 50, 50])
}

pub fn spiky_eared_pikachu(species_dbid: i64) -> CosmeticForm {
    CosmeticForm {
        dbid: 0,
        species_dbid,
        name: TEST_COSMETIC_FORM_NAME.to_string(),
        display_name: "Spiky-eared Pikachu".to_string(),
    }
}

fn attack(name: &str, attack_type: &str, power: Option<i32>, pp: i32, category: &str) -> Attack {
    Attack {
        dbid: 0,
        name: name.to_string(),
        attack_type: attack_type.to_string(),
        power,
        accuracy: Some(100),
        pp,
        category: category.to_string(),
        description: String::new(),
    }
}

pub fn thundershock() -> Attack {
    attack(TEST_ATTACK_1_NAME, "ELECTRIC", Some(40), 30, "SPECIAL")
}

pub fn thunder() -> Attack {
    Attack {
        accuracy: Some(70),
        ..attack(TEST_ATTACK_2_NAME, "ELECTRIC", Some(110), 10, "SPECIAL")
    }
}

pub fn volt_tackle() -> Attack {
    attack(TEST_ATTACK_3_NAME, "ELECTRIC", Some(120), 15, "PHYSICAL")
}

pub fn icicle_crash() -> Attack {
    Attack {
        accuracy: Some(90),
        ..attack(TEST_ATTACK_4_NAME, "ICE", Some(85), 10, "PHYSICAL")
    }
}

pub fn static_ability() -> Ability {
    Ability {
        dbid: 0,
        name: TEST_ABILITY_NAME.to_string(),
        description: "Contact may paralyze the attacker.".to_string(),
    }
}

pub fn lightning_rod() -> Ability {
    Ability {
        dbid: 0,
        name: TEST_HIDDEN_ABILITY_NAME.to_string(),
        description: "Draws in Electric-type moves.".to_string(),
    }
}

/// Dbids assigned by `seed_catalog`.
#[derive(Debug, Clone, Copy)]
pub struct SeededCatalog {
    pub pikachu: i64,
    pub pikachu_belle: i64,
    pub arbok: i64,
    pub raichu: i64,
    pub spiky_eared_pikachu: i64,
    pub thundershock: i64,
    pub thunder: i64,
    pub volt_tackle: i64,
    pub icicle_crash: i64,
    pub static_ability: i64,
    pub lightning_rod: i64,
}

/// Insert the reference catalog into an empty store.
///
/// Move lists:
/// - Pikachu: Thundershock (LEVEL-UP), Thunder (LEVEL-UP), Volt Tackle (SPECIAL)
/// - Pikachu-Belle: Thundershock (LEVEL-UP), Thunder (SPECIAL), Icicle Crash (SPECIAL)
///
/// # Panics
/// Panics if any insert fails.
pub fn seed_catalog(store: &dyn ICatalogStorage) -> SeededCatalog {
    let create_species = |s: Species| {
        store
            .create_species(&s)
            .unwrap_or_else(|e| panic!("failed to seed species {}: {e}", s.name))
    };
    let create_attack = |a: Attack| {
        store
            .create_attack(&a)
            .unwrap_or_else(|e| panic!("failed to seed attack {}: {e}", a.name))
    };
    let create_ability = |a: Ability| {
        store
            .create_ability(&a)
            .unwrap_or_else(|e| panic!("failed to seed ability {}: {e}", a.name))
    };
    let link_attack = |species: i64, attack: i64, method: &str| {
        store
            .add_species_attack(species, attack, method)
            .unwrap_or_else(|e| panic!("failed to link attack {attack} to {species}: {e}"));
    };

    let pikachu = create_species(pikachu());
    let pikachu_belle = create_species(pikachu_belle());
    let arbok = create_species(arbok());
    let raichu = create_species(raichu());

    let spiky_eared_pikachu = store
        .create_cosmetic_form(&spiky_eared_pikachu(pikachu))
        .unwrap_or_else(|e| panic!("failed to seed cosmetic form: {e}"));

    let thundershock = create_attack(thundershock());
    let thunder = create_attack(thunder());
    let volt_tackle = create_attack(volt_tackle());
    let icicle_crash = create_attack(icicle_crash());

    link_attack(pikachu, thundershock, methods::LEVEL_UP);
    link_attack(pikachu, thunder, methods::LEVEL_UP);
    link_attack(pikachu, volt_tackle, methods::SPECIAL);
    link_attack(pikachu_belle, thundershock, methods::LEVEL_UP);
    link_attack(pikachu_belle, thunder, methods::SPECIAL);
    link_attack(pikachu_belle, icicle_crash, methods::SPECIAL);
    link_attack(raichu, thundershock, methods::LEVEL_UP);

    let static_ability = create_ability(static_ability());
    let lightning_rod = create_ability(lightning_rod());
    for species in [pikachu, pikachu_belle] {
        store
            .add_species_ability(species, lightning_rod, true)
            .unwrap_or_else(|e| panic!("failed to link hidden ability: {e}"));
        store
            .add_species_ability(species, static_ability, false)
            .unwrap_or_else(|e| panic!("failed to link ability: {e}"));
    }

    SeededCatalog {
        pikachu,
        pikachu_belle,
        arbok,
        raichu,
        spiky_eared_pikachu,
        thundershock,
        thunder,
        volt_tackle,
        icicle_crash,
        static_ability,
        lightning_rod,
    }
}
