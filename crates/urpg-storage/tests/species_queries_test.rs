//! Tests for species / cosmetic form / association queries on a raw connection.

use rusqlite::Connection;
use test_fixtures::*;
use urpg_core::errors::StorageError;
use urpg_storage::migrations::run_migrations;
use urpg_storage::queries::{attacks, cosmetic_forms, species, species_abilities, species_attacks};

fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    run_migrations(&conn).unwrap();
    conn
}

#[test]
fn insert_and_find_by_name() {
    let conn = setup_db();
    let dbid = species::insert(&conn, &pikachu()).unwrap();
    assert_eq!(dbid, TEST_SPECIES_DBID);

    let found = species::find_by_name(&conn, TEST_SPECIES_NAME).unwrap().unwrap();
    assert_eq!(found.dbid, dbid);
    assert_eq!(found.dexno, TEST_SPECIES_DEXNO);
    assert_eq!(found.type1, "ELECTRIC");
    assert_eq!(found.type2, None);
    assert_eq!(found.speed, 90);
}

#[test]
fn exact_name_lookup_ignores_case() {
    let conn = setup_db();
    species::insert(&conn, &pikachu()).unwrap();

    let found = species::find_by_name(&conn, "pIkAcHu").unwrap();
    assert_eq!(found.map(|s| s.name), Some(TEST_SPECIES_NAME.to_string()));
}

#[test]
fn exact_name_lookup_does_not_match_prefix() {
    let conn = setup_db();
    species::insert(&conn, &pikachu()).unwrap();

    assert!(species::find_by_name(&conn, "Pika").unwrap().is_none());
    assert!(species::find_by_name(&conn, "Mewthree").unwrap().is_none());
}

#[test]
fn duplicate_name_is_a_constraint_violation() {
    let conn = setup_db();
    species::insert(&conn, &pikachu()).unwrap();

    let err = species::insert(&conn, &pikachu()).unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation { .. }));
}

#[test]
fn dexno_must_be_positive() {
    let conn = setup_db();
    let err = species::insert(&conn, &species_at(0, "Missingno")).unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation { .. }));
}

#[test]
fn prefix_lookup_returns_store_order() {
    let conn = setup_db();
    let belle = species::insert(&conn, &pikachu_belle()).unwrap();
    let base = species::insert(&conn, &pikachu()).unwrap();
    species::insert(&conn, &raichu()).unwrap();

    let matches = species::find_by_name_starting_with(&conn, "pika").unwrap();
    let dbids: Vec<i64> = matches.iter().map(|s| s.dbid).collect();
    assert_eq!(dbids, vec![belle, base]);
}

#[test]
fn prefix_lookup_treats_wildcards_literally() {
    let conn = setup_db();
    species::insert(&conn, &species_at(122, "Mr. Mime")).unwrap();
    species::insert(&conn, &species_at(439, "Mime Jr.")).unwrap();

    assert!(species::find_by_name_starting_with(&conn, "%").unwrap().is_empty());
    assert!(species::find_by_name_starting_with(&conn, "M_").unwrap().is_empty());
    assert_eq!(species::find_by_name_starting_with(&conn, "Mr.").unwrap().len(), 1);
}

#[test]
fn find_by_dexno_returns_all_forms_in_store_order() {
    let conn = setup_db();
    let base = species::insert(&conn, &pikachu()).unwrap();
    let belle = species::insert(&conn, &pikachu_belle()).unwrap();
    species::insert(&conn, &raichu()).unwrap();

    let forms = species::find_by_dexno(&conn, TEST_SPECIES_DEXNO).unwrap();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].dbid, base);
    assert_eq!(forms[1].dbid, belle);
    assert_eq!(forms[1].form_name.as_deref(), Some("Belle"));

    assert!(species::find_by_dexno(&conn, -1).unwrap().is_empty());
}

#[test]
fn find_by_dbid() {
    let conn = setup_db();
    let dbid = species::insert(&conn, &raichu()).unwrap();

    assert_eq!(
        species::find_by_dbid(&conn, dbid).unwrap().map(|s| s.name),
        Some(TEST_NEXT_DEX_NAME.to_string())
    );
    assert!(species::find_by_dbid(&conn, dbid + 100).unwrap().is_none());
}

#[test]
fn max_dexno_and_names() {
    let conn = setup_db();
    assert_eq!(species::find_max_dexno(&conn).unwrap(), None);
    assert!(species::find_all_names(&conn).unwrap().is_empty());

    species::insert(&conn, &pikachu()).unwrap();
    species::insert(&conn, &raichu()).unwrap();
    species::insert(&conn, &arbok()).unwrap();

    assert_eq!(species::find_max_dexno(&conn).unwrap(), Some(TEST_SPECIES_DEXNO + 1));
    assert_eq!(
        species::find_all_names(&conn).unwrap(),
        vec![TEST_SPECIES_NAME, TEST_NEXT_DEX_NAME, TEST_PREV_DEX_NAME]
    );
    assert_eq!(species::count(&conn).unwrap(), 3);
}

#[test]
fn update_and_delete() {
    let conn = setup_db();
    let dbid = species::insert(&conn, &pikachu()).unwrap();

    let mut updated = species::find_by_dbid(&conn, dbid).unwrap().unwrap();
    updated.speed = 120;
    updated.type2 = Some("FAIRY".to_string());
    assert_eq!(species::update(&conn, &updated).unwrap(), 1);

    let reread = species::find_by_dbid(&conn, dbid).unwrap().unwrap();
    assert_eq!(reread, updated);

    assert_eq!(species::delete(&conn, dbid).unwrap(), 1);
    assert_eq!(species::delete(&conn, dbid).unwrap(), 0);
    assert!(species::find_by_dbid(&conn, dbid).unwrap().is_none());
}

#[test]
fn cosmetic_forms_by_species() {
    let conn = setup_db();
    let dbid = species::insert(&conn, &pikachu()).unwrap();
    let other = species::insert(&conn, &raichu()).unwrap();
    cosmetic_forms::insert(&conn, &spiky_eared_pikachu(dbid)).unwrap();

    let forms = cosmetic_forms::find_by_species_dbid(&conn, dbid).unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].name, TEST_COSMETIC_FORM_NAME);
    assert_eq!(forms[0].species_dbid, dbid);

    assert!(cosmetic_forms::find_by_species_dbid(&conn, other).unwrap().is_empty());
}

#[test]
fn cosmetic_form_requires_existing_species() {
    let conn = setup_db();
    let err = cosmetic_forms::insert(&conn, &spiky_eared_pikachu(42)).unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation { .. }));
}

#[test]
fn species_attacks_join_names_in_insertion_order() {
    let conn = setup_db();
    let dbid = species::insert(&conn, &pikachu()).unwrap();
    let thunder_id = attacks::insert(&conn, &thunder()).unwrap();
    let shock_id = attacks::insert(&conn, &thundershock()).unwrap();

    species_attacks::insert(&conn, dbid, shock_id, "LEVEL-UP").unwrap();
    species_attacks::insert(&conn, dbid, thunder_id, "TM").unwrap();

    let moves = species_attacks::find_by_species_dbid(&conn, dbid).unwrap();
    let names: Vec<(&str, &str)> = moves
        .iter()
        .map(|m| (m.attack_name.as_str(), m.method.as_str()))
        .collect();
    assert_eq!(names, vec![(TEST_ATTACK_1_NAME, "LEVEL-UP"), (TEST_ATTACK_2_NAME, "TM")]);

    // One method per (species, attack)
    let err = species_attacks::insert(&conn, dbid, shock_id, "TM").unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation { .. }));
}

#[test]
fn deleting_species_cascades_to_associations() {
    let conn = setup_db();
    let dbid = species::insert(&conn, &pikachu()).unwrap();
    let attack_id = attacks::insert(&conn, &volt_tackle()).unwrap();
    species_attacks::insert(&conn, dbid, attack_id, "SPECIAL").unwrap();
    cosmetic_forms::insert(&conn, &spiky_eared_pikachu(dbid)).unwrap();

    species::delete(&conn, dbid).unwrap();

    assert!(species_attacks::find_by_species_dbid(&conn, dbid).unwrap().is_empty());
    assert!(cosmetic_forms::find_by_species_dbid(&conn, dbid).unwrap().is_empty());
    // The attack itself survives
    assert!(attacks::find_by_name(&conn, TEST_ATTACK_3_NAME).unwrap().is_some());
}

#[test]
fn species_abilities_list_hidden_last() {
    let conn = setup_db();
    let dbid = species::insert(&conn, &pikachu()).unwrap();
    let rod = urpg_storage::queries::abilities::insert(&conn, &lightning_rod()).unwrap();
    let stat = urpg_storage::queries::abilities::insert(&conn, &static_ability()).unwrap();

    species_abilities::insert(&conn, dbid, rod, true).unwrap();
    species_abilities::insert(&conn, dbid, stat, false).unwrap();

    let abilities = species_abilities::find_by_species_dbid(&conn, dbid).unwrap();
    assert_eq!(abilities.len(), 2);
    assert_eq!(abilities[0].ability_name, TEST_ABILITY_NAME);
    assert!(!abilities[0].hidden);
    assert_eq!(abilities[1].ability_name, TEST_HIDDEN_ABILITY_NAME);
    assert!(abilities[1].hidden);
}

#[test]
fn exact_name_lookup_reports_duplicate_names() {
    // Legacy layout: same columns, no unique index on name.
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE species (
            dbid INTEGER PRIMARY KEY AUTOINCREMENT,
            dexno INTEGER NOT NULL,
            name TEXT NOT NULL COLLATE NOCASE,
            display_name TEXT NOT NULL,
            form_name TEXT,
            type1 TEXT NOT NULL,
            type2 TEXT,
            hp INTEGER NOT NULL DEFAULT 0,
            attack INTEGER NOT NULL DEFAULT 0,
            defense INTEGER NOT NULL DEFAULT 0,
            special_attack INTEGER NOT NULL DEFAULT 0,
            special_defense INTEGER NOT NULL DEFAULT 0,
            speed INTEGER NOT NULL DEFAULT 0
        );",
    )
    .unwrap();

    species::insert(&conn, &pikachu()).unwrap();
    species::insert(&conn, &pikachu()).unwrap();

    let err = species::find_by_name(&conn, "PIKACHU").unwrap_err();
    assert!(
        matches!(err, StorageError::AmbiguousResult { count: 2, .. }),
        "expected AmbiguousResult, got {err:?}"
    );

    // Prefix search is a list lookup and still returns both rows in store order.
    let matches = species::find_by_name_starting_with(&conn, "Pika").unwrap();
    let dbids: Vec<i64> = matches.iter().map(|s| s.dbid).collect();
    assert_eq!(dbids, vec![1, 2]);
}
