//! Tests for ability and attack name lookups.

use rusqlite::Connection;
use test_fixtures::*;
use urpg_storage::migrations::run_migrations;
use urpg_storage::queries::{abilities, attacks};

fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    conn
}

#[test]
fn attack_exact_and_prefix() {
    let conn = setup_db();
    let shock = attacks::insert(&conn, &thundershock()).unwrap();
    let thunder_id = attacks::insert(&conn, &thunder()).unwrap();
    attacks::insert(&conn, &icicle_crash()).unwrap();

    let exact = attacks::find_by_name(&conn, "thunder").unwrap().unwrap();
    assert_eq!(exact.dbid, thunder_id);
    assert_eq!(exact.power, Some(110));
    assert_eq!(exact.accuracy, Some(70));

    let prefixed = attacks::find_by_name_starting_with(&conn, "Thund").unwrap();
    let dbids: Vec<i64> = prefixed.iter().map(|a| a.dbid).collect();
    assert_eq!(dbids, vec![shock, thunder_id]);

    assert_eq!(
        attacks::find_all_names(&conn).unwrap(),
        vec![TEST_ATTACK_1_NAME, TEST_ATTACK_2_NAME, TEST_ATTACK_4_NAME]
    );
}

#[test]
fn attack_with_no_power_roundtrips_null() {
    let conn = setup_db();
    let mut growl = thundershock();
    growl.name = "Growl".to_string();
    growl.power = None;
    growl.category = "STATUS".to_string();
    attacks::insert(&conn, &growl).unwrap();

    let found = attacks::find_by_name(&conn, "Growl").unwrap().unwrap();
    assert_eq!(found.power, None);
    assert_eq!(found.category, "STATUS");
}

#[test]
fn ability_exact_and_prefix() {
    let conn = setup_db();
    assert!(abilities::find_by_name(&conn, TEST_ABILITY_NAME).unwrap().is_none());

    let stat = abilities::insert(&conn, &static_ability()).unwrap();
    abilities::insert(&conn, &lightning_rod()).unwrap();

    assert_eq!(abilities::find_by_name(&conn, "STATIC").unwrap().map(|a| a.dbid), Some(stat));
    assert_eq!(abilities::find_by_name_starting_with(&conn, "Light").unwrap().len(), 1);
    assert!(abilities::find_by_name_starting_with(&conn, "Levitate").unwrap().is_empty());
    assert_eq!(
        abilities::find_all_names(&conn).unwrap(),
        vec![TEST_ABILITY_NAME, TEST_HIDDEN_ABILITY_NAME]
    );
}
