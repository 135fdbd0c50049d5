//! Queries for the species_attack link table.

use rusqlite::{params, Connection};
use urpg_core::errors::StorageError;
use urpg_core::models::SpeciesAttack;

use crate::to_storage_err;

pub fn insert(
    conn: &Connection,
    species_dbid: i64,
    attack_dbid: i64,
    method: &str,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO species_attack (species_dbid, attack_dbid, method) VALUES (?1, ?2, ?3)",
        params![species_dbid, attack_dbid, method],
    )
    .map_err(to_storage_err)?;
    Ok(())
}

/// A species' move list joined with attack names, in insertion order.
pub fn find_by_species_dbid(
    conn: &Connection,
    species_dbid: i64,
) -> Result<Vec<SpeciesAttack>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT sa.species_dbid, sa.attack_dbid, a.name, sa.method
             FROM species_attack sa
             JOIN attack a ON a.dbid = sa.attack_dbid
             WHERE sa.species_dbid = ?1
             ORDER BY sa.dbid ASC",
        )
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map(params![species_dbid], |row| {
            Ok(SpeciesAttack {
                species_dbid: row.get(0)?,
                attack_dbid: row.get(1)?,
                attack_name: row.get(2)?,
                method: row.get(3)?,
            })
        })
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}
