//! Queries for the species_ability link table.

use rusqlite::{params, Connection};
use urpg_core::errors::StorageError;
use urpg_core::models::SpeciesAbility;

use crate::to_storage_err;

pub fn insert(
    conn: &Connection,
    species_dbid: i64,
    ability_dbid: i64,
    hidden: bool,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO species_ability (species_dbid, ability_dbid, hidden) VALUES (?1, ?2, ?3)",
        params![species_dbid, ability_dbid, hidden as i32],
    )
    .map_err(to_storage_err)?;
    Ok(())
}

/// A species' abilities; regular abilities first, then hidden, each in insertion order.
pub fn find_by_species_dbid(
    conn: &Connection,
    species_dbid: i64,
) -> Result<Vec<SpeciesAbility>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT sa.species_dbid, sa.ability_dbid, ab.name, sa.hidden
             FROM species_ability sa
             JOIN ability ab ON ab.dbid = sa.ability_dbid
             WHERE sa.species_dbid = ?1
             ORDER BY sa.hidden ASC, sa.dbid ASC",
        )
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map(params![species_dbid], |row| {
            Ok(SpeciesAbility {
                species_dbid: row.get(0)?,
                ability_dbid: row.get(1)?,
                ability_name: row.get(2)?,
                hidden: row.get::<_, i32>(3)? != 0,
            })
        })
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}
