//! Queries for the species table.

use rusqlite::{params, Connection, OptionalExtension};
use urpg_core::errors::StorageError;
use urpg_core::models::Species;

use super::prefix_pattern;
use crate::to_storage_err;

const SELECT_COLUMNS: &str = "SELECT dbid, dexno, name, display_name, form_name, type1, type2,
        hp, attack, defense, special_attack, special_defense, speed
     FROM species";

/// Insert a species. `species.dbid` is ignored. Returns the new dbid.
pub fn insert(conn: &Connection, species: &Species) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO species (dexno, name, display_name, form_name, type1, type2,
                              hp, attack, defense, special_attack, special_defense, speed)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            species.dexno,
            species.name,
            species.display_name,
            species.form_name,
            species.type1,
            species.type2,
            species.hp,
            species.attack,
            species.defense,
            species.special_attack,
            species.special_defense,
            species.speed,
        ],
    )
    .map_err(to_storage_err)?;
    Ok(conn.last_insert_rowid())
}

/// Update every column of an existing species. Returns rows affected (0 or 1).
pub fn update(conn: &Connection, species: &Species) -> Result<usize, StorageError> {
    conn.execute(
        "UPDATE species SET
            dexno = ?1, name = ?2, display_name = ?3, form_name = ?4, type1 = ?5, type2 = ?6,
            hp = ?7, attack = ?8, defense = ?9, special_attack = ?10,
            special_defense = ?11, speed = ?12
         WHERE dbid = ?13",
        params![
            species.dexno,
            species.name,
            species.display_name,
            species.form_name,
            species.type1,
            species.type2,
            species.hp,
            species.attack,
            species.defense,
            species.special_attack,
            species.special_defense,
            species.speed,
            species.dbid,
        ],
    )
    .map_err(to_storage_err)
}

/// Delete a species; its forms and associations cascade. Returns rows affected.
pub fn delete(conn: &Connection, dbid: i64) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM species WHERE dbid = ?1", params![dbid])
        .map_err(to_storage_err)
}

/// Exact (case-insensitive) name lookup.
///
/// Fetches up to two rows so a store without the unique index still reports
/// an ambiguous name instead of silently picking one.
pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Species>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE name = ?1 ORDER BY dbid ASC LIMIT 2"
        ))
        .map_err(to_storage_err)?;

    let mut rows = stmt
        .query_map(params![name], map_row)
        .map_err(to_storage_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_storage_err)?;

    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        count => Err(StorageError::AmbiguousResult {
            key: format!("species.name={name}"),
            count,
        }),
    }
}

/// Species whose name starts with `prefix`, in store order.
pub fn find_by_name_starting_with(
    conn: &Connection,
    prefix: &str,
) -> Result<Vec<Species>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE name LIKE ?1 ESCAPE '\\' ORDER BY dbid ASC"
        ))
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map(params![prefix_pattern(prefix)], map_row)
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// All species sharing a catalog index, in store order.
pub fn find_by_dexno(conn: &Connection, dexno: i32) -> Result<Vec<Species>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} WHERE dexno = ?1 ORDER BY dbid ASC"))
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map(params![dexno], map_row)
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

pub fn find_by_dbid(conn: &Connection, dbid: i64) -> Result<Option<Species>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} WHERE dbid = ?1"))
        .map_err(to_storage_err)?;

    stmt.query_row(params![dbid], map_row)
        .optional()
        .map_err(to_storage_err)
}

/// Highest catalog index in the store, or None when empty.
pub fn find_max_dexno(conn: &Connection) -> Result<Option<i32>, StorageError> {
    conn.query_row("SELECT MAX(dexno) FROM species", [], |row| row.get(0))
        .map_err(to_storage_err)
}

/// Every species name, in store order.
pub fn find_all_names(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT name FROM species ORDER BY dbid ASC")
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

/// Count total species.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM species", [], |row| row.get(0))
        .map_err(to_storage_err)
}

fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Species> {
    Ok(Species {
        dbid: row.get(0)?,
        dexno: row.get(1)?,
        name: row.get(2)?,
        display_name: row.get(3)?,
        form_name: row.get(4)?,
        type1: row.get(5)?,
        type2: row.get(6)?,
        hp: row.get(7)?,
        attack: row.get(8)?,
        defense: row.get(9)?,
        special_attack: row.get(10)?,
        special_defense: row.get(11)?,
        speed: row.get(12)?,
    })
}
