//! Queries for the attack table.

use rusqlite::{params, Connection};
use urpg_core::errors::StorageError;
use urpg_core::models::Attack;

use super::prefix_pattern;
use crate::to_storage_err;

const SELECT_COLUMNS: &str =
    "SELECT dbid, name, attack_type, power, accuracy, pp, category, description FROM attack";

/// Insert an attack. `attack.dbid` is ignored. Returns the new dbid.
pub fn insert(conn: &Connection, attack: &Attack) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO attack (name, attack_type, power, accuracy, pp, category, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            attack.name,
            attack.attack_type,
            attack.power,
            attack.accuracy,
            attack.pp,
            attack.category,
            attack.description,
        ],
    )
    .map_err(to_storage_err)?;
    Ok(conn.last_insert_rowid())
}

/// Exact (case-insensitive) name lookup.
pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Attack>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} WHERE name = ?1 ORDER BY dbid ASC LIMIT 2"))
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
            key: format!("attack.name={name}"),
            count,
        }),
    }
}

/// Attacks whose name starts with `prefix`, in store order.
pub fn find_by_name_starting_with(
    conn: &Connection,
    prefix: &str,
) -> Result<Vec<Attack>, StorageError> {
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

pub fn find_all_names(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT name FROM attack ORDER BY dbid ASC")
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Attack> {
    Ok(Attack {
        dbid: row.get(0)?,
        name: row.get(1)?,
        attack_type: row.get(2)?,
        power: row.get(3)?,
        accuracy: row.get(4)?,
        pp: row.get(5)?,
        category: row.get(6)?,
        description: row.get(7)?,
    })
}
