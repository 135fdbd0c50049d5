//! Queries for the ability table.

use rusqlite::{params, Connection};
use urpg_core::errors::StorageError;
use urpg_core::models::Ability;

use super::prefix_pattern;
use crate::to_storage_err;

/// Insert an ability. `ability.dbid` is ignored. Returns the new dbid.
pub fn insert(conn: &Connection, ability: &Ability) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO ability (name, description) VALUES (?1, ?2)",
        params![ability.name, ability.description],
    )
    .map_err(to_storage_err)?;
    Ok(conn.last_insert_rowid())
}

/// Exact (case-insensitive) name lookup.
pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Ability>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT dbid, name, description FROM ability
             WHERE name = ?1 ORDER BY dbid ASC LIMIT 2",
        )
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
            key: format!("ability.name={name}"),
            count,
        }),
    }
}

/// Abilities whose name starts with `prefix`, in store order.
pub fn find_by_name_starting_with(
    conn: &Connection,
    prefix: &str,
) -> Result<Vec<Ability>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT dbid, name, description FROM ability
             WHERE name LIKE ?1 ESCAPE '\\' ORDER BY dbid ASC",
        )
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map(params![prefix_pattern(prefix)], map_row)
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

pub fn find_all_names(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT name FROM ability ORDER BY dbid ASC")
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}

fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Ability> {
    Ok(Ability {
        dbid: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}
