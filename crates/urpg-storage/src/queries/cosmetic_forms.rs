//! Queries for the cosmetic_form table.

use rusqlite::{params, Connection};
use urpg_core::errors::StorageError;
use urpg_core::models::CosmeticForm;

use crate::to_storage_err;

/// Insert a cosmetic form. `form.dbid` is ignored. Returns the new dbid.
pub fn insert(conn: &Connection, form: &CosmeticForm) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO cosmetic_form (species_dbid, name, display_name) VALUES (?1, ?2, ?3)",
        params![form.species_dbid, form.name, form.display_name],
    )
    .map_err(to_storage_err)?;
    Ok(conn.last_insert_rowid())
}

/// Cosmetic forms owned by a species, in store order.
pub fn find_by_species_dbid(
    conn: &Connection,
    species_dbid: i64,
) -> Result<Vec<CosmeticForm>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT dbid, species_dbid, name, display_name
             FROM cosmetic_form WHERE species_dbid = ?1 ORDER BY dbid ASC",
        )
        .map_err(to_storage_err)?;

    let rows = stmt
        .query_map(params![species_dbid], |row| {
            Ok(CosmeticForm {
                dbid: row.get(0)?,
                species_dbid: row.get(1)?,
                name: row.get(2)?,
                display_name: row.get(3)?,
            })
        })
        .map_err(to_storage_err)?;

    rows.collect::<Result<Vec<_>, _>>().map_err(to_storage_err)
}
