//! V002: abilities and the species ↔ ability link.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS ability (
    dbid INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL COLLATE NOCASE UNIQUE,
    description TEXT NOT NULL DEFAULT ''
) STRICT;

CREATE TABLE IF NOT EXISTS species_ability (
    dbid INTEGER PRIMARY KEY AUTOINCREMENT,
    species_dbid INTEGER NOT NULL REFERENCES species(dbid) ON DELETE CASCADE,
    ability_dbid INTEGER NOT NULL REFERENCES ability(dbid) ON DELETE CASCADE,
    hidden INTEGER NOT NULL DEFAULT 0,
    UNIQUE (species_dbid, ability_dbid)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_species_ability_species ON species_ability(species_dbid);
"#;
