//! V001: species, cosmetic forms, attacks and the species ↔ attack link.
//! Names compare case-insensitively (`COLLATE NOCASE`) for exact and prefix lookups.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS species (
    dbid INTEGER PRIMARY KEY AUTOINCREMENT,
    dexno INTEGER NOT NULL CHECK (dexno >= 1),
    name TEXT NOT NULL COLLATE NOCASE UNIQUE,
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
) STRICT;

CREATE INDEX IF NOT EXISTS idx_species_dexno ON species(dexno);

-- Visual-only variants, owned by one species.
CREATE TABLE IF NOT EXISTS cosmetic_form (
    dbid INTEGER PRIMARY KEY AUTOINCREMENT,
    species_dbid INTEGER NOT NULL REFERENCES species(dbid) ON DELETE CASCADE,
    name TEXT NOT NULL COLLATE NOCASE UNIQUE,
    display_name TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_cosmetic_form_species ON cosmetic_form(species_dbid);

CREATE TABLE IF NOT EXISTS attack (
    dbid INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL COLLATE NOCASE UNIQUE,
    attack_type TEXT NOT NULL,
    power INTEGER,
    accuracy INTEGER,
    pp INTEGER NOT NULL DEFAULT 0,
    category TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT ''
) STRICT;

-- One acquisition method per (species, attack).
CREATE TABLE IF NOT EXISTS species_attack (
    dbid INTEGER PRIMARY KEY AUTOINCREMENT,
    species_dbid INTEGER NOT NULL REFERENCES species(dbid) ON DELETE CASCADE,
    attack_dbid INTEGER NOT NULL REFERENCES attack(dbid) ON DELETE CASCADE,
    method TEXT NOT NULL,
    UNIQUE (species_dbid, attack_dbid)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_species_attack_species ON species_attack(species_dbid);
"#;
