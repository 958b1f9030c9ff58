//! SQLite schema definitions and migrations.

use rusqlite::Connection;

use crate::error::StorageResult;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, 1)?;
        migrate_schema(conn, 1)?;
    } else if current_version < SCHEMA_VERSION {
        migrate_schema(conn, current_version)?;
    }

    Ok(())
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Create the initial schema (version 1).
///
/// One table per record collection. The `patient_id` and `encounter_id`
/// reference columns intentionally carry no foreign key constraint.
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS patients (
            id TEXT PRIMARY KEY,
            surname TEXT,
            other_names TEXT,
            gender TEXT,
            phone_number TEXT,
            residential_address TEXT,
            emergency_contact TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS encounters (
            id TEXT PRIMARY KEY,
            patient_id TEXT NOT NULL,
            date_and_time TEXT NOT NULL,
            encounter_type TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS vitals (
            id TEXT PRIMARY KEY,
            encounter_id TEXT NOT NULL,
            blood_pressure TEXT,
            temperature REAL,
            pulse REAL,
            sp_o2 REAL
        )",
        [],
    )?;

    // Lookup indexes for the two join legs
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_encounters_patient
            ON encounters (patient_id)",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_vitals_encounter
            ON vitals (encounter_id)",
        [],
    )?;

    Ok(())
}

/// Run migrations from the given version up to [`SCHEMA_VERSION`].
fn migrate_schema(conn: &Connection, from_version: i32) -> StorageResult<()> {
    let mut version = from_version;

    // v1 is current; future migrations dispatch on `version` here.
    while version < SCHEMA_VERSION {
        version += 1;
        set_schema_version(conn, version)?;
    }

    Ok(())
}
