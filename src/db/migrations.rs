use super::schema::SCHEMA;
use crate::constants::SCHEMA_VERSION;
use rusqlite::{Connection, Result};

pub fn run(conn: &Connection) -> Result<()> {
    let version = user_version(conn)?;
    if version > SCHEMA_VERSION {
        log::warn!(
            "Database schema version {version} is newer than supported version {SCHEMA_VERSION}"
        );
    }

    conn.execute_batch(SCHEMA)?;

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        log::info!("Migrated database schema from version {version} to {SCHEMA_VERSION}");
    }
    Ok(())
}

pub fn user_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}
