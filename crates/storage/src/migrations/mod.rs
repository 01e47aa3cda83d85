#![allow(
    clippy::redundant_pub_crate,
    reason = "migrations module is private, pub(crate) is intentional"
)]

mod v1;
mod v2;

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 2;

/// Bring the schema up to [`SCHEMA_VERSION`], tracking progress in
/// `PRAGMA user_version`. Each step runs in its own transaction.
pub fn run_migrations(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: languages, sayings, translation pairs, votes");
        apply(conn, 1, v1::SQL)?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: suggested translations");
        apply(conn, 2, v2::SQL)?;
    }

    Ok(())
}

fn apply(conn: &mut Connection, version: i32, sql: &str) -> Result<(), rusqlite::Error> {
    let tx = conn.transaction()?;
    tx.execute_batch(sql)?;
    tx.pragma_update(None, "user_version", version)?;
    tx.commit()
}
