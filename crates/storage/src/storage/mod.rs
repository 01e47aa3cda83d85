//! `SQLite` storage implementation
//!
//! All methods are synchronous. The async store traits are implemented on top of
//! these in `sqlite_async.rs`.

// SQLite uses i64 for ids and counts, Rust uses usize/u64 for limits and tallies
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]
#![allow(clippy::absolute_paths, reason = "std paths in error handling are clear")]

mod languages;
mod pairs;
mod sayings;
mod suggestions;
mod votes;

use std::path::Path;

use proverbia_core::constants::SQLITE_BUSY_TIMEOUT_MS;
use proverbia_core::env_config::env_parse_with_default;
use proverbia_core::{PairKey, SayingId, TranslationPair};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Escape special characters for LIKE pattern matching
pub(crate) fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Comma-separated `?` placeholders for an `IN (...)` list.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

pub(crate) fn count_from_i64(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

/// Map a `(id, saying_low_id, saying_high_id, created_at)` row to a pair.
pub(crate) fn map_pair(row: &rusqlite::Row<'_>) -> rusqlite::Result<TranslationPair> {
    let low = SayingId(row.get(1)?);
    let high = SayingId(row.get(2)?);
    let key = PairKey::new(low, high).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Integer, Box::new(e))
    })?;
    Ok(TranslationPair { id: row.get::<_, i64>(0)?.into(), key, created_at: row.get(3)? })
}

/// Custom connection initializer for integrity and concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(&format!(
        "PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS};
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;"
    ))?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("PROVERBIA_DB_POOL_SIZE", 8_u32).max(1)
}

impl Storage {
    /// Create new storage instance with `SQLite` connection pool
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map_err(|e| StorageError::Database(Box::new(e)))?;

        // Run migrations on first connection
        let mut conn = pool.get()?;
        migrations::run_migrations(&mut conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(path = %db_path.display(), pool_size, "Storage initialized with connection pool");

        Ok(Self { pool })
    }
}
