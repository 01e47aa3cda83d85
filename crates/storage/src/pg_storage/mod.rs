//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

#![allow(clippy::absolute_paths, reason = "std paths in error handling are clear")]

mod languages;
mod pairs;
mod sayings;
mod suggestions;
mod votes;

use proverbia_core::constants::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use proverbia_core::{PairKey, SayingId, TranslationPair};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use super::pg_migrations::run_pg_migrations;
use crate::error::StorageError;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Escape special characters for LIKE pattern matching
pub(crate) fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
/// Saturates to `i64::MAX` on overflow (only possible on 128-bit targets).
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) fn count_from_i64(val: i64) -> u64 {
    u64::try_from(val).unwrap_or_default()
}

pub(crate) const PAIR_COLUMNS: &str = "p.id, p.saying_low_id, p.saying_high_id, p.created_at";

pub(crate) fn row_to_pair(row: &sqlx::postgres::PgRow) -> Result<TranslationPair, StorageError> {
    let low = SayingId(row.try_get("saying_low_id")?);
    let high = SayingId(row.try_get("saying_high_id")?);
    let key = PairKey::new(low, high)
        .map_err(|e| StorageError::corrupt(format!("pair ({low}, {high}) is not ordered"), e))?;
    Ok(TranslationPair {
        id: row.try_get::<i64, _>("id")?.into(),
        key,
        created_at: row.try_get("created_at")?,
    })
}
