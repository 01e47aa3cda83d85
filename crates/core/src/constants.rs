//! Shared constants for proverbia.
//!
//! Centralizes limits and pool settings used by more than one crate.

/// Maximum number of results for any query (DoS protection).
pub const MAX_QUERY_LIMIT: usize = 100;

/// Default number of search results when the caller does not specify a limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Canonical search terms shorter than this (in characters) match nothing.
pub const MIN_SEARCH_TERM_CHARS: usize = 2;

/// Default number of pairs handed out per review batch.
pub const REVIEW_BATCH_SIZE: usize = 10;

/// Upper bound for a caller-supplied review batch size.
pub const MAX_REVIEW_BATCH_SIZE: usize = 100;

/// Bounds on a saying's display text, counted in characters after whitespace
/// normalization.
pub const MIN_SAYING_CHARS: usize = 1;
pub const MAX_SAYING_CHARS: usize = 300;

/// z-score for a 95% two-sided confidence level.
pub const WILSON_Z_95: f64 = 1.96;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// SQLite busy timeout in milliseconds.
pub const SQLITE_BUSY_TIMEOUT_MS: u32 = 30_000;
