//! Typed error enum for the storage layer.
//!
//! Both backends map their driver errors into the same variants so callers can
//! match on not-found, duplicate and transient failures without knowing which
//! database is underneath.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity, or a foreign key pointing
    /// at a missing row.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Lock contention or pool exhaustion. Worth retrying.
    #[error("database busy: {0}")]
    Busy(String),

    /// SQL / connection failure.
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Row data could not be converted into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Busy(_))
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn corrupt(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataCorruption { context: context.into(), source: Box::new(source) }
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Database(Box::new(err))
    }
}

/// Custom `From<sqlx::Error>`, not a blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - SQLSTATE 23505 → `Duplicate`
/// - SQLSTATE 23503 → `NotFound`
/// - SQLSTATE 40001 / 40P01 and pool timeouts → `Busy`
/// - Everything else → `Database`
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        let sqlstate = match &err {
            sqlx::Error::RowNotFound => {
                return Self::NotFound { entity: "row", id: "unknown".into() };
            },
            sqlx::Error::PoolTimedOut => {
                return Self::Busy("connection pool timed out".into());
            },
            sqlx::Error::Database(db_err) => {
                db_err.code().map(|code| (code.into_owned(), db_err.message().to_owned()))
            },
            _ => None,
        };
        match sqlstate {
            Some((code, message)) => match code.as_str() {
                "23505" => Self::Duplicate(message),
                "23503" => Self::NotFound { entity: "referenced row", id: message },
                "40001" | "40P01" => Self::Busy(message),
                _ => Self::Database(Box::new(err)),
            },
            None => Self::Database(Box::new(err)),
        }
    }
}

/// Custom `From<rusqlite::Error>` mirroring the PostgreSQL mapping.
#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ffi;

        let failure = match &err {
            rusqlite::Error::QueryReturnedNoRows => {
                return Self::NotFound { entity: "row", id: "unknown".into() };
            },
            rusqlite::Error::SqliteFailure(failure, message) => {
                Some((*failure, message.clone().unwrap_or_else(|| failure.to_string())))
            },
            _ => None,
        };
        let Some((failure, detail)) = failure else {
            return Self::Database(Box::new(err));
        };
        match failure.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                Self::Duplicate(detail)
            },
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                Self::NotFound { entity: "referenced row", id: detail }
            },
            _ if matches!(failure.code, ffi::ErrorCode::DatabaseBusy | ffi::ErrorCode::DatabaseLocked) => {
                Self::Busy(detail)
            },
            _ => Self::Database(Box::new(err)),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Busy(format!("failed to get connection from pool: {err}"))
    }
}
