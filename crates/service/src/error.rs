//! Typed error enum for the service layer.
//!
//! Folds domain validation failures and storage failures into one type so
//! callers can tell not-found, invalid input and conflicts apart without
//! inspecting messages.

use proverbia_core::{CoreError, SayingId};
use proverbia_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A pair was requested with the same saying on both sides.
    #[error("a saying cannot be paired with itself")]
    SameSaying,

    /// The unordered pair is already registered.
    #[error("translation pair ({low}, {high}) already exists")]
    DuplicatePair { low: SayingId, high: SayingId },

    /// A saying with the same canonical text already exists in that language.
    #[error("saying already exists: {0}")]
    DuplicateSaying(String),

    #[error("invalid vote value: {0}")]
    InvalidVoteValue(i64),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Caller provided invalid input (bad language code, empty text).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Storage operation failed (DB, duplicate, busy, etc.).
    #[error("storage: {0}")]
    Storage(#[source] StorageError),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }

    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::DuplicatePair { .. } | Self::DuplicateSaying(_) => true,
            Self::Storage(e) => e.is_duplicate(),
            _ => false,
        }
    }

    /// Whether the caller's request was malformed.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::SameSaying | Self::InvalidVoteValue(_) | Self::InvalidInput(_))
    }
}

/// Storage not-found errors become service not-found errors; everything else
/// is wrapped.
impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => Self::Storage(other),
        }
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SameSaying => Self::SameSaying,
            CoreError::InvalidVoteValue(value) => Self::InvalidVoteValue(value),
            CoreError::InvalidInput(message) => Self::InvalidInput(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_helpers() {
        assert!(ServiceError::SameSaying.is_invalid_input());
        assert!(ServiceError::from(CoreError::InvalidVoteValue(3)).is_invalid_input());
        assert!(
            ServiceError::DuplicatePair { low: SayingId(1), high: SayingId(2) }.is_conflict()
        );
        assert!(ServiceError::from(StorageError::Duplicate("x".into())).is_conflict());
        assert!(ServiceError::from(StorageError::Busy("locked".into())).is_transient());
        let missing = ServiceError::from(StorageError::NotFound { entity: "pair", id: "9".into() });
        assert!(missing.is_not_found());
        assert_eq!(missing.to_string(), "pair not found: 9");
    }
}
