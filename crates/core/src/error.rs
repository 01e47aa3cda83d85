use thiserror::Error;

/// Validation failures raised by pure domain logic.
///
/// Storage and service layers wrap these; nothing here touches I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A translation pair was requested with the same saying on both ends.
    #[error("a saying cannot be paired with itself")]
    SameSaying,

    /// A vote value outside `{-1, 0, 1}`.
    #[error("invalid vote value: {0}")]
    InvalidVoteValue(i64),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
