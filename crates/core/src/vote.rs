//! Per-user vote state on a translation pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::{PairId, UserId, VoteId};
use crate::ranking::confidence;

/// A stored or requested vote value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum VoteValue {
    Down,
    Neutral,
    Up,
}

impl VoteValue {
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Down => -1,
            Self::Neutral => 0,
            Self::Up => 1,
        }
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Down),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Up),
            other => Err(CoreError::InvalidVoteValue(other)),
        }
    }
}

impl From<VoteValue> for i64 {
    fn from(value: VoteValue) -> Self {
        value.as_i64()
    }
}

impl std::fmt::Display for VoteValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// Where a user stands on one pair.
///
/// `NoVote` means no row exists. `Retracted` means a row exists with value 0;
/// it is kept so the pair stays out of that user's review queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteState {
    NoVote,
    Upvoted,
    Downvoted,
    Retracted,
}

impl VoteState {
    /// State for a stored row value, or `NoVote` when there is no row.
    #[must_use]
    pub const fn from_stored(stored: Option<VoteValue>) -> Self {
        match stored {
            None => Self::NoVote,
            Some(VoteValue::Up) => Self::Upvoted,
            Some(VoteValue::Down) => Self::Downvoted,
            Some(VoteValue::Neutral) => Self::Retracted,
        }
    }

    /// Toggle transition: repeating the stored vote retracts it, anything else
    /// replaces it. Casting `Neutral` always retracts.
    #[must_use]
    pub const fn cast(self, requested: VoteValue) -> Self {
        match (self, requested) {
            (Self::Upvoted, VoteValue::Up)
            | (Self::Downvoted, VoteValue::Down)
            | (_, VoteValue::Neutral) => Self::Retracted,
            (_, VoteValue::Up) => Self::Upvoted,
            (_, VoteValue::Down) => Self::Downvoted,
        }
    }

    /// Value as stored (and as reported to the user).
    #[must_use]
    pub const fn value(self) -> VoteValue {
        match self {
            Self::Upvoted => VoteValue::Up,
            Self::Downvoted => VoteValue::Down,
            Self::NoVote | Self::Retracted => VoteValue::Neutral,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoVote => "no_vote",
            Self::Upvoted => "upvoted",
            Self::Downvoted => "downvoted",
            Self::Retracted => "retracted",
        }
    }
}

impl std::fmt::Display for VoteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's vote row after a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub id: VoteId,
    pub user_id: UserId,
    pub pair_id: PairId,
    pub value: VoteValue,
    pub state: VoteState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Non-zero vote counts for a pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub upvotes: u64,
    pub downvotes: u64,
}

impl Tally {
    #[must_use]
    pub const fn new(upvotes: u64, downvotes: u64) -> Self {
        Self { upvotes, downvotes }
    }

    #[must_use]
    pub fn confidence(&self) -> f64 {
        confidence(self.upvotes, self.downvotes)
    }
}
