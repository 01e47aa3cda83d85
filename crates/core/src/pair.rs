use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::{PairId, SayingId};

/// Order-independent identity of a translation pair.
///
/// `low < high` always holds, so `(a, b)` and `(b, a)` produce the same key.
/// Deserialization goes through [`PairKey::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPairKey")]
pub struct PairKey {
    low: SayingId,
    high: SayingId,
}

impl PairKey {
    pub fn new(a: SayingId, b: SayingId) -> Result<Self, CoreError> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(CoreError::SameSaying),
        }
    }

    #[must_use]
    pub const fn low(&self) -> SayingId {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> SayingId {
        self.high
    }

    #[must_use]
    pub fn contains(&self, saying: SayingId) -> bool {
        self.low == saying || self.high == saying
    }

    /// The member that is not `saying`, or `None` if `saying` is not in the pair.
    #[must_use]
    pub fn other(&self, saying: SayingId) -> Option<SayingId> {
        if saying == self.low {
            Some(self.high)
        } else if saying == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
struct RawPairKey {
    low: SayingId,
    high: SayingId,
}

impl TryFrom<RawPairKey> for PairKey {
    type Error = CoreError;

    fn try_from(raw: RawPairKey) -> Result<Self, Self::Error> {
        Self::new(raw.low, raw.high)
    }
}

/// A stored translation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationPair {
    pub id: PairId,
    pub key: PairKey,
    pub created_at: DateTime<Utc>,
}

impl TranslationPair {
    #[must_use]
    pub const fn saying_low_id(&self) -> SayingId {
        self.key.low
    }

    #[must_use]
    pub const fn saying_high_id(&self) -> SayingId {
        self.key.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_order_independent() {
        let ab = PairKey::new(SayingId(7), SayingId(3)).expect("distinct");
        let ba = PairKey::new(SayingId(3), SayingId(7)).expect("distinct");
        assert_eq!(ab, ba);
        assert_eq!(ab.low(), SayingId(3));
        assert_eq!(ab.high(), SayingId(7));
    }

    #[test]
    fn same_saying_is_rejected() {
        assert_eq!(PairKey::new(SayingId(4), SayingId(4)), Err(CoreError::SameSaying));
    }

    #[test]
    fn deserialization_validates_the_key() {
        let key: PairKey = serde_json::from_str(r#"{"low":9,"high":4}"#).expect("distinct");
        assert_eq!((key.low(), key.high()), (SayingId(4), SayingId(9)));
        assert!(serde_json::from_str::<PairKey>(r#"{"low":4,"high":4}"#).is_err());
    }

    #[test]
    fn other_member() {
        let key = PairKey::new(SayingId(1), SayingId(2)).expect("distinct");
        assert_eq!(key.other(SayingId(1)), Some(SayingId(2)));
        assert_eq!(key.other(SayingId(2)), Some(SayingId(1)));
        assert_eq!(key.other(SayingId(9)), None);
        assert!(key.contains(SayingId(2)));
        assert!(!key.contains(SayingId(3)));
    }
}
