//! Typed row identifiers.
//!
//! All ids are 64-bit database keys. Wrapping them keeps a `SayingId` from being
//! passed where a `PairId` is expected.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                Self(v)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(LanguageId);
define_id!(SayingId);
define_id!(
    /// Identifier of an unordered translation pair.
    PairId
);
define_id!(
    /// Identifier of a user in the surrounding application. Users live outside
    /// this system; only their ids are stored.
    UserId
);
define_id!(VoteId);
define_id!(SuggestionId);
