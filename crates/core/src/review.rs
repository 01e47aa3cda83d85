use serde::{Deserialize, Serialize};

use crate::ids::{LanguageId, PairId};
use crate::saying::Saying;
use crate::vote::VoteValue;

/// One pair handed to a reviewer, already in presentation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewItem {
    pub pair_id: PairId,
    pub first: Saying,
    pub second: Saying,
    pub upvotes: u64,
    pub downvotes: u64,
    /// The reviewer's current vote, `Neutral` for anonymous reviewers.
    pub user_value: VoteValue,
}

/// Order the two sayings of a pair for display.
///
/// The saying in the default source language goes first. When neither is in it,
/// the saying in `language_a` goes first.
#[must_use]
pub fn presentation_order<'a>(
    low: &'a Saying,
    high: &'a Saying,
    default_source: Option<LanguageId>,
    language_a: LanguageId,
) -> (&'a Saying, &'a Saying) {
    if let Some(source) = default_source {
        if low.language_id == source {
            return (low, high);
        }
        if high.language_id == source {
            return (high, low);
        }
    }
    if low.language_id == language_a { (low, high) } else { (high, low) }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::ids::SayingId;

    fn saying(id: i64, language: i64) -> Saying {
        let now = Utc::now();
        Saying {
            id: SayingId(id),
            language_id: LanguageId(language),
            raw_text: format!("saying {id}"),
            canonical_text: format!("saying {id}"),
            slug: format!("saying-{id}"),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn default_source_language_goes_first() {
        let en = saying(5, 1);
        let fa = saying(2, 2);
        let (first, second) = presentation_order(&fa, &en, Some(LanguageId(1)), LanguageId(2));
        assert_eq!(first.id, SayingId(5));
        assert_eq!(second.id, SayingId(2));
    }

    #[test]
    fn falls_back_to_language_a() {
        let fr = saying(1, 3);
        let fa = saying(2, 2);
        let (first, _) = presentation_order(&fr, &fa, Some(LanguageId(1)), LanguageId(2));
        assert_eq!(first.id, SayingId(2));
        let (first, _) = presentation_order(&fr, &fa, None, LanguageId(3));
        assert_eq!(first.id, SayingId(1));
    }
}
