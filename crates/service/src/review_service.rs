//! Review queue sampling.
//!
//! Hands a reviewer a random batch of pairs between two languages that they
//! have not voted on yet, oriented for display.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use proverbia_core::constants::MAX_REVIEW_BATCH_SIZE;
use proverbia_core::{
    PairId, ReviewItem, Saying, SayingId, Settings, TranslationPair, UserId, VoteValue,
    presentation_order,
};
use proverbia_storage::StorageBackend;
use proverbia_storage::traits::{LanguageStore, PairStore, SayingStore, VoteStore};
use rand::seq::SliceRandom;

use crate::ServiceError;
use crate::saying_service::language_by_code;

pub struct ReviewService {
    storage: Arc<StorageBackend>,
    settings: Arc<Settings>,
}

impl ReviewService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>, settings: Arc<Settings>) -> Self {
        Self { storage, settings }
    }

    /// Sample up to `batch_size` pairs between `language_a` and `language_b`.
    ///
    /// A signed-in reviewer never sees a pair they have a vote row for, even a
    /// retracted one. Anonymous reviewers see every pair with a neutral vote.
    pub async fn sample_for_review(
        &self,
        user: Option<UserId>,
        language_a: &str,
        language_b: &str,
        batch_size: Option<usize>,
    ) -> Result<Vec<ReviewItem>, ServiceError> {
        let lang_a = language_by_code(&self.storage, language_a).await?;
        let lang_b = language_by_code(&self.storage, language_b).await?;
        let batch_size =
            batch_size.unwrap_or(self.settings.review_batch_size).min(MAX_REVIEW_BATCH_SIZE);
        if batch_size == 0 {
            return Ok(Vec::new());
        }

        let candidates = match user {
            Some(user_id) => {
                self.storage.unreviewed_pairs_between(lang_a.id, lang_b.id, user_id).await?
            },
            None => self.storage.pairs_between(lang_a.id, lang_b.id).await?,
        };
        let sampled: Vec<TranslationPair> = {
            let mut rng = rand::thread_rng();
            candidates.choose_multiple(&mut rng, batch_size).copied().collect()
        };
        if sampled.is_empty() {
            return Ok(Vec::new());
        }

        let pair_ids: Vec<PairId> = sampled.iter().map(|p| p.id).collect();
        let tallies = self.storage.tallies(&pair_ids).await?;
        let user_votes = match user {
            Some(user_id) => self.storage.user_votes(user_id, &pair_ids).await?,
            None => HashMap::new(),
        };
        let saying_ids: Vec<SayingId> = sampled
            .iter()
            .flat_map(|p| [p.saying_low_id(), p.saying_high_id()])
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let sayings: HashMap<SayingId, Saying> = self
            .storage
            .get_sayings(&saying_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        let default_source = self
            .storage
            .find_language_by_code(&self.settings.default_source_language)
            .await?
            .map(|l| l.id);

        let mut items = Vec::with_capacity(sampled.len());
        for pair in sampled {
            let (Some(low), Some(high)) =
                (sayings.get(&pair.saying_low_id()), sayings.get(&pair.saying_high_id()))
            else {
                tracing::warn!(pair = %pair.id, "Skipping review pair with a missing saying");
                continue;
            };
            let (first, second) = presentation_order(low, high, default_source, lang_a.id);
            let tally = tallies.get(&pair.id).copied().unwrap_or_default();
            items.push(ReviewItem {
                pair_id: pair.id,
                first: first.clone(),
                second: second.clone(),
                upvotes: tally.upvotes,
                downvotes: tally.downvotes,
                user_value: user_votes.get(&pair.id).copied().unwrap_or(VoteValue::Neutral),
            });
        }
        tracing::debug!(
            language_a = %lang_a.code,
            language_b = %lang_b.code,
            count = items.len(),
            "Sampled review batch"
        );
        Ok(items)
    }
}
