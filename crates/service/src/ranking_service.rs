use std::collections::HashMap;
use std::sync::Arc;

use proverbia_core::{PairId, Saying, SayingId, rank_by_confidence};
use proverbia_storage::StorageBackend;
use proverbia_storage::traits::{PairStore, SayingStore, VoteStore};
use serde::Serialize;

use crate::ServiceError;
use crate::saying_service::language_by_code;

/// A saying linked to the one being looked up, with its pair's vote standing.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTranslation {
    pub pair_id: PairId,
    pub saying: Saying,
    pub upvotes: u64,
    pub downvotes: u64,
    pub confidence: f64,
}

pub struct RankingService {
    storage: Arc<StorageBackend>,
}

impl RankingService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Every saying paired with `saying_id`, in any language, best first.
    ///
    /// Pairs with equal confidence keep creation order.
    pub async fn translations_for(
        &self,
        saying_id: SayingId,
    ) -> Result<Vec<RankedTranslation>, ServiceError> {
        if self.storage.get_saying(saying_id).await?.is_none() {
            return Err(ServiceError::not_found("saying", saying_id));
        }
        let pairs = self.storage.pairs_for(saying_id).await?;
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let pair_ids: Vec<PairId> = pairs.iter().map(|p| p.id).collect();
        let other_ids: Vec<SayingId> =
            pairs.iter().filter_map(|p| p.key.other(saying_id)).collect();
        let tallies = self.storage.tallies(&pair_ids).await?;
        let mut sayings: HashMap<SayingId, Saying> = self
            .storage
            .get_sayings(&other_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let mut ranked = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            let Some(other) = pair.key.other(saying_id) else {
                continue;
            };
            let Some(saying) = sayings.remove(&other) else {
                tracing::warn!(pair = %pair.id, saying = %other, "Pair references a missing saying");
                continue;
            };
            let tally = tallies.get(&pair.id).copied().unwrap_or_default();
            ranked.push(RankedTranslation {
                pair_id: pair.id,
                saying,
                upvotes: tally.upvotes,
                downvotes: tally.downvotes,
                confidence: tally.confidence(),
            });
        }
        rank_by_confidence(&mut ranked, |t| t.confidence);
        Ok(ranked)
    }

    /// Translations of `saying_id` into one language, best first.
    pub async fn equivalents_of(
        &self,
        saying_id: SayingId,
        target_language: &str,
    ) -> Result<Vec<RankedTranslation>, ServiceError> {
        let language = language_by_code(&self.storage, target_language).await?;
        let mut ranked = self.translations_for(saying_id).await?;
        ranked.retain(|t| t.saying.language_id == language.id);
        Ok(ranked)
    }
}
