use std::sync::Arc;

use proverbia_core::{PairId, PairKey, Saying, SayingId, TranslationPair};
use proverbia_storage::StorageBackend;
use proverbia_storage::traits::{PairStore, SayingStore};
use serde::Serialize;

use crate::ServiceError;
use crate::saying_service::language_by_code;

/// A pair with both sayings loaded, low id first.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPair {
    pub pair: TranslationPair,
    pub low: Saying,
    pub high: Saying,
}

pub struct PairService {
    storage: Arc<StorageBackend>,
}

impl PairService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Register `a` and `b` as translations of each other.
    ///
    /// Argument order does not matter: `(a, b)` and `(b, a)` are the same pair.
    pub async fn register_pair(
        &self,
        a: SayingId,
        b: SayingId,
    ) -> Result<TranslationPair, ServiceError> {
        let key = PairKey::new(a, b)?;
        for id in [key.low(), key.high()] {
            if self.storage.get_saying(id).await?.is_none() {
                return Err(ServiceError::not_found("saying", id));
            }
        }
        if self.storage.find_pair(key).await?.is_some() {
            return Err(duplicate(key));
        }
        match self.storage.insert_pair(key).await {
            Ok(pair) => {
                tracing::debug!(pair = %pair.id, low = %key.low(), high = %key.high(), "Pair registered");
                Ok(pair)
            },
            Err(e) if e.is_duplicate() => Err(duplicate(key)),
            Err(e) => Err(e.into()),
        }
    }

    /// Register the pair, or return the existing one for the same key.
    pub async fn ensure_pair(
        &self,
        a: SayingId,
        b: SayingId,
    ) -> Result<TranslationPair, ServiceError> {
        match self.register_pair(a, b).await {
            Err(ServiceError::DuplicatePair { low, high }) => {
                let key = PairKey::new(low, high)?;
                self.storage.find_pair(key).await?.ok_or_else(|| {
                    ServiceError::not_found("translation_pair", format!("{low}-{high}"))
                })
            },
            other => other,
        }
    }

    pub async fn get_pair(&self, id: PairId) -> Result<ResolvedPair, ServiceError> {
        let pair = self
            .storage
            .get_pair(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("translation_pair", id))?;
        let low = self.load_saying(pair.saying_low_id()).await?;
        let high = self.load_saying(pair.saying_high_id()).await?;
        Ok(ResolvedPair { pair, low, high })
    }

    /// Every pair containing `saying_id`, in creation order.
    pub async fn pairs_for(&self, saying_id: SayingId) -> Result<Vec<TranslationPair>, ServiceError> {
        Ok(self.storage.pairs_for(saying_id).await?)
    }

    /// Pairs with one saying in each language, in creation order.
    pub async fn pairs_between(
        &self,
        language_a: &str,
        language_b: &str,
    ) -> Result<Vec<TranslationPair>, ServiceError> {
        let a = language_by_code(&self.storage, language_a).await?;
        let b = language_by_code(&self.storage, language_b).await?;
        Ok(self.storage.pairs_between(a.id, b.id).await?)
    }

    async fn load_saying(&self, id: SayingId) -> Result<Saying, ServiceError> {
        self.storage.get_saying(id).await?.ok_or_else(|| ServiceError::not_found("saying", id))
    }
}

const fn duplicate(key: PairKey) -> ServiceError {
    ServiceError::DuplicatePair { low: key.low(), high: key.high() }
}
