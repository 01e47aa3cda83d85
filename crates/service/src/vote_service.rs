use std::sync::Arc;

use proverbia_core::{PairId, Tally, UserId, VoteRecord, VoteValue};
use proverbia_storage::StorageBackend;
use proverbia_storage::traits::{PairStore, VoteStore};

use crate::ServiceError;

pub struct VoteService {
    storage: Arc<StorageBackend>,
}

impl VoteService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Cast `value` (-1, 0 or 1) with toggle semantics: repeating the stored
    /// vote clears it, and 0 always clears.
    pub async fn cast_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
        value: i64,
    ) -> Result<VoteRecord, ServiceError> {
        let value = VoteValue::try_from(value)?;
        Ok(self.storage.cast_vote(user_id, pair_id, value).await?)
    }

    pub async fn tally(&self, pair_id: PairId) -> Result<Tally, ServiceError> {
        self.ensure_pair_exists(pair_id).await?;
        Ok(self.storage.tally(pair_id).await?)
    }

    /// The user's stored value, or `Neutral` when they never voted.
    pub async fn user_value(
        &self,
        user_id: UserId,
        pair_id: PairId,
    ) -> Result<VoteValue, ServiceError> {
        Ok(self
            .storage
            .get_vote(user_id, pair_id)
            .await?
            .map_or(VoteValue::Neutral, |vote| vote.value))
    }

    async fn ensure_pair_exists(&self, pair_id: PairId) -> Result<(), ServiceError> {
        match self.storage.get_pair(pair_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("translation_pair", pair_id)),
        }
    }
}
