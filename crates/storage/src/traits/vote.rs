use std::collections::HashMap;

use async_trait::async_trait;
use proverbia_core::{PairId, Tally, UserId, VoteRecord, VoteValue};

use crate::error::StorageError;

/// Per-user votes on translation pairs.
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Apply the toggle rule to the user's vote on `pair_id` and persist the
    /// result atomically. Concurrent casts by the same user on the same pair
    /// are serialized.
    async fn cast_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
        value: VoteValue,
    ) -> Result<VoteRecord, StorageError>;

    async fn get_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
    ) -> Result<Option<VoteRecord>, StorageError>;

    /// Up/down counts for one pair. Zero-valued rows are not counted.
    async fn tally(&self, pair_id: PairId) -> Result<Tally, StorageError>;

    /// Tallies for several pairs. Every requested id is present in the result.
    async fn tallies(&self, pair_ids: &[PairId]) -> Result<HashMap<PairId, Tally>, StorageError>;

    /// The user's stored values for the given pairs. Pairs without a row are absent.
    async fn user_votes(
        &self,
        user_id: UserId,
        pair_ids: &[PairId],
    ) -> Result<HashMap<PairId, VoteValue>, StorageError>;
}
