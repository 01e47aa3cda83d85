use async_trait::async_trait;
use proverbia_core::{LanguageId, PairId, PairKey, SayingId, TranslationPair, UserId};

use crate::error::StorageError;

/// Unordered translation pairs between two sayings.
#[async_trait]
pub trait PairStore: Send + Sync {
    /// Insert a pair. An existing pair with the same key fails with `Duplicate`;
    /// a missing saying fails with `NotFound`.
    async fn insert_pair(&self, key: PairKey) -> Result<TranslationPair, StorageError>;

    async fn get_pair(&self, id: PairId) -> Result<Option<TranslationPair>, StorageError>;

    async fn find_pair(&self, key: PairKey) -> Result<Option<TranslationPair>, StorageError>;

    /// Every pair containing `saying_id` on either side, in id order.
    async fn pairs_for(&self, saying_id: SayingId) -> Result<Vec<TranslationPair>, StorageError>;

    /// Pairs with one saying in each language, either orientation, in id order.
    async fn pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
    ) -> Result<Vec<TranslationPair>, StorageError>;

    /// Like [`PairStore::pairs_between`], without pairs `user_id` has a vote row
    /// for. Retracted votes still count as a row.
    async fn unreviewed_pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
        user_id: UserId,
    ) -> Result<Vec<TranslationPair>, StorageError>;
}
