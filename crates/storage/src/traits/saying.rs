use async_trait::async_trait;
use proverbia_core::{LanguageId, NewSaying, Saying, SayingId};

use crate::error::StorageError;

/// Saying persistence and lookup by canonical text.
#[async_trait]
pub trait SayingStore: Send + Sync {
    /// Insert a saying. A second saying with the same `(language, raw_text)`
    /// fails with `Duplicate`.
    async fn insert_saying(&self, saying: &NewSaying) -> Result<Saying, StorageError>;

    async fn get_saying(&self, id: SayingId) -> Result<Option<Saying>, StorageError>;

    /// Fetch several sayings at once. Missing ids are skipped.
    async fn get_sayings(&self, ids: &[SayingId]) -> Result<Vec<Saying>, StorageError>;

    /// Exact match on canonical text within a language. When several sayings
    /// share the canonical form the oldest wins.
    async fn find_by_canonical(
        &self,
        language_id: LanguageId,
        canonical: &str,
    ) -> Result<Option<Saying>, StorageError>;

    /// Every saying with this slug, oldest first.
    async fn find_by_slug(&self, slug: &str) -> Result<Vec<Saying>, StorageError>;

    /// Substring match on canonical text, prefix matches first, then by
    /// canonical text. `canonical_query` must already be normalized.
    async fn search_sayings(
        &self,
        language_id: Option<LanguageId>,
        canonical_query: &str,
        limit: usize,
    ) -> Result<Vec<Saying>, StorageError>;

    /// Delete a saying together with its pairs and their votes. Returns `true`
    /// if a row was deleted.
    async fn delete_saying(&self, id: SayingId) -> Result<bool, StorageError>;
}
