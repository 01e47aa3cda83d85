//! Unified storage backend with enum dispatch.

use std::collections::HashMap;
#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use proverbia_core::{
    Language, LanguageId, NewSaying, NewSuggestion, PairId, PairKey, Saying, SayingId,
    Suggestion, SuggestionId, SuggestionStatus, Tally, TranslationPair, UserId, VoteRecord,
    VoteValue,
};

use crate::error::StorageError;
use crate::traits::{LanguageStore, PairStore, SayingStore, SuggestionStore, VoteStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── LanguageStore ────────────────────────────────────────────────

#[async_trait]
impl LanguageStore for StorageBackend {
    async fn create_language(&self, code: &str, name: &str) -> Result<Language, StorageError> {
        dispatch!(self, LanguageStore, create_language(code, name))
    }

    async fn get_language(&self, id: LanguageId) -> Result<Option<Language>, StorageError> {
        dispatch!(self, LanguageStore, get_language(id))
    }

    async fn find_language_by_code(&self, code: &str) -> Result<Option<Language>, StorageError> {
        dispatch!(self, LanguageStore, find_language_by_code(code))
    }

    async fn list_languages(&self) -> Result<Vec<Language>, StorageError> {
        dispatch!(self, LanguageStore, list_languages())
    }
}

// ── SayingStore ──────────────────────────────────────────────────

#[async_trait]
impl SayingStore for StorageBackend {
    async fn insert_saying(&self, saying: &NewSaying) -> Result<Saying, StorageError> {
        dispatch!(self, SayingStore, insert_saying(saying))
    }

    async fn get_saying(&self, id: SayingId) -> Result<Option<Saying>, StorageError> {
        dispatch!(self, SayingStore, get_saying(id))
    }

    async fn get_sayings(&self, ids: &[SayingId]) -> Result<Vec<Saying>, StorageError> {
        dispatch!(self, SayingStore, get_sayings(ids))
    }

    async fn find_by_canonical(
        &self,
        language_id: LanguageId,
        canonical: &str,
    ) -> Result<Option<Saying>, StorageError> {
        dispatch!(self, SayingStore, find_by_canonical(language_id, canonical))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Vec<Saying>, StorageError> {
        dispatch!(self, SayingStore, find_by_slug(slug))
    }

    async fn search_sayings(
        &self,
        language_id: Option<LanguageId>,
        canonical_query: &str,
        limit: usize,
    ) -> Result<Vec<Saying>, StorageError> {
        dispatch!(self, SayingStore, search_sayings(language_id, canonical_query, limit))
    }

    async fn delete_saying(&self, id: SayingId) -> Result<bool, StorageError> {
        dispatch!(self, SayingStore, delete_saying(id))
    }
}

// ── PairStore ────────────────────────────────────────────────────

#[async_trait]
impl PairStore for StorageBackend {
    async fn insert_pair(&self, key: PairKey) -> Result<TranslationPair, StorageError> {
        dispatch!(self, PairStore, insert_pair(key))
    }

    async fn get_pair(&self, id: PairId) -> Result<Option<TranslationPair>, StorageError> {
        dispatch!(self, PairStore, get_pair(id))
    }

    async fn find_pair(&self, key: PairKey) -> Result<Option<TranslationPair>, StorageError> {
        dispatch!(self, PairStore, find_pair(key))
    }

    async fn pairs_for(&self, saying_id: SayingId) -> Result<Vec<TranslationPair>, StorageError> {
        dispatch!(self, PairStore, pairs_for(saying_id))
    }

    async fn pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
    ) -> Result<Vec<TranslationPair>, StorageError> {
        dispatch!(self, PairStore, pairs_between(language_a, language_b))
    }

    async fn unreviewed_pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
        user_id: UserId,
    ) -> Result<Vec<TranslationPair>, StorageError> {
        dispatch!(self, PairStore, unreviewed_pairs_between(language_a, language_b, user_id))
    }
}

// ── VoteStore ────────────────────────────────────────────────────

#[async_trait]
impl VoteStore for StorageBackend {
    async fn cast_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
        value: VoteValue,
    ) -> Result<VoteRecord, StorageError> {
        dispatch!(self, VoteStore, cast_vote(user_id, pair_id, value))
    }

    async fn get_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
    ) -> Result<Option<VoteRecord>, StorageError> {
        dispatch!(self, VoteStore, get_vote(user_id, pair_id))
    }

    async fn tally(&self, pair_id: PairId) -> Result<Tally, StorageError> {
        dispatch!(self, VoteStore, tally(pair_id))
    }

    async fn tallies(&self, pair_ids: &[PairId]) -> Result<HashMap<PairId, Tally>, StorageError> {
        dispatch!(self, VoteStore, tallies(pair_ids))
    }

    async fn user_votes(
        &self,
        user_id: UserId,
        pair_ids: &[PairId],
    ) -> Result<HashMap<PairId, VoteValue>, StorageError> {
        dispatch!(self, VoteStore, user_votes(user_id, pair_ids))
    }
}

// ── SuggestionStore ──────────────────────────────────────────────

#[async_trait]
impl SuggestionStore for StorageBackend {
    async fn insert_suggestion(
        &self,
        suggestion: &NewSuggestion,
    ) -> Result<Suggestion, StorageError> {
        dispatch!(self, SuggestionStore, insert_suggestion(suggestion))
    }

    async fn get_suggestion(&self, id: SuggestionId) -> Result<Option<Suggestion>, StorageError> {
        dispatch!(self, SuggestionStore, get_suggestion(id))
    }

    async fn list_suggestions(
        &self,
        status: SuggestionStatus,
        limit: usize,
    ) -> Result<Vec<Suggestion>, StorageError> {
        dispatch!(self, SuggestionStore, list_suggestions(status, limit))
    }

    async fn set_suggestion_status(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<bool, StorageError> {
        dispatch!(self, SuggestionStore, set_suggestion_status(id, status))
    }
}
