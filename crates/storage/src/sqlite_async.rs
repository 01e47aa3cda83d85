//! Async trait implementations for SQLite `Storage` via `spawn_blocking`.

use std::collections::HashMap;

use async_trait::async_trait;
use proverbia_core::{
    Language, LanguageId, NewSaying, NewSuggestion, PairId, PairKey, Saying, SayingId,
    Suggestion, SuggestionId, SuggestionStatus, Tally, TranslationPair, UserId, VoteRecord,
    VoteValue,
};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{LanguageStore, PairStore, SayingStore, SuggestionStore, VoteStore};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is tagged with how it is moved into the closure: `@ref`
/// clones a `&T`, `@str` owns a `&str`, `@slice` copies a `&[T]` into a `Vec`,
/// and `@val` moves a `Copy` value as is.
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture slice $arg:ident) => { let $arg = $arg.to_vec(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass slice $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

// ── LanguageStore ────────────────────────────────────────────────

#[async_trait]
impl LanguageStore for Storage {
    async fn create_language(&self, code: &str, name: &str) -> Result<Language, StorageError> {
        delegate!(self, create_language, @str code, @str name)
    }
    async fn get_language(&self, id: LanguageId) -> Result<Option<Language>, StorageError> {
        delegate!(self, get_language, @val id)
    }
    async fn find_language_by_code(&self, code: &str) -> Result<Option<Language>, StorageError> {
        delegate!(self, find_language_by_code, @str code)
    }
    async fn list_languages(&self) -> Result<Vec<Language>, StorageError> {
        delegate!(self, list_languages)
    }
}

// ── SayingStore ──────────────────────────────────────────────────

#[async_trait]
impl SayingStore for Storage {
    async fn insert_saying(&self, saying: &NewSaying) -> Result<Saying, StorageError> {
        delegate!(self, insert_saying, @ref saying)
    }
    async fn get_saying(&self, id: SayingId) -> Result<Option<Saying>, StorageError> {
        delegate!(self, get_saying, @val id)
    }
    async fn get_sayings(&self, ids: &[SayingId]) -> Result<Vec<Saying>, StorageError> {
        delegate!(self, get_sayings, @slice ids)
    }
    async fn find_by_canonical(
        &self,
        language_id: LanguageId,
        canonical: &str,
    ) -> Result<Option<Saying>, StorageError> {
        delegate!(self, find_by_canonical, @val language_id, @str canonical)
    }
    async fn find_by_slug(&self, slug: &str) -> Result<Vec<Saying>, StorageError> {
        delegate!(self, find_by_slug, @str slug)
    }
    async fn search_sayings(
        &self,
        language_id: Option<LanguageId>,
        canonical_query: &str,
        limit: usize,
    ) -> Result<Vec<Saying>, StorageError> {
        delegate!(self, search_sayings, @val language_id, @str canonical_query, @val limit)
    }
    async fn delete_saying(&self, id: SayingId) -> Result<bool, StorageError> {
        delegate!(self, delete_saying, @val id)
    }
}

// ── PairStore ────────────────────────────────────────────────────

#[async_trait]
impl PairStore for Storage {
    async fn insert_pair(&self, key: PairKey) -> Result<TranslationPair, StorageError> {
        delegate!(self, insert_pair, @val key)
    }
    async fn get_pair(&self, id: PairId) -> Result<Option<TranslationPair>, StorageError> {
        delegate!(self, get_pair, @val id)
    }
    async fn find_pair(&self, key: PairKey) -> Result<Option<TranslationPair>, StorageError> {
        delegate!(self, find_pair, @val key)
    }
    async fn pairs_for(&self, saying_id: SayingId) -> Result<Vec<TranslationPair>, StorageError> {
        delegate!(self, pairs_for, @val saying_id)
    }
    async fn pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
    ) -> Result<Vec<TranslationPair>, StorageError> {
        delegate!(self, pairs_between, @val language_a, @val language_b)
    }
    async fn unreviewed_pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
        user_id: UserId,
    ) -> Result<Vec<TranslationPair>, StorageError> {
        delegate!(self, unreviewed_pairs_between, @val language_a, @val language_b, @val user_id)
    }
}

// ── VoteStore ────────────────────────────────────────────────────

#[async_trait]
impl VoteStore for Storage {
    async fn cast_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
        value: VoteValue,
    ) -> Result<VoteRecord, StorageError> {
        delegate!(self, cast_vote, @val user_id, @val pair_id, @val value)
    }
    async fn get_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
    ) -> Result<Option<VoteRecord>, StorageError> {
        delegate!(self, get_vote, @val user_id, @val pair_id)
    }
    async fn tally(&self, pair_id: PairId) -> Result<Tally, StorageError> {
        delegate!(self, tally, @val pair_id)
    }
    async fn tallies(&self, pair_ids: &[PairId]) -> Result<HashMap<PairId, Tally>, StorageError> {
        delegate!(self, tallies, @slice pair_ids)
    }
    async fn user_votes(
        &self,
        user_id: UserId,
        pair_ids: &[PairId],
    ) -> Result<HashMap<PairId, VoteValue>, StorageError> {
        delegate!(self, user_votes, @val user_id, @slice pair_ids)
    }
}

// ── SuggestionStore ──────────────────────────────────────────────

#[async_trait]
impl SuggestionStore for Storage {
    async fn insert_suggestion(
        &self,
        suggestion: &NewSuggestion,
    ) -> Result<Suggestion, StorageError> {
        delegate!(self, insert_suggestion, @ref suggestion)
    }
    async fn get_suggestion(&self, id: SuggestionId) -> Result<Option<Suggestion>, StorageError> {
        delegate!(self, get_suggestion, @val id)
    }
    async fn list_suggestions(
        &self,
        status: SuggestionStatus,
        limit: usize,
    ) -> Result<Vec<Suggestion>, StorageError> {
        delegate!(self, list_suggestions, @val status, @val limit)
    }
    async fn set_suggestion_status(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<bool, StorageError> {
        delegate!(self, set_suggestion_status, @val id, @val status)
    }
}
