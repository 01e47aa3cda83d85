use std::sync::Arc;

use proverbia_core::constants::MAX_QUERY_LIMIT;
use proverbia_core::{
    LanguageId, NewSuggestion, Saying, Suggestion, SuggestionId, SuggestionStatus,
    TranslationPair, UserId,
};
use proverbia_storage::StorageBackend;
use proverbia_storage::traits::{LanguageStore, SuggestionStore};
use serde::Serialize;

use crate::ServiceError;
use crate::pair_service::PairService;
use crate::saying_service::{SayingService, language_by_code};

/// Result of approving a suggestion: the sayings and pair it produced.
#[derive(Debug, Clone, Serialize)]
pub struct ApprovedSuggestion {
    pub suggestion: Suggestion,
    pub source: Saying,
    pub target: Saying,
    pub pair: TranslationPair,
}

/// Moderation queue for translations submitted by users.
pub struct SuggestionService {
    storage: Arc<StorageBackend>,
    sayings: Arc<SayingService>,
    pairs: Arc<PairService>,
}

impl SuggestionService {
    #[must_use]
    pub const fn new(
        storage: Arc<StorageBackend>,
        sayings: Arc<SayingService>,
        pairs: Arc<PairService>,
    ) -> Self {
        Self { storage, sayings, pairs }
    }

    pub async fn suggest(
        &self,
        user_id: UserId,
        source_language: &str,
        target_language: &str,
        source_text: &str,
        target_text: &str,
    ) -> Result<Suggestion, ServiceError> {
        let source = language_by_code(&self.storage, source_language).await?;
        let target = language_by_code(&self.storage, target_language).await?;
        let new = NewSuggestion::new(user_id, source.id, target.id, source_text, target_text)?;
        let suggestion = self.storage.insert_suggestion(&new).await?;
        tracing::info!(id = %suggestion.id, user = %user_id, "Suggestion submitted");
        Ok(suggestion)
    }

    /// Pending suggestions, oldest first.
    pub async fn list_pending(&self, limit: usize) -> Result<Vec<Suggestion>, ServiceError> {
        let limit = limit.min(MAX_QUERY_LIMIT);
        Ok(self.storage.list_suggestions(SuggestionStatus::PendingReview, limit).await?)
    }

    /// Accept a pending suggestion: both texts become sayings (reusing any with
    /// the same canonical form) and are linked as a pair.
    pub async fn approve(&self, id: SuggestionId) -> Result<ApprovedSuggestion, ServiceError> {
        let mut suggestion = self.pending(id).await?;
        let source_code = self.language_code(suggestion.source_language_id).await?;
        let target_code = self.language_code(suggestion.target_language_id).await?;

        let source =
            self.sayings.find_or_create_saying(&source_code, &suggestion.source_text).await?;
        let target =
            self.sayings.find_or_create_saying(&target_code, &suggestion.target_text).await?;
        let pair = self.pairs.ensure_pair(source.id, target.id).await?;

        self.set_status(id, SuggestionStatus::Approved).await?;
        suggestion.status = SuggestionStatus::Approved;
        tracing::info!(%id, pair = %pair.id, "Suggestion approved");
        Ok(ApprovedSuggestion { suggestion, source, target, pair })
    }

    pub async fn reject(&self, id: SuggestionId) -> Result<Suggestion, ServiceError> {
        let mut suggestion = self.pending(id).await?;
        self.set_status(id, SuggestionStatus::Rejected).await?;
        suggestion.status = SuggestionStatus::Rejected;
        tracing::info!(%id, "Suggestion rejected");
        Ok(suggestion)
    }

    async fn pending(&self, id: SuggestionId) -> Result<Suggestion, ServiceError> {
        let suggestion = self
            .storage
            .get_suggestion(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("suggestion", id))?;
        if suggestion.status != SuggestionStatus::PendingReview {
            return Err(ServiceError::InvalidInput(format!(
                "suggestion {id} is already {}",
                suggestion.status
            )));
        }
        Ok(suggestion)
    }

    async fn language_code(&self, id: LanguageId) -> Result<String, ServiceError> {
        self.storage
            .get_language(id)
            .await?
            .map(|l| l.code)
            .ok_or_else(|| ServiceError::not_found("language", id))
    }

    async fn set_status(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<(), ServiceError> {
        if self.storage.set_suggestion_status(id, status).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("suggestion", id))
        }
    }
}
