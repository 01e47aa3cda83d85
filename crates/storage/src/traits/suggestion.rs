use async_trait::async_trait;
use proverbia_core::{NewSuggestion, Suggestion, SuggestionId, SuggestionStatus};

use crate::error::StorageError;

/// Moderation queue for user-submitted translations.
#[async_trait]
pub trait SuggestionStore: Send + Sync {
    async fn insert_suggestion(
        &self,
        suggestion: &NewSuggestion,
    ) -> Result<Suggestion, StorageError>;

    async fn get_suggestion(&self, id: SuggestionId) -> Result<Option<Suggestion>, StorageError>;

    /// Suggestions in `status`, oldest first.
    async fn list_suggestions(
        &self,
        status: SuggestionStatus,
        limit: usize,
    ) -> Result<Vec<Suggestion>, StorageError>;

    /// Returns `true` if a row was updated.
    async fn set_suggestion_status(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<bool, StorageError>;
}
