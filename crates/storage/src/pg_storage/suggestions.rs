//! SuggestionStore implementation for PgStorage.

use async_trait::async_trait;
use proverbia_core::{
    LanguageId, NewSuggestion, Suggestion, SuggestionId, SuggestionStatus, UserId,
};
use sqlx::Row;

use super::{PgStorage, usize_to_i64};
use crate::error::StorageError;
use crate::traits::SuggestionStore;

const SUGGESTION_COLUMNS: &str = "id, user_id, source_language_id, target_language_id, \
                                  source_text, target_text, status, created_at";

fn row_to_suggestion(row: &sqlx::postgres::PgRow) -> Result<Suggestion, StorageError> {
    let status: String = row.try_get("status")?;
    let status = status.parse::<SuggestionStatus>().map_err(|e| {
        tracing::warn!(invalid_status = %status, "corrupt suggestion status in DB");
        StorageError::corrupt("suggestions.status", e)
    })?;
    Ok(Suggestion {
        id: SuggestionId(row.try_get("id")?),
        user_id: UserId(row.try_get("user_id")?),
        source_language_id: LanguageId(row.try_get("source_language_id")?),
        target_language_id: LanguageId(row.try_get("target_language_id")?),
        source_text: row.try_get("source_text")?,
        target_text: row.try_get("target_text")?,
        status,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl SuggestionStore for PgStorage {
    async fn insert_suggestion(
        &self,
        suggestion: &NewSuggestion,
    ) -> Result<Suggestion, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO suggestions
               (user_id, source_language_id, target_language_id, source_text, target_text, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {SUGGESTION_COLUMNS}"
        ))
        .bind(suggestion.user_id.get())
        .bind(suggestion.source_language_id.get())
        .bind(suggestion.target_language_id.get())
        .bind(&suggestion.source_text)
        .bind(&suggestion.target_text)
        .bind(SuggestionStatus::PendingReview.as_str())
        .fetch_one(&self.pool)
        .await?;
        row_to_suggestion(&row)
    }

    async fn get_suggestion(&self, id: SuggestionId) -> Result<Option<Suggestion>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {SUGGESTION_COLUMNS} FROM suggestions WHERE id = $1"))
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_suggestion(&r)).transpose()
    }

    async fn list_suggestions(
        &self,
        status: SuggestionStatus,
        limit: usize,
    ) -> Result<Vec<Suggestion>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SUGGESTION_COLUMNS} FROM suggestions WHERE status = $1 ORDER BY id LIMIT $2"
        ))
        .bind(status.as_str())
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_suggestion).collect()
    }

    async fn set_suggestion_status(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query("UPDATE suggestions SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
