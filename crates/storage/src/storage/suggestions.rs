use chrono::Utc;
use proverbia_core::{
    LanguageId, NewSuggestion, Suggestion, SuggestionId, SuggestionStatus, UserId,
};
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, get_conn};
use crate::error::StorageError;

const SUGGESTION_COLUMNS: &str = "id, user_id, source_language_id, target_language_id, \
                                  source_text, target_text, status, created_at";

fn map_suggestion(row: &rusqlite::Row<'_>) -> rusqlite::Result<Suggestion> {
    let status: String = row.get(6)?;
    let status = status.parse::<SuggestionStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(6, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Suggestion {
        id: SuggestionId(row.get(0)?),
        user_id: UserId(row.get(1)?),
        source_language_id: LanguageId(row.get(2)?),
        target_language_id: LanguageId(row.get(3)?),
        source_text: row.get(4)?,
        target_text: row.get(5)?,
        status,
        created_at: row.get(7)?,
    })
}

impl Storage {
    pub fn insert_suggestion(&self, suggestion: &NewSuggestion) -> Result<Suggestion, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn.query_row(
            &format!(
                "INSERT INTO suggestions
                   (user_id, source_language_id, target_language_id, source_text, target_text, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING {SUGGESTION_COLUMNS}"
            ),
            params![
                suggestion.user_id.get(),
                suggestion.source_language_id.get(),
                suggestion.target_language_id.get(),
                suggestion.source_text,
                suggestion.target_text,
                SuggestionStatus::PendingReview.as_str(),
                Utc::now()
            ],
            map_suggestion,
        )?)
    }

    pub fn get_suggestion(&self, id: SuggestionId) -> Result<Option<Suggestion>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn
            .query_row(
                &format!("SELECT {SUGGESTION_COLUMNS} FROM suggestions WHERE id = ?1"),
                params![id.get()],
                map_suggestion,
            )
            .optional()?)
    }

    pub fn list_suggestions(
        &self,
        status: SuggestionStatus,
        limit: usize,
    ) -> Result<Vec<Suggestion>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SUGGESTION_COLUMNS} FROM suggestions WHERE status = ?1 ORDER BY id LIMIT ?2"
        ))?;
        let rows = stmt.query_map(params![status.as_str(), limit as i64], map_suggestion)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn set_suggestion_status(
        &self,
        id: SuggestionId,
        status: SuggestionStatus,
    ) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let updated = conn.execute(
            "UPDATE suggestions SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id.get()],
        )?;
        Ok(updated > 0)
    }
}
