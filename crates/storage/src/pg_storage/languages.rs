//! LanguageStore implementation for PgStorage.

use async_trait::async_trait;
use proverbia_core::{Language, LanguageId};
use sqlx::Row;

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::LanguageStore;

const LANGUAGE_COLUMNS: &str = "id, code, name, created_at";

fn row_to_language(row: &sqlx::postgres::PgRow) -> Result<Language, StorageError> {
    Ok(Language {
        id: LanguageId(row.try_get("id")?),
        code: row.try_get("code")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl LanguageStore for PgStorage {
    async fn create_language(&self, code: &str, name: &str) -> Result<Language, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO languages (code, name) VALUES ($1, $2) RETURNING {LANGUAGE_COLUMNS}"
        ))
        .bind(code)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        let language = row_to_language(&row)?;
        tracing::info!(code, id = %language.id, "Language created");
        Ok(language)
    }

    async fn get_language(&self, id: LanguageId) -> Result<Option<Language>, StorageError> {
        let row = sqlx::query(&format!("SELECT {LANGUAGE_COLUMNS} FROM languages WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_language(&r)).transpose()
    }

    async fn find_language_by_code(&self, code: &str) -> Result<Option<Language>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {LANGUAGE_COLUMNS} FROM languages WHERE code = $1"))
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_language(&r)).transpose()
    }

    async fn list_languages(&self) -> Result<Vec<Language>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {LANGUAGE_COLUMNS} FROM languages ORDER BY code"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_language).collect()
    }
}
