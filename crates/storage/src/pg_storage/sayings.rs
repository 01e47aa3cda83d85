//! SayingStore implementation for PgStorage.

use async_trait::async_trait;
use proverbia_core::{LanguageId, NewSaying, Saying, SayingId};
use sqlx::Row;

use super::{PgStorage, escape_like, usize_to_i64};
use crate::error::StorageError;
use crate::traits::SayingStore;

const SAYING_COLUMNS: &str =
    "id, language_id, raw_text, canonical_text, slug, created_at, updated_at";

fn row_to_saying(row: &sqlx::postgres::PgRow) -> Result<Saying, StorageError> {
    Ok(Saying {
        id: SayingId(row.try_get("id")?),
        language_id: LanguageId(row.try_get("language_id")?),
        raw_text: row.try_get("raw_text")?,
        canonical_text: row.try_get("canonical_text")?,
        slug: row.try_get("slug")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl SayingStore for PgStorage {
    async fn insert_saying(&self, saying: &NewSaying) -> Result<Saying, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO sayings (language_id, raw_text, canonical_text, slug)
             VALUES ($1, $2, $3, $4)
             RETURNING {SAYING_COLUMNS}"
        ))
        .bind(saying.language_id().get())
        .bind(saying.raw_text())
        .bind(saying.canonical_text())
        .bind(saying.slug())
        .fetch_one(&self.pool)
        .await?;
        let stored = row_to_saying(&row)?;
        tracing::debug!(id = %stored.id, canonical = %stored.canonical_text, "Saying stored");
        Ok(stored)
    }

    async fn get_saying(&self, id: SayingId) -> Result<Option<Saying>, StorageError> {
        let row = sqlx::query(&format!("SELECT {SAYING_COLUMNS} FROM sayings WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_saying(&r)).transpose()
    }

    async fn get_sayings(&self, ids: &[SayingId]) -> Result<Vec<Saying>, StorageError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        let rows = sqlx::query(&format!(
            "SELECT {SAYING_COLUMNS} FROM sayings WHERE id = ANY($1) ORDER BY id"
        ))
        .bind(raw_ids)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_saying).collect()
    }

    async fn find_by_canonical(
        &self,
        language_id: LanguageId,
        canonical: &str,
    ) -> Result<Option<Saying>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SAYING_COLUMNS} FROM sayings
             WHERE language_id = $1 AND canonical_text = $2
             ORDER BY id LIMIT 1"
        ))
        .bind(language_id.get())
        .bind(canonical)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_saying(&r)).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Vec<Saying>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SAYING_COLUMNS} FROM sayings WHERE slug = $1 ORDER BY id"
        ))
        .bind(slug)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_saying).collect()
    }

    async fn search_sayings(
        &self,
        language_id: Option<LanguageId>,
        canonical_query: &str,
        limit: usize,
    ) -> Result<Vec<Saying>, StorageError> {
        if canonical_query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        let escaped = escape_like(canonical_query);
        let rows = sqlx::query(&format!(
            "SELECT {SAYING_COLUMNS} FROM sayings
             WHERE ($1::BIGINT IS NULL OR language_id = $1)
               AND canonical_text LIKE $2
             ORDER BY (canonical_text LIKE $3) DESC, canonical_text COLLATE \"C\", id
             LIMIT $4"
        ))
        .bind(language_id.map(LanguageId::get))
        .bind(format!("%{escaped}%"))
        .bind(format!("{escaped}%"))
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_saying).collect()
    }

    async fn delete_saying(&self, id: SayingId) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM sayings WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(%id, "Saying deleted with its translation pairs");
        }
        Ok(deleted)
    }
}
