use chrono::Utc;
use proverbia_core::{LanguageId, NewSaying, Saying, SayingId};
use rusqlite::{OptionalExtension as _, params, params_from_iter};

use super::{Storage, escape_like_pattern, get_conn, placeholders};
use crate::error::StorageError;

const SAYING_COLUMNS: &str =
    "id, language_id, raw_text, canonical_text, slug, created_at, updated_at";

fn map_saying(row: &rusqlite::Row<'_>) -> rusqlite::Result<Saying> {
    Ok(Saying {
        id: SayingId(row.get(0)?),
        language_id: LanguageId(row.get(1)?),
        raw_text: row.get(2)?,
        canonical_text: row.get(3)?,
        slug: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

impl Storage {
    pub fn insert_saying(&self, saying: &NewSaying) -> Result<Saying, StorageError> {
        let conn = get_conn(&self.pool)?;
        let now = Utc::now();
        let stored = conn.query_row(
            &format!(
                "INSERT INTO sayings (language_id, raw_text, canonical_text, slug, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                 RETURNING {SAYING_COLUMNS}"
            ),
            params![
                saying.language_id().get(),
                saying.raw_text(),
                saying.canonical_text(),
                saying.slug(),
                now
            ],
            map_saying,
        )?;
        tracing::debug!(id = %stored.id, canonical = %stored.canonical_text, "Saying stored");
        Ok(stored)
    }

    pub fn get_saying(&self, id: SayingId) -> Result<Option<Saying>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn
            .query_row(
                &format!("SELECT {SAYING_COLUMNS} FROM sayings WHERE id = ?1"),
                params![id.get()],
                map_saying,
            )
            .optional()?)
    }

    pub fn get_sayings(&self, ids: &[SayingId]) -> Result<Vec<Saying>, StorageError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SAYING_COLUMNS} FROM sayings WHERE id IN ({}) ORDER BY id",
            placeholders(ids.len())
        ))?;
        let rows = stmt.query_map(params_from_iter(ids.iter().map(|id| id.get())), map_saying)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn find_by_canonical(
        &self,
        language_id: LanguageId,
        canonical: &str,
    ) -> Result<Option<Saying>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn
            .query_row(
                &format!(
                    "SELECT {SAYING_COLUMNS} FROM sayings
                     WHERE language_id = ?1 AND canonical_text = ?2
                     ORDER BY id LIMIT 1"
                ),
                params![language_id.get(), canonical],
                map_saying,
            )
            .optional()?)
    }

    pub fn find_by_slug(&self, slug: &str) -> Result<Vec<Saying>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn
            .prepare(&format!("SELECT {SAYING_COLUMNS} FROM sayings WHERE slug = ?1 ORDER BY id"))?;
        let rows = stmt.query_map(params![slug], map_saying)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn search_sayings(
        &self,
        language_id: Option<LanguageId>,
        canonical_query: &str,
        limit: usize,
    ) -> Result<Vec<Saying>, StorageError> {
        if canonical_query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        let escaped = escape_like_pattern(canonical_query);
        let contains = format!("%{escaped}%");
        let prefix = format!("{escaped}%");
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SAYING_COLUMNS} FROM sayings
             WHERE (?1 IS NULL OR language_id = ?1)
               AND canonical_text LIKE ?2 ESCAPE '\\'
             ORDER BY CASE WHEN canonical_text LIKE ?3 ESCAPE '\\' THEN 0 ELSE 1 END,
                      canonical_text, id
             LIMIT ?4"
        ))?;
        let rows = stmt.query_map(
            params![language_id.map(LanguageId::get), contains, prefix, limit as i64],
            map_saying,
        )?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn delete_saying(&self, id: SayingId) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let deleted = conn.execute("DELETE FROM sayings WHERE id = ?1", params![id.get()])?;
        if deleted > 0 {
            tracing::info!(%id, "Saying deleted with its translation pairs");
        }
        Ok(deleted > 0)
    }
}
