use chrono::Utc;
use proverbia_core::{Language, LanguageId};
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, get_conn};
use crate::error::StorageError;

const LANGUAGE_COLUMNS: &str = "id, code, name, created_at";

fn map_language(row: &rusqlite::Row<'_>) -> rusqlite::Result<Language> {
    Ok(Language {
        id: LanguageId(row.get(0)?),
        code: row.get(1)?,
        name: row.get(2)?,
        created_at: row.get(3)?,
    })
}

impl Storage {
    pub fn create_language(&self, code: &str, name: &str) -> Result<Language, StorageError> {
        let conn = get_conn(&self.pool)?;
        let language = conn.query_row(
            &format!(
                "INSERT INTO languages (code, name, created_at) VALUES (?1, ?2, ?3)
                 RETURNING {LANGUAGE_COLUMNS}"
            ),
            params![code, name, Utc::now()],
            map_language,
        )?;
        tracing::info!(code, id = %language.id, "Language created");
        Ok(language)
    }

    pub fn get_language(&self, id: LanguageId) -> Result<Option<Language>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn
            .query_row(
                &format!("SELECT {LANGUAGE_COLUMNS} FROM languages WHERE id = ?1"),
                params![id.get()],
                map_language,
            )
            .optional()?)
    }

    pub fn find_language_by_code(&self, code: &str) -> Result<Option<Language>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn
            .query_row(
                &format!("SELECT {LANGUAGE_COLUMNS} FROM languages WHERE code = ?1"),
                params![code],
                map_language,
            )
            .optional()?)
    }

    pub fn list_languages(&self) -> Result<Vec<Language>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare(&format!("SELECT {LANGUAGE_COLUMNS} FROM languages ORDER BY code"))?;
        let rows = stmt.query_map([], map_language)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
