use chrono::Utc;
use proverbia_core::{LanguageId, PairId, PairKey, SayingId, TranslationPair, UserId};
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, get_conn, map_pair};
use crate::error::StorageError;

const PAIR_COLUMNS: &str = "p.id, p.saying_low_id, p.saying_high_id, p.created_at";

const BETWEEN_LANGUAGES: &str = "
    FROM translation_pairs p
    JOIN sayings lo ON lo.id = p.saying_low_id
    JOIN sayings hi ON hi.id = p.saying_high_id
    WHERE ((lo.language_id = ?1 AND hi.language_id = ?2)
        OR (lo.language_id = ?2 AND hi.language_id = ?1))";

impl Storage {
    pub fn insert_pair(&self, key: PairKey) -> Result<TranslationPair, StorageError> {
        let conn = get_conn(&self.pool)?;
        let pair = conn
            .query_row(
                "INSERT INTO translation_pairs (saying_low_id, saying_high_id, created_at)
                 VALUES (?1, ?2, ?3)
                 RETURNING id, saying_low_id, saying_high_id, created_at",
                params![key.low().get(), key.high().get(), Utc::now()],
                map_pair,
            )
            .map_err(|e| match StorageError::from(e) {
                StorageError::Duplicate(_) => StorageError::Duplicate(format!(
                    "translation pair ({}, {}) already exists",
                    key.low(),
                    key.high()
                )),
                other => other,
            })?;
        tracing::debug!(id = %pair.id, low = %key.low(), high = %key.high(), "Translation pair registered");
        Ok(pair)
    }

    pub fn get_pair(&self, id: PairId) -> Result<Option<TranslationPair>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn
            .query_row(
                &format!("SELECT {PAIR_COLUMNS} FROM translation_pairs p WHERE p.id = ?1"),
                params![id.get()],
                map_pair,
            )
            .optional()?)
    }

    pub fn find_pair(&self, key: PairKey) -> Result<Option<TranslationPair>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(conn
            .query_row(
                &format!(
                    "SELECT {PAIR_COLUMNS} FROM translation_pairs p
                     WHERE p.saying_low_id = ?1 AND p.saying_high_id = ?2"
                ),
                params![key.low().get(), key.high().get()],
                map_pair,
            )
            .optional()?)
    }

    pub fn pairs_for(&self, saying_id: SayingId) -> Result<Vec<TranslationPair>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {PAIR_COLUMNS} FROM translation_pairs p
             WHERE p.saying_low_id = ?1 OR p.saying_high_id = ?1
             ORDER BY p.id"
        ))?;
        let rows = stmt.query_map(params![saying_id.get()], map_pair)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
    ) -> Result<Vec<TranslationPair>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare(&format!("SELECT {PAIR_COLUMNS} {BETWEEN_LANGUAGES} ORDER BY p.id"))?;
        let rows = stmt.query_map(params![language_a.get(), language_b.get()], map_pair)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn unreviewed_pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
        user_id: UserId,
    ) -> Result<Vec<TranslationPair>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {PAIR_COLUMNS} {BETWEEN_LANGUAGES}
               AND NOT EXISTS (
                   SELECT 1 FROM votes v WHERE v.pair_id = p.id AND v.user_id = ?3
               )
             ORDER BY p.id"
        ))?;
        let rows = stmt
            .query_map(params![language_a.get(), language_b.get(), user_id.get()], map_pair)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
