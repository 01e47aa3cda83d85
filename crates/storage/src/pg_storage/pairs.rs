//! PairStore implementation for PgStorage.

use async_trait::async_trait;
use proverbia_core::{LanguageId, PairId, PairKey, SayingId, TranslationPair, UserId};

use super::{PAIR_COLUMNS, PgStorage, row_to_pair};
use crate::error::StorageError;
use crate::traits::PairStore;

const BETWEEN_LANGUAGES: &str = "
    FROM translation_pairs p
    JOIN sayings lo ON lo.id = p.saying_low_id
    JOIN sayings hi ON hi.id = p.saying_high_id
    WHERE ((lo.language_id = $1 AND hi.language_id = $2)
        OR (lo.language_id = $2 AND hi.language_id = $1))";

#[async_trait]
impl PairStore for PgStorage {
    async fn insert_pair(&self, key: PairKey) -> Result<TranslationPair, StorageError> {
        let row = sqlx::query(
            "INSERT INTO translation_pairs (saying_low_id, saying_high_id)
             VALUES ($1, $2)
             RETURNING id, saying_low_id, saying_high_id, created_at",
        )
        .bind(key.low().get())
        .bind(key.high().get())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match StorageError::from(e) {
            StorageError::Duplicate(_) => StorageError::Duplicate(format!(
                "translation pair ({}, {}) already exists",
                key.low(),
                key.high()
            )),
            other => other,
        })?;
        let pair = row_to_pair(&row)?;
        tracing::debug!(id = %pair.id, low = %key.low(), high = %key.high(), "Translation pair registered");
        Ok(pair)
    }

    async fn get_pair(&self, id: PairId) -> Result<Option<TranslationPair>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {PAIR_COLUMNS} FROM translation_pairs p WHERE p.id = $1"))
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_pair(&r)).transpose()
    }

    async fn find_pair(&self, key: PairKey) -> Result<Option<TranslationPair>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {PAIR_COLUMNS} FROM translation_pairs p
             WHERE p.saying_low_id = $1 AND p.saying_high_id = $2"
        ))
        .bind(key.low().get())
        .bind(key.high().get())
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_pair(&r)).transpose()
    }

    async fn pairs_for(&self, saying_id: SayingId) -> Result<Vec<TranslationPair>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PAIR_COLUMNS} FROM translation_pairs p
             WHERE p.saying_low_id = $1 OR p.saying_high_id = $1
             ORDER BY p.id"
        ))
        .bind(saying_id.get())
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_pair).collect()
    }

    async fn pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
    ) -> Result<Vec<TranslationPair>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {PAIR_COLUMNS} {BETWEEN_LANGUAGES} ORDER BY p.id"))
            .bind(language_a.get())
            .bind(language_b.get())
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_pair).collect()
    }

    async fn unreviewed_pairs_between(
        &self,
        language_a: LanguageId,
        language_b: LanguageId,
        user_id: UserId,
    ) -> Result<Vec<TranslationPair>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PAIR_COLUMNS} {BETWEEN_LANGUAGES}
               AND NOT EXISTS (
                   SELECT 1 FROM votes v WHERE v.pair_id = p.id AND v.user_id = $3
               )
             ORDER BY p.id"
        ))
        .bind(language_a.get())
        .bind(language_b.get())
        .bind(user_id.get())
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_pair).collect()
    }
}
