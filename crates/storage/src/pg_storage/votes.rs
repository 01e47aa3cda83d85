//! VoteStore implementation for PgStorage.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use proverbia_core::{PairId, Tally, UserId, VoteId, VoteRecord, VoteState, VoteValue};
use sqlx::Row;

use super::{PgStorage, count_from_i64};
use crate::error::StorageError;
use crate::traits::VoteStore;

/// `votes.value` is a `SMALLINT`.
fn stored_value(value: VoteValue) -> Result<i16, StorageError> {
    i16::try_from(value.as_i64())
        .map_err(|e| StorageError::corrupt("vote value does not fit SMALLINT", e))
}

fn parse_value(raw: i16) -> Result<VoteValue, StorageError> {
    VoteValue::try_from(i64::from(raw))
        .map_err(|e| StorageError::corrupt("votes.value out of range", e))
}

#[async_trait]
impl VoteStore for PgStorage {
    /// Insert-if-absent, then lock the row with `FOR UPDATE`, so concurrent casts
    /// by one user on one pair queue behind each other while other users proceed.
    async fn cast_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
        value: VoteValue,
    ) -> Result<VoteRecord, StorageError> {
        let mut tx = self.pool.begin().await?;

        let pair_exists = sqlx::query("SELECT 1 FROM translation_pairs WHERE id = $1")
            .bind(pair_id.get())
            .fetch_optional(&mut *tx)
            .await?
            .is_some();
        if !pair_exists {
            return Err(StorageError::NotFound {
                entity: "translation_pair",
                id: pair_id.to_string(),
            });
        }

        let inserted = sqlx::query(
            "INSERT INTO votes (user_id, pair_id, value) VALUES ($1, $2, 0)
             ON CONFLICT (user_id, pair_id) DO NOTHING
             RETURNING id",
        )
        .bind(user_id.get())
        .bind(pair_id.get())
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

        let row = sqlx::query(
            "SELECT id, value FROM votes WHERE user_id = $1 AND pair_id = $2 FOR UPDATE",
        )
        .bind(user_id.get())
        .bind(pair_id.get())
        .fetch_one(&mut *tx)
        .await?;
        let id: i64 = row.try_get("id")?;
        let previous = if inserted {
            VoteState::NoVote
        } else {
            VoteState::from_stored(Some(parse_value(row.try_get("value")?)?))
        };
        let next = previous.cast(value);

        let updated = sqlx::query(
            "UPDATE votes SET value = $1, updated_at = NOW() WHERE id = $2
             RETURNING created_at, updated_at",
        )
        .bind(stored_value(next.value())?)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        let created_at: DateTime<Utc> = updated.try_get("created_at")?;
        let updated_at: DateTime<Utc> = updated.try_get("updated_at")?;
        tx.commit().await?;

        tracing::debug!(
            user = %user_id,
            pair = %pair_id,
            requested = %value,
            from = %previous,
            to = %next,
            "Vote cast"
        );

        Ok(VoteRecord {
            id: VoteId(id),
            user_id,
            pair_id,
            value: next.value(),
            state: next,
            created_at,
            updated_at,
        })
    }

    async fn get_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
    ) -> Result<Option<VoteRecord>, StorageError> {
        let row = sqlx::query(
            "SELECT id, value, created_at, updated_at FROM votes
             WHERE user_id = $1 AND pair_id = $2",
        )
        .bind(user_id.get())
        .bind(pair_id.get())
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| {
            let value = parse_value(r.try_get("value")?)?;
            Ok(VoteRecord {
                id: VoteId(r.try_get("id")?),
                user_id,
                pair_id,
                value,
                state: VoteState::from_stored(Some(value)),
                created_at: r.try_get("created_at")?,
                updated_at: r.try_get("updated_at")?,
            })
        })
        .transpose()
    }

    async fn tally(&self, pair_id: PairId) -> Result<Tally, StorageError> {
        Ok(self.tallies(&[pair_id]).await?.remove(&pair_id).unwrap_or_default())
    }

    async fn tallies(&self, pair_ids: &[PairId]) -> Result<HashMap<PairId, Tally>, StorageError> {
        let mut result: HashMap<PairId, Tally> =
            pair_ids.iter().map(|id| (*id, Tally::default())).collect();
        if pair_ids.is_empty() {
            return Ok(result);
        }
        let raw_ids: Vec<i64> = pair_ids.iter().map(|id| id.get()).collect();
        let rows = sqlx::query(
            "SELECT pair_id,
                    COUNT(*) FILTER (WHERE value = 1) AS upvotes,
                    COUNT(*) FILTER (WHERE value = -1) AS downvotes
             FROM votes WHERE pair_id = ANY($1) GROUP BY pair_id",
        )
        .bind(raw_ids)
        .fetch_all(&self.pool)
        .await?;
        for row in &rows {
            let pair = PairId(row.try_get("pair_id")?);
            let up: i64 = row.try_get("upvotes")?;
            let down: i64 = row.try_get("downvotes")?;
            result.insert(pair, Tally::new(count_from_i64(up), count_from_i64(down)));
        }
        Ok(result)
    }

    async fn user_votes(
        &self,
        user_id: UserId,
        pair_ids: &[PairId],
    ) -> Result<HashMap<PairId, VoteValue>, StorageError> {
        if pair_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let raw_ids: Vec<i64> = pair_ids.iter().map(|id| id.get()).collect();
        let rows =
            sqlx::query("SELECT pair_id, value FROM votes WHERE user_id = $1 AND pair_id = ANY($2)")
                .bind(user_id.get())
                .bind(raw_ids)
                .fetch_all(&self.pool)
                .await?;
        let mut result = HashMap::with_capacity(rows.len());
        for row in &rows {
            result.insert(PairId(row.try_get("pair_id")?), parse_value(row.try_get("value")?)?);
        }
        Ok(result)
    }
}
