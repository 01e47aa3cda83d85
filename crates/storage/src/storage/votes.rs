use std::collections::HashMap;

use chrono::{DateTime, Utc};
use proverbia_core::{PairId, Tally, UserId, VoteId, VoteRecord, VoteState, VoteValue};
use rusqlite::{OptionalExtension as _, TransactionBehavior, params, params_from_iter};

use super::{Storage, count_from_i64, get_conn, placeholders};
use crate::error::StorageError;

fn parse_value(raw: i64) -> Result<VoteValue, StorageError> {
    VoteValue::try_from(raw).map_err(|e| StorageError::corrupt("votes.value out of range", e))
}

impl Storage {
    /// Toggle-cast inside a `BEGIN IMMEDIATE` transaction so the read and the
    /// write see the same row even with other writers on the pool.
    pub fn cast_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
        value: VoteValue,
    ) -> Result<VoteRecord, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let pair_exists = tx
            .query_row(
                "SELECT 1 FROM translation_pairs WHERE id = ?1",
                params![pair_id.get()],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !pair_exists {
            return Err(StorageError::NotFound {
                entity: "translation_pair",
                id: pair_id.to_string(),
            });
        }

        let existing: Option<(i64, i64)> = tx
            .query_row(
                "SELECT id, value FROM votes WHERE user_id = ?1 AND pair_id = ?2",
                params![user_id.get(), pair_id.get()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let previous = match existing {
            Some((_, raw)) => VoteState::from_stored(Some(parse_value(raw)?)),
            None => VoteState::NoVote,
        };
        let next = previous.cast(value);
        let now = Utc::now();

        let (id, created_at): (i64, DateTime<Utc>) = match existing {
            Some((id, _)) => tx.query_row(
                "UPDATE votes SET value = ?1, updated_at = ?2 WHERE id = ?3
                 RETURNING id, created_at",
                params![next.value().as_i64(), now, id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?,
            None => tx.query_row(
                "INSERT INTO votes (user_id, pair_id, value, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)
                 RETURNING id, created_at",
                params![user_id.get(), pair_id.get(), next.value().as_i64(), now],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?,
        };
        tx.commit()?;

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
            updated_at: now,
        })
    }

    pub fn get_vote(
        &self,
        user_id: UserId,
        pair_id: PairId,
    ) -> Result<Option<VoteRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let row: Option<(i64, i64, DateTime<Utc>, DateTime<Utc>)> = conn
            .query_row(
                "SELECT id, value, created_at, updated_at FROM votes
                 WHERE user_id = ?1 AND pair_id = ?2",
                params![user_id.get(), pair_id.get()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()?;
        row.map(|(id, raw, created_at, updated_at)| {
            let value = parse_value(raw)?;
            Ok(VoteRecord {
                id: VoteId(id),
                user_id,
                pair_id,
                value,
                state: VoteState::from_stored(Some(value)),
                created_at,
                updated_at,
            })
        })
        .transpose()
    }

    pub fn tally(&self, pair_id: PairId) -> Result<Tally, StorageError> {
        Ok(self.tallies(&[pair_id])?.remove(&pair_id).unwrap_or_default())
    }

    pub fn tallies(&self, pair_ids: &[PairId]) -> Result<HashMap<PairId, Tally>, StorageError> {
        let mut result: HashMap<PairId, Tally> =
            pair_ids.iter().map(|id| (*id, Tally::default())).collect();
        if pair_ids.is_empty() {
            return Ok(result);
        }
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT pair_id,
                    COALESCE(SUM(CASE WHEN value = 1 THEN 1 ELSE 0 END), 0),
                    COALESCE(SUM(CASE WHEN value = -1 THEN 1 ELSE 0 END), 0)
             FROM votes WHERE pair_id IN ({}) GROUP BY pair_id",
            placeholders(pair_ids.len())
        ))?;
        let rows = stmt.query_map(params_from_iter(pair_ids.iter().map(|id| id.get())), |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?, row.get::<_, i64>(2)?))
        })?;
        for row in rows {
            let (pair, up, down) = row?;
            result.insert(PairId(pair), Tally::new(count_from_i64(up), count_from_i64(down)));
        }
        Ok(result)
    }

    pub fn user_votes(
        &self,
        user_id: UserId,
        pair_ids: &[PairId],
    ) -> Result<HashMap<PairId, VoteValue>, StorageError> {
        if pair_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT pair_id, value FROM votes WHERE user_id = ? AND pair_id IN ({})",
            placeholders(pair_ids.len())
        ))?;
        let binds = std::iter::once(user_id.get()).chain(pair_ids.iter().map(|id| id.get()));
        let rows = stmt.query_map(params_from_iter(binds), |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
        })?;
        let mut result = HashMap::with_capacity(pair_ids.len());
        for row in rows {
            let (pair, raw) = row?;
            result.insert(PairId(pair), parse_value(raw)?);
        }
        Ok(result)
    }
}
