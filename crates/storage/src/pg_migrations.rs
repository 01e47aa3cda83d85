//! PostgreSQL schema migrations for proverbia storage.
//!
//! Every statement is idempotent, so the whole set runs on each startup.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS languages (
            id BIGSERIAL PRIMARY KEY,
            code TEXT NOT NULL UNIQUE CHECK (code ~ '^[a-z]+$'),
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sayings (
            id BIGSERIAL PRIMARY KEY,
            language_id BIGINT NOT NULL REFERENCES languages(id) ON DELETE RESTRICT,
            raw_text TEXT NOT NULL,
            canonical_text TEXT NOT NULL,
            slug TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            UNIQUE (language_id, raw_text)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_sayings_canonical ON sayings (language_id, canonical_text)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_sayings_slug ON sayings (slug)")
        .execute(pool)
        .await?;

    // Substring search: trigram GIN index on canonical text
    sqlx::query("CREATE EXTENSION IF NOT EXISTS pg_trgm").execute(pool).await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_sayings_canonical_trgm
         ON sayings USING GIN (canonical_text gin_trgm_ops)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS translation_pairs (
            id BIGSERIAL PRIMARY KEY,
            saying_low_id BIGINT NOT NULL REFERENCES sayings(id) ON DELETE CASCADE,
            saying_high_id BIGINT NOT NULL REFERENCES sayings(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT translation_pairs_ordered CHECK (saying_low_id < saying_high_id),
            CONSTRAINT translation_pairs_unique UNIQUE (saying_low_id, saying_high_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_pairs_high ON translation_pairs (saying_high_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS votes (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL,
            pair_id BIGINT NOT NULL REFERENCES translation_pairs(id) ON DELETE CASCADE,
            value SMALLINT NOT NULL DEFAULT 0 CHECK (value IN (-1, 0, 1)),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT votes_user_pair_unique UNIQUE (user_id, pair_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_votes_pair ON votes (pair_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS suggestions (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL,
            source_language_id BIGINT NOT NULL REFERENCES languages(id),
            target_language_id BIGINT NOT NULL REFERENCES languages(id),
            source_text TEXT NOT NULL,
            target_text TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending_review'
                CHECK (status IN ('pending_review', 'approved', 'rejected')),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_suggestions_status ON suggestions (status, id)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations applied");
    Ok(())
}
