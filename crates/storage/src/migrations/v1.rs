//! Migration v1: core schema

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS languages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    code TEXT NOT NULL UNIQUE CHECK (code <> '' AND code NOT GLOB '*[^a-z]*'),
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sayings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    language_id INTEGER NOT NULL REFERENCES languages(id) ON DELETE RESTRICT,
    raw_text TEXT NOT NULL,
    canonical_text TEXT NOT NULL,
    slug TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE (language_id, raw_text)
);

CREATE TABLE IF NOT EXISTS translation_pairs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    saying_low_id INTEGER NOT NULL REFERENCES sayings(id) ON DELETE CASCADE,
    saying_high_id INTEGER NOT NULL REFERENCES sayings(id) ON DELETE CASCADE,
    created_at TEXT NOT NULL,
    CHECK (saying_low_id < saying_high_id),
    UNIQUE (saying_low_id, saying_high_id)
);

CREATE TABLE IF NOT EXISTS votes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    pair_id INTEGER NOT NULL REFERENCES translation_pairs(id) ON DELETE CASCADE,
    value INTEGER NOT NULL DEFAULT 0 CHECK (value IN (-1, 0, 1)),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE (user_id, pair_id)
);

CREATE INDEX IF NOT EXISTS idx_sayings_canonical ON sayings(language_id, canonical_text);
CREATE INDEX IF NOT EXISTS idx_sayings_slug ON sayings(slug);
CREATE INDEX IF NOT EXISTS idx_pairs_high ON translation_pairs(saying_high_id);
CREATE INDEX IF NOT EXISTS idx_votes_pair ON votes(pair_id);
";
