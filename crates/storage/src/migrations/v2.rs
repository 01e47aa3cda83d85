//! Migration v2: moderation queue for suggested translations

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS suggestions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    source_language_id INTEGER NOT NULL REFERENCES languages(id),
    target_language_id INTEGER NOT NULL REFERENCES languages(id),
    source_text TEXT NOT NULL,
    target_text TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending_review'
        CHECK (status IN ('pending_review', 'approved', 'rejected')),
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_suggestions_status ON suggestions(status, id);
";
