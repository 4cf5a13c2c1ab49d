//! SQL schema for the Flashmix SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA busy_timeout = 5000;

-- Flashcards are insert-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS flashcards (
    seq          INTEGER PRIMARY KEY AUTOINCREMENT,  -- insertion order
    flashcard_id TEXT NOT NULL UNIQUE,
    student_id   TEXT NOT NULL,                      -- lowercased
    question     TEXT NOT NULL CHECK (question != ''),
    answer       TEXT NOT NULL CHECK (answer != ''),
    subject      TEXT NOT NULL CHECK (
        subject IN ('Mathematics', 'Physics', 'Chemistry', 'Biology', 'Other')
    ),
    created_at   TEXT NOT NULL,                      -- ISO 8601 UTC; server-assigned
    UNIQUE (student_id, question, answer)
);

CREATE INDEX IF NOT EXISTS flashcards_student_idx ON flashcards(student_id);

PRAGMA user_version = 1;
";
