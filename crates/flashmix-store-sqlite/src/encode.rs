//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, UUIDs as hyphenated lowercase
//! strings and subjects by their canonical name.

use chrono::{DateTime, Utc};
use flashmix_core::{
  flashcard::{Flashcard, StudentId},
  subject::Subject,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Subject ──────────────────────────────────────────────────────────────────

pub fn encode_subject(s: Subject) -> &'static str { s.as_str() }

pub fn decode_subject(s: &str) -> Result<Subject> { Ok(s.parse()?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching [`RawFlashcard::from_row`], in order.
pub const FLASHCARD_COLUMNS: &str =
  "flashcard_id, student_id, question, answer, subject, created_at";

/// Raw strings read directly from a `flashcards` row.
pub struct RawFlashcard {
  pub flashcard_id: String,
  pub student_id:   String,
  pub question:     String,
  pub answer:       String,
  pub subject:      String,
  pub created_at:   String,
}

impl RawFlashcard {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      flashcard_id: row.get(0)?,
      student_id:   row.get(1)?,
      question:     row.get(2)?,
      answer:       row.get(3)?,
      subject:      row.get(4)?,
      created_at:   row.get(5)?,
    })
  }

  pub fn into_flashcard(self) -> Result<Flashcard> {
    Ok(Flashcard {
      id:         decode_uuid(&self.flashcard_id)?,
      student_id: StudentId::parse(&self.student_id)?,
      question:   self.question,
      answer:     self.answer,
      subject:    decode_subject(&self.subject)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
