//! Flashcard types, the unit of storage and study.
//!
//! A flashcard is immutable once stored. Its subject is decided exactly once,
//! by a [`Classifier`](crate::classify::Classifier), before the record is
//! written.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, subject::Subject};

// ─── Student ─────────────────────────────────────────────────────────────────

/// A normalised student identifier: trimmed and lowercased, never empty.
///
/// Identifiers differing only in case resolve to the same student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
  pub fn parse(raw: &str) -> Result<Self> {
    let normalised = raw.trim().to_lowercase();
    if normalised.is_empty() {
      return Err(Error::EmptyField("student_id"));
    }
    Ok(Self(normalised))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for StudentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl TryFrom<String> for StudentId {
  type Error = Error;

  fn try_from(raw: String) -> Result<Self> { Self::parse(&raw) }
}

impl From<StudentId> for String {
  fn from(id: StudentId) -> Self { id.0 }
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// A validated submission: the duplicate-detection triple.
///
/// Question and answer are trimmed of surrounding whitespace; matching against
/// stored cards is exact on the normalised text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlashcard {
  pub student_id: StudentId,
  pub question:   String,
  pub answer:     String,
}

impl NewFlashcard {
  pub fn new(student_id: &str, question: &str, answer: &str) -> Result<Self> {
    let student_id = StudentId::parse(student_id)?;
    let question = non_empty("question", question)?;
    let answer = non_empty("answer", answer)?;
    Ok(Self { student_id, question, answer })
  }
}

fn non_empty(field: &'static str, raw: &str) -> Result<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    Err(Error::EmptyField(field))
  } else {
    Ok(trimmed.to_owned())
  }
}

// ─── Stored record ───────────────────────────────────────────────────────────

/// A persisted flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
  pub id:         Uuid,
  pub student_id: StudentId,
  pub question:   String,
  pub answer:     String,
  pub subject:    Subject,
  /// Server-assigned; only used to order cards within a subject.
  pub created_at: DateTime<Utc>,
}

impl Flashcard {
  /// Build a fresh record for `input`, assigning a new id and timestamp.
  pub fn create(input: NewFlashcard, subject: Subject) -> Self {
    Self {
      id: Uuid::new_v4(),
      student_id: input.student_id,
      question: input.question,
      answer: input.answer,
      subject,
      created_at: Utc::now(),
    }
  }
}

/// The public projection of a flashcard returned to study clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
  pub id:       Uuid,
  pub question: String,
  pub answer:   String,
  pub subject:  Subject,
}

impl From<Flashcard> for CardView {
  fn from(card: Flashcard) -> Self {
    Self {
      id:       card.id,
      question: card.question,
      answer:   card.answer,
      subject:  card.subject,
    }
  }
}

/// The outcome of a submission, as returned by `POST /flashcard`.
///
/// A duplicate submission is still a success; `created` tells the two cases
/// apart and `subject` is the one stored with the original record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
  pub success:    bool,
  pub created:    bool,
  pub message:    String,
  pub id:         Uuid,
  pub student_id: StudentId,
  pub subject:    Subject,
}

impl Submission {
  pub fn new(card: &Flashcard, created: bool) -> Self {
    let message = if created {
      "Flashcard added successfully"
    } else {
      "Flashcard already exists for this student"
    };
    Self {
      success: true,
      created,
      message: message.to_string(),
      id: card.id,
      student_id: card.student_id.clone(),
      subject: card.subject,
    }
  }
}
