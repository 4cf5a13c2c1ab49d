//! [`SqliteStore`]: the SQLite implementation of [`FlashcardStore`].

use std::path::Path;

use flashmix_core::{
  flashcard::{Flashcard, NewFlashcard, StudentId},
  store::FlashcardStore,
  subject::Subject,
};
use rusqlite::{OptionalExtension as _, TransactionBehavior};

use crate::{
  Error, Result,
  encode::{FLASHCARD_COLUMNS, RawFlashcard, encode_dt, encode_subject, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A flashcard store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. Every call
/// is executed in order on the connection's background thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection, flushing any pending work.
  ///
  /// Other clones of this handle fail with a database error afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── FlashcardStore impl ─────────────────────────────────────────────────────

impl FlashcardStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, input: NewFlashcard, subject: Subject) -> Result<(Flashcard, bool)> {
    let candidate = Flashcard::create(input, subject);

    let id_str      = encode_uuid(candidate.id);
    let student     = candidate.student_id.as_str().to_owned();
    let question    = candidate.question.clone();
    let answer      = candidate.answer.clone();
    let subject_str = encode_subject(candidate.subject);
    let at_str      = encode_dt(candidate.created_at);

    // The write and the read-back share one IMMEDIATE transaction; together
    // with the UNIQUE constraint this makes the duplicate check atomic even
    // across processes sharing the file.
    let (raw, inserted): (RawFlashcard, bool) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let changed = tx.execute(
          "INSERT INTO flashcards (
             flashcard_id, student_id, question, answer, subject, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
           ON CONFLICT (student_id, question, answer) DO NOTHING",
          rusqlite::params![id_str, student, question, answer, subject_str, at_str],
        )?;

        let stored = tx.query_row(
          &format!(
            "SELECT {FLASHCARD_COLUMNS} FROM flashcards
             WHERE student_id = ?1 AND question = ?2 AND answer = ?3"
          ),
          rusqlite::params![student, question, answer],
          RawFlashcard::from_row,
        )?;

        tx.commit()?;
        Ok((stored, changed == 1))
      })
      .await?;

    let stored = raw.into_flashcard()?;
    if !inserted {
      tracing::debug!(
        flashcard_id = %stored.id,
        student_id = %stored.student_id,
        "duplicate flashcard, existing record kept"
      );
    }

    Ok((stored, inserted))
  }

  async fn find(&self, input: &NewFlashcard) -> Result<Option<Flashcard>> {
    let student  = input.student_id.as_str().to_owned();
    let question = input.question.clone();
    let answer   = input.answer.clone();

    let raw: Option<RawFlashcard> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {FLASHCARD_COLUMNS} FROM flashcards
                 WHERE student_id = ?1 AND question = ?2 AND answer = ?3"
              ),
              rusqlite::params![student, question, answer],
              RawFlashcard::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawFlashcard::into_flashcard).transpose()
  }

  async fn list_for(&self, student_id: &StudentId) -> Result<Vec<Flashcard>> {
    let student = student_id.as_str().to_owned();

    let raws: Vec<RawFlashcard> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {FLASHCARD_COLUMNS} FROM flashcards
           WHERE student_id = ?1
           ORDER BY seq"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![student], RawFlashcard::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawFlashcard::into_flashcard).collect()
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM flashcards", [], |r| r.get(0))?))
      .await?;

    u64::try_from(n).map_err(|_| Error::NegativeCount(n))
  }
}
