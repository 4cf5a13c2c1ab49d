//! The `FlashcardStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `flashmix-store-sqlite`).
//! Higher layers (`flashmix-api`, `flashmix-server`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  flashcard::{Flashcard, NewFlashcard, StudentId},
  subject::Subject,
};

/// Abstraction over a flashcard store backend.
///
/// Records are insert-only: there is no update and no delete.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait FlashcardStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a flashcard unless its (student, question, answer) triple is
  /// already stored.
  ///
  /// Returns the stored record and `true` if it was written by this call, or
  /// the pre-existing record and `false` if it was a duplicate. The check and
  /// the write are atomic: of several concurrent calls with the same triple,
  /// exactly one observes `true`.
  fn insert(
    &self,
    input: NewFlashcard,
    subject: Subject,
  ) -> impl Future<Output = Result<(Flashcard, bool), Self::Error>> + Send + '_;

  /// Look up the stored card for a triple without writing anything.
  fn find<'a>(
    &'a self,
    input: &'a NewFlashcard,
  ) -> impl Future<Output = Result<Option<Flashcard>, Self::Error>> + Send + 'a;

  /// All cards belonging to `student_id`, in insertion order.
  fn list_for<'a>(
    &'a self,
    student_id: &'a StudentId,
  ) -> impl Future<Output = Result<Vec<Flashcard>, Self::Error>> + Send + 'a;

  /// Total number of stored cards across all students.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
