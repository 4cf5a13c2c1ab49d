//! The `Classifier` trait: the seam between flashcard text and [`Subject`].
//!
//! Implementations wrap an open-vocabulary source (an LLM, a keyword table, a
//! test script) and must close its output onto the fixed taxonomy. There is
//! no error channel: failures degrade to [`Subject::Other`].

use std::future::Future;

use crate::subject::Subject;

/// Assigns exactly one [`Subject`] to a question/answer pair.
pub trait Classifier: Send + Sync {
  fn classify<'a>(
    &'a self,
    question: &'a str,
    answer: &'a str,
  ) -> impl Future<Output = Subject> + Send + 'a;
}

