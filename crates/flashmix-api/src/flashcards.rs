//! Handler for `POST /flashcard`.
//!
//! | Status | When |
//! |--------|------|
//! | `201`  | New card stored; body is a [`Submission`] with `created: true` |
//! | `200`  | Same (student, question, answer) already stored; `created: false` |
//! | `400`  | `student_id`, `question` or `answer` missing or blank |
//! | `500`  | Store unavailable |

use axum::{Json, extract::State, http::StatusCode};
use flashmix_core::{
  classify::Classifier,
  flashcard::{NewFlashcard, Submission},
  store::FlashcardStore,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// JSON body accepted by `POST /flashcard`. Missing fields are treated as
/// blank so they fail validation with a 400 rather than a decode error.
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
  #[serde(default)]
  pub student_id: String,
  #[serde(default)]
  pub question:   String,
  #[serde(default)]
  pub answer:     String,
}

/// `POST /flashcard` — classify and store a card, idempotently.
///
/// A known duplicate is answered from the store without consulting the
/// classifier. Two racing submissions of the same card may both classify,
/// but the store lets only one of them write.
pub async fn create<S, C>(
  State(state): State<AppState<S, C>>,
  Json(body): Json<SubmitBody>,
) -> Result<(StatusCode, Json<Submission>), ApiError>
where
  S: FlashcardStore,
  C: Classifier,
{
  let input = NewFlashcard::new(&body.student_id, &body.question, &body.answer)?;

  if let Some(existing) = state
    .store
    .find(&input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    tracing::debug!(flashcard_id = %existing.id, "duplicate submission, skipping classification");
    return Ok((StatusCode::OK, Json(Submission::new(&existing, false))));
  }

  let subject = state.classifier.classify(&input.question, &input.answer).await;

  let (card, created) = state
    .store
    .insert(input, subject)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(
    flashcard_id = %card.id,
    student_id = %card.student_id,
    subject = %card.subject,
    created,
    "flashcard submitted"
  );

  let status = if created { StatusCode::CREATED } else { StatusCode::OK };
  Ok((status, Json(Submission::new(&card, created))))
}
