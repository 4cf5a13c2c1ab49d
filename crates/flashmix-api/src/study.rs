//! Handler for `GET /get-subject`, a subject-mixed study batch.

use std::sync::PoisonError;

use axum::{
  Json,
  extract::{Query, State},
};
use flashmix_core::{
  Error as CoreError,
  flashcard::{CardView, StudentId},
  mix::select_mixed,
  store::FlashcardStore,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct MixParams {
  /// Required; matched case-insensitively.
  #[serde(default)]
  pub student_id: String,
  /// Batch size; the server default applies when absent. Must be at least 1.
  pub limit:      Option<i64>,
}

/// `GET /get-subject?student_id=<id>[&limit=<n>]`
///
/// Returns up to `limit` cards, visiting every subject the student has cards
/// in before repeating one. A student with no cards gets `[]`.
pub async fn mixed<S, C>(
  State(state): State<AppState<S, C>>,
  Query(params): Query<MixParams>,
) -> Result<Json<Vec<CardView>>, ApiError>
where
  S: FlashcardStore,
{
  let student_id = StudentId::parse(&params.student_id)?;
  let limit = match params.limit {
    None => state.default_limit,
    Some(n) if n >= 1 => usize::try_from(n).unwrap_or(usize::MAX),
    Some(n) => return Err(CoreError::InvalidLimit(n).into()),
  };

  let cards = state
    .store
    .list_for(&student_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let available = cards.len();

  // Selection never panics mid-way, so a poisoned RNG is still usable.
  let batch = {
    let mut rng = state.mix_rng.lock().unwrap_or_else(PoisonError::into_inner);
    select_mixed(cards, limit, &mut *rng)
  };

  tracing::debug!(%student_id, limit, available, selected = batch.len(), "mixed batch");

  Ok(Json(batch.into_iter().map(CardView::from).collect()))
}
