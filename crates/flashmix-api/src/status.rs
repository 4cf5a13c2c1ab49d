//! Handlers for `GET /` and `GET /health`.

use axum::{Json, extract::State};
use chrono::Utc;
use flashmix_core::store::FlashcardStore;
use serde_json::{Value, json};

use crate::{AppState, error::ApiError};

/// `GET /`: static service description.
pub async fn root() -> Json<Value> {
  Json(json!({
    "message": "Flashmix API",
    "version": env!("CARGO_PKG_VERSION"),
    "endpoints": {
      "POST /flashcard": "Add a new flashcard",
      "GET /get-subject": "Get mixed flashcards for a student",
      "GET /health": "Health check",
    },
  }))
}

/// `GET /health`: liveness plus the total number of stored cards.
pub async fn health<S, C>(State(state): State<AppState<S, C>>) -> Result<Json<Value>, ApiError>
where
  S: FlashcardStore,
{
  let total = state
    .store
    .count()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(Json(json!({
    "status": "healthy",
    "timestamp": Utc::now().to_rfc3339(),
    "total_flashcards": total,
  })))
}
