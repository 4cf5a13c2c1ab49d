//! JSON REST API for Flashmix.
//!
//! Exposes an axum [`Router`] backed by any
//! [`FlashcardStore`](flashmix_core::store::FlashcardStore) and
//! [`Classifier`](flashmix_core::classify::Classifier). TLS, auth and
//! transport concerns are the caller's responsibility.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Static service description |
//! | `GET`  | `/health` | Status and total card count |
//! | `POST` | `/flashcard` | Body: `{"student_id","question","answer"}` |
//! | `GET`  | `/get-subject` | `?student_id=<id>[&limit=<n>]` |

pub mod error;
pub mod flashcards;
pub mod status;
pub mod study;

use std::sync::{Arc, Mutex};

use axum::{
  Router,
  routing::{get, post},
};
use flashmix_core::{classify::Classifier, mix::DEFAULT_LIMIT, store::FlashcardStore};
use rand::rngs::StdRng;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S, C> {
  pub store:         Arc<S>,
  pub classifier:    Arc<C>,
  /// Source of the per-request subject visit order for mixed batches.
  pub mix_rng:       Arc<Mutex<StdRng>>,
  /// Batch size for `/get-subject` when the request has no `limit`.
  pub default_limit: usize,
}

impl<S, C> AppState<S, C> {
  pub fn new(store: S, classifier: C, mix_rng: StdRng) -> Self {
    Self {
      store:         Arc::new(store),
      classifier:    Arc::new(classifier),
      mix_rng:       Arc::new(Mutex::new(mix_rng)),
      default_limit: DEFAULT_LIMIT,
    }
  }

  /// Override the default batch size; values below 1 are raised to 1.
  pub fn with_default_limit(mut self, limit: usize) -> Self {
    self.default_limit = limit.max(1);
    self
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API [`Router`] for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S, C>(state: AppState<S, C>) -> Router<()>
where
  S: FlashcardStore + Clone + 'static,
  C: Classifier + Clone + 'static,
{
  Router::new()
    .route("/", get(status::root))
    .route("/health", get(status::health::<S, C>))
    .route("/flashcard", post(flashcards::create::<S, C>))
    .route("/get-subject", get(study::mixed::<S, C>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
