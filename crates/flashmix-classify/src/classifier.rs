//! [`LlmClassifier`]: retrying, fallback-to-`Other` classification.

use std::time::Duration;

use flashmix_core::{classify::Classifier, subject::Subject};

use crate::{
  backend::CompletionBackend, config::ClassifierConfig, error::BackendError, prompt::Prompt,
};

/// Upper bound on the pause between two attempts.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(1);

// ─── Policy ──────────────────────────────────────────────────────────────────

/// How long each attempt may take and how often to try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
  pub timeout:     Duration,
  /// Retries after the first attempt; `0` means a single attempt.
  pub max_retries: u32,
  pub retry_delay: Duration,
}

impl RetryPolicy {
  pub fn from_config(config: &ClassifierConfig) -> Self {
    Self {
      timeout:     Duration::from_millis(config.timeout_ms),
      max_retries: config.max_retries,
      retry_delay: Duration::from_millis(config.retry_delay_ms),
    }
  }

  /// Pause after the `attempt`-th failure (1-based): linear, capped.
  fn delay_after(&self, attempt: u32) -> Duration {
    self.retry_delay.saturating_mul(attempt).min(MAX_RETRY_DELAY)
  }
}

impl Default for RetryPolicy {
  fn default() -> Self { Self::from_config(&ClassifierConfig::default()) }
}

// ─── Classifier ──────────────────────────────────────────────────────────────

/// Classifies flashcards by asking a language model, never failing outward.
///
/// Each attempt is bounded by [`RetryPolicy::timeout`]. Any backend error is
/// treated as transient and retried up to [`RetryPolicy::max_retries`] times.
/// When every attempt fails, or the model answers with something outside the
/// subject list, the result is [`Subject::Other`].
#[derive(Clone)]
pub struct LlmClassifier<B> {
  backend: B,
  policy:  RetryPolicy,
}

impl<B: CompletionBackend> LlmClassifier<B> {
  pub fn new(backend: B, policy: RetryPolicy) -> Self { Self { backend, policy } }

  pub fn policy(&self) -> RetryPolicy { self.policy }

  /// Run the prompt until one attempt succeeds; `None` once retries are spent.
  async fn complete_with_retry(&self, prompt: &Prompt) -> Option<String> {
    let attempts = self.policy.max_retries.saturating_add(1);

    for attempt in 1..=attempts {
      let outcome =
        match tokio::time::timeout(self.policy.timeout, self.backend.complete(prompt)).await {
          Ok(result) => result,
          Err(_) => Err(BackendError::Timeout(self.policy.timeout)),
        };

      match outcome {
        Ok(text) => return Some(text),
        Err(error) => {
          tracing::warn!(
            backend = self.backend.name(),
            attempt,
            attempts,
            %error,
            "classification attempt failed"
          );
          if attempt < attempts {
            tokio::time::sleep(self.policy.delay_after(attempt)).await;
          }
        }
      }
    }

    None
  }
}

impl<B: CompletionBackend> Classifier for LlmClassifier<B> {
  async fn classify(&self, question: &str, answer: &str) -> Subject {
    let prompt = Prompt::for_flashcard(question, answer);

    let Some(raw) = self.complete_with_retry(&prompt).await else {
      tracing::warn!(backend = self.backend.name(), "classifier unavailable, using Other");
      return Subject::Other;
    };

    tracing::debug!(backend = self.backend.name(), raw = %raw, "model output");
    Subject::from_model_output(&raw).unwrap_or_else(|| {
      tracing::warn!(raw = %raw, "model output is not a known subject, using Other");
      Subject::Other
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
