//! Error type for completion backends.
//!
//! These never leave [`LlmClassifier`](crate::LlmClassifier): every variant is
//! treated as transient, retried, and finally absorbed into the `Other`
//! fallback.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
  /// Connection failure, client-side timeout, or an undecodable body.
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("service returned {status}: {body}")]
  Status { status: u16, body: String },

  #[error("response contained no choices")]
  NoChoices,

  /// The first choice had a `null` message content.
  #[error("choice carried no message content")]
  MissingContent,

  #[error("no response within {0:?}")]
  Timeout(Duration),
}
