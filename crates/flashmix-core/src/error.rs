//! Error types for `flashmix-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required text field was missing or blank after trimming.
  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  #[error("limit must be at least 1, got {0}")]
  InvalidLimit(i64),

  #[error("unknown subject: {0:?}")]
  UnknownSubject(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
