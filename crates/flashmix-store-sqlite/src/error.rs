//! Error type for `flashmix-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A stored value failed domain validation (e.g. an unknown subject name).
  #[error("core error: {0}")]
  Core(#[from] flashmix_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("stored count is negative: {0}")]
  NegativeCount(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
