//! Classifier settings, deserialised from the server configuration.

use std::fmt;

use serde::Deserialize;

/// Connection and retry settings for the classification service.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
  /// Base URL of an OpenAI-compatible API, without `/chat/completions`.
  pub base_url:       String,
  pub api_key:        String,
  pub model:          String,
  pub temperature:    f32,
  pub max_tokens:     u32,
  /// Per-attempt timeout.
  pub timeout_ms:     u64,
  /// Retries after the first attempt.
  pub max_retries:    u32,
  pub retry_delay_ms: u64,
}

impl Default for ClassifierConfig {
  fn default() -> Self {
    Self {
      base_url:       "https://api.groq.com/openai/v1".to_string(),
      api_key:        String::new(),
      model:          "llama-3.1-8b-instant".to_string(),
      temperature:    0.0,
      max_tokens:     50,
      timeout_ms:     10_000,
      max_retries:    2,
      retry_delay_ms: 250,
    }
  }
}

// Hand-written so the API key never reaches the logs.
impl fmt::Debug for ClassifierConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClassifierConfig")
      .field("base_url", &self.base_url)
      .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
      .field("model", &self.model)
      .field("temperature", &self.temperature)
      .field("max_tokens", &self.max_tokens)
      .field("timeout_ms", &self.timeout_ms)
      .field("max_retries", &self.max_retries)
      .field("retry_delay_ms", &self.retry_delay_ms)
      .finish()
  }
}
