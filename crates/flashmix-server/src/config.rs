//! Runtime configuration for the server binary.
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file given
//! with `--config` (optional), then `FLASHMIX_*` environment variables with
//! `__` separating nested keys (e.g. `FLASHMIX_CLASSIFIER__API_KEY`).

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use flashmix_classify::ClassifierConfig;
use serde::Deserialize;

/// Fallback for `classifier.api_key` when neither file nor `FLASHMIX_*`
/// variables set one.
const API_KEY_ENV: &str = "GROQ_API_KEY";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub store_path:    PathBuf,
  /// Batch size for `/get-subject` when the request omits `limit`.
  pub default_limit: usize,
  pub classifier:    ClassifierConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          8000,
      store_path:    PathBuf::from("flashcards.db"),
      default_limit: 5,
      classifier:    ClassifierConfig::default(),
    }
  }
}

impl ServerConfig {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("FLASHMIX")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()
      .context("failed to read config file")?;

    let mut server_cfg: ServerConfig = settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;

    if server_cfg.classifier.api_key.is_empty() {
      if let Ok(key) = std::env::var(API_KEY_ENV) {
        server_cfg.classifier.api_key = key;
      }
    }

    Ok(server_cfg)
  }

  /// `host:port`, ready for binding.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use tempfile::NamedTempFile;

  use super::*;

  /// Write `contents` to a `.toml` file removed when the handle drops.
  fn temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
  }

  #[test]
  fn missing_file_yields_defaults() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/flashmix.toml")).unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.default_limit, 5);
    assert_eq!(cfg.store_path, PathBuf::from("flashcards.db"));
    assert_eq!(cfg.classifier.model, "llama-3.1-8b-instant");
    assert_eq!(cfg.classifier.max_retries, 2);
  }

  #[test]
  fn file_values_override_defaults() {
    let file = temp_config(
      r#"
        port = 9100
        store_path = "/tmp/cards.db"

        [classifier]
        model = "llama-3.3-70b-versatile"
        max_retries = 1
      "#,
    );

    let cfg = ServerConfig::load(file.path()).unwrap();

    assert_eq!(cfg.port, 9100);
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.address(), "127.0.0.1:9100");
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/cards.db"));
    assert_eq!(cfg.classifier.model, "llama-3.3-70b-versatile");
    assert_eq!(cfg.classifier.max_retries, 1);
    // Unset nested keys keep their defaults.
    assert_eq!(cfg.classifier.timeout_ms, 10_000);
  }
}
