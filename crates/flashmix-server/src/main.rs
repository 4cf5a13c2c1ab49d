//! flashmix-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the Flashmix JSON API over HTTP.
//!
//! ```text
//! FLASHMIX_CLASSIFIER__API_KEY=... cargo run -p flashmix-server -- --config config.toml
//! ```

mod config;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use flashmix_api::AppState;
use flashmix_classify::{ChatCompletionsBackend, LlmClassifier, RetryPolicy};
use flashmix_store_sqlite::SqliteStore;
use rand::{SeedableRng, rngs::StdRng};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Flashmix flashcard server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;
  tracing::debug!(?server_cfg, "configuration loaded");

  if server_cfg.classifier.api_key.is_empty() {
    tracing::warn!("no classifier API key configured; new cards will fall back to Other");
  }

  // Expand `~` in store path.
  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let backend = ChatCompletionsBackend::new(&server_cfg.classifier)
    .context("failed to build classifier HTTP client")?;
  let classifier = LlmClassifier::new(backend, RetryPolicy::from_config(&server_cfg.classifier));
  tracing::info!(
    model = %server_cfg.classifier.model,
    policy = ?classifier.policy(),
    "classifier ready"
  );

  // Build application state.
  let state = AppState::new(store.clone(), classifier, StdRng::from_entropy())
    .with_default_limit(server_cfg.default_limit);

  let app = flashmix_api::router(state).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("Shutting down, closing store");
  store.close().await.context("failed to close store")?;

  Ok(())
}

/// Resolve once Ctrl-C is received.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "cannot listen for Ctrl-C; running until killed");
    std::future::pending::<()>().await;
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/") {
    if let Ok(home) = std::env::var("HOME") {
      return PathBuf::from(home).join(rest);
    }
  }
  path.to_path_buf()
}
