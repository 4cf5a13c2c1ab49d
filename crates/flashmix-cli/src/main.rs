//! `flashmix` — command-line client for the Flashmix API.
//!
//! # Usage
//!
//! ```text
//! flashmix add --student alice "What is 2 + 2?" "4"
//! flashmix mix --student alice --limit 3
//! flashmix --url http://localhost:9000 health
//! ```

mod client;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::ApiClient;
use flashmix_core::flashcard::CardView;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "http://localhost:8000";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "flashmix", version, about = "Command-line client for the Flashmix API")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the flashmix server (default: http://localhost:8000).
  #[arg(long, env = "FLASHMIX_URL")]
  url: Option<String>,

  /// Print raw JSON instead of formatted text.
  #[arg(long)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Submit a flashcard; the server assigns its subject.
  Add {
    #[arg(short, long)]
    student: String,
    question: String,
    answer:   String,
  },
  /// Fetch a subject-mixed study batch.
  Mix {
    #[arg(short, long)]
    student: String,
    /// Batch size (server default when omitted).
    #[arg(short, long)]
    limit:   Option<u32>,
  },
  /// Check server status.
  Health,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flag (or env) overrides config file, which overrides the default.
  let base_url = args
    .url
    .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
    .unwrap_or_else(|| DEFAULT_URL.to_string());
  tracing::debug!(%base_url, "using server");

  let client = ApiClient::new(base_url)?;

  match args.command {
    Command::Add { student, question, answer } => {
      let receipt = client.submit(&student, &question, &answer).await?;
      if args.json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
      } else {
        println!("{} [{}] {}", receipt.message, receipt.subject, receipt.id);
      }
    }
    Command::Mix { student, limit } => {
      let cards = client.mixed(&student, limit).await?;
      if args.json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
      } else if cards.is_empty() {
        println!("No flashcards for {student}");
      } else {
        for (i, card) in cards.iter().enumerate() {
          println!("{}", render_card(i + 1, card));
        }
      }
    }
    Command::Health => {
      let health = client.health().await?;
      if args.json {
        println!("{}", serde_json::to_string_pretty(&health)?);
      } else {
        println!("{} ({} flashcards) at {}", health.status, health.total_flashcards, health.timestamp);
      }
    }
  }

  Ok(())
}

fn render_card(n: usize, card: &CardView) -> String {
  format!("{n}. [{}] {}\n   {}", card.subject, card.question, card.answer)
}

#[cfg(test)]
mod tests {
  use flashmix_core::subject::Subject;

  use super::*;

  #[test]
  fn parses_add_and_mix() {
    let args = Args::try_parse_from(["flashmix", "add", "-s", "amy", "2+2?", "4"]).unwrap();
    assert!(matches!(
      args.command,
      Command::Add { ref student, ref question, ref answer }
        if student == "amy" && question == "2+2?" && answer == "4"
    ));

    let args = Args::try_parse_from(["flashmix", "--json", "mix", "--student", "amy", "--limit", "3"]).unwrap();
    assert!(args.json);
    assert!(matches!(args.command, Command::Mix { limit: Some(3), .. }));
  }

  #[test]
  fn mix_requires_student() {
    assert!(Args::try_parse_from(["flashmix", "mix"]).is_err());
  }

  #[test]
  fn card_rendering() {
    let card = CardView {
      id:       "6a1c3a5e-8e0f-4c2b-9d0a-2f1a3b4c5d6e".parse().unwrap(),
      question: "Symbol for gold?".to_string(),
      answer:   "Au".to_string(),
      subject:  Subject::Chemistry,
    };
    assert_eq!(render_card(2, &card), "2. [Chemistry] Symbol for gold?\n   Au");
  }
}
