//! Async HTTP client wrapping the Flashmix JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use flashmix_core::flashcard::{CardView, Submission};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
  pub status:           String,
  pub timestamp:        String,
  pub total_flashcards: u64,
}

#[derive(Serialize)]
struct SubmitBody<'a> {
  student_id: &'a str,
  question:   &'a str,
  answer:     &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
  error: String,
}

/// Async HTTP client for the Flashmix REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    // Classification retries on the server can take a while.
    let client = Client::builder()
      .timeout(Duration::from_secs(60))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  /// `POST /flashcard`
  pub async fn submit(&self, student_id: &str, question: &str, answer: &str) -> Result<Submission> {
    let resp = self
      .client
      .post(self.url("/flashcard"))
      .json(&SubmitBody { student_id, question, answer })
      .send()
      .await
      .context("POST /flashcard failed")?;

    let resp = check("POST /flashcard", resp).await?;
    resp.json().await.context("deserialising submission")
  }

  /// `GET /get-subject?student_id=<id>[&limit=<n>]`
  pub async fn mixed(&self, student_id: &str, limit: Option<u32>) -> Result<Vec<CardView>> {
    let mut query = vec![("student_id", student_id.to_string())];
    if let Some(limit) = limit {
      query.push(("limit", limit.to_string()));
    }

    let resp = self
      .client
      .get(self.url("/get-subject"))
      .query(&query)
      .send()
      .await
      .context("GET /get-subject failed")?;

    let resp = check("GET /get-subject", resp).await?;
    resp.json().await.context("deserialising cards")
  }

  /// `GET /health`
  pub async fn health(&self) -> Result<Health> {
    let resp = self
      .client
      .get(self.url("/health"))
      .send()
      .await
      .context("GET /health failed")?;

    let resp = check("GET /health", resp).await?;
    resp.json().await.context("deserialising health")
  }
}

/// Pass through success responses; turn anything else into an error carrying
/// the server's `{"error": ..}` message when there is one.
async fn check(what: &str, resp: Response) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }

  let text = resp.text().await.unwrap_or_default();
  let detail = serde_json::from_str::<ErrorBody>(&text)
    .map(|body| body.error)
    .unwrap_or(text);

  if detail.is_empty() {
    Err(anyhow!("{what} → {status}"))
  } else {
    Err(anyhow!("{what} → {status}: {detail}"))
  }
}
