//! Completion backends: the raw text-generation layer.

use std::{future::Future, time::Duration};

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{config::ClassifierConfig, error::BackendError, prompt::Prompt};

/// Turns a [`Prompt`] into model output text.
///
/// Implementations report every failure as an error; retrying and falling
/// back are the caller's business.
pub trait CompletionBackend: Send + Sync {
  /// Short name used in log events.
  fn name(&self) -> &'static str;

  fn complete<'a>(
    &'a self,
    prompt: &'a Prompt,
  ) -> impl Future<Output = Result<String, BackendError>> + Send + 'a;
}

// ─── OpenAI-compatible chat completions ──────────────────────────────────────

/// Backend for any service implementing `POST {base_url}/chat/completions`.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ChatCompletionsBackend {
  client:      Client,
  endpoint:    String,
  api_key:     String,
  model:       String,
  temperature: f32,
  max_tokens:  u32,
}

impl ChatCompletionsBackend {
  pub fn new(config: &ClassifierConfig) -> Result<Self, BackendError> {
    let client = Client::builder()
      .timeout(Duration::from_millis(config.timeout_ms))
      .build()?;

    Ok(Self {
      client,
      endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
      api_key: config.api_key.clone(),
      model: config.model.clone(),
      temperature: config.temperature,
      max_tokens: config.max_tokens,
    })
  }
}

impl CompletionBackend for ChatCompletionsBackend {
  fn name(&self) -> &'static str { "chat-completions" }

  async fn complete(&self, prompt: &Prompt) -> Result<String, BackendError> {
    let request = ChatCompletionRequest {
      model:       &self.model,
      messages:    [
        ChatMessage { role: "system", content: &prompt.system },
        ChatMessage { role: "user", content: &prompt.user },
      ],
      temperature: self.temperature,
      max_tokens:  self.max_tokens,
    };

    let mut builder = self.client.post(&self.endpoint).json(&request);
    if !self.api_key.is_empty() {
      builder = builder.bearer_auth(&self.api_key);
    }

    let response = builder.send().await?;

    if !response.status().is_success() {
      let status = response.status().as_u16();
      let body = response.text().await.unwrap_or_default();
      return Err(BackendError::Status { status, body });
    }

    let body: ChatCompletionResponse = response.json().await?;
    let choice = body.choices.into_iter().next().ok_or(BackendError::NoChoices)?;
    choice.message.content.ok_or(BackendError::MissingContent)
  }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
  model:       &'a str,
  messages:    [ChatMessage<'a>; 2],
  temperature: f32,
  max_tokens:  u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
  role:    &'static str,
  content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
  #[serde(default)]
  choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
  message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
  content: Option<String>,
}
