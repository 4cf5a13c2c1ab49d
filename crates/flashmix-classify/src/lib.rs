//! LLM-backed subject classification for Flashmix.
//!
//! [`LlmClassifier`] implements [`flashmix_core::classify::Classifier`] on top
//! of any [`CompletionBackend`]. It owns the retry and timeout policy and the
//! coercion of free-form model output onto the closed subject set; the
//! backend only has to turn a [`Prompt`] into text.
//!
//! [`ChatCompletionsBackend`] speaks the OpenAI-compatible chat completions
//! protocol (Groq by default).

mod backend;
mod classifier;
mod config;
mod prompt;

pub mod error;

pub use backend::{ChatCompletionsBackend, CompletionBackend};
pub use classifier::{LlmClassifier, RetryPolicy};
pub use config::ClassifierConfig;
pub use error::BackendError;
pub use prompt::Prompt;
