//! Core types and trait definitions for Flashmix.
//!
//! This crate is deliberately free of HTTP, database and LLM dependencies.
//! It owns the closed [`Subject`](subject::Subject) taxonomy, the flashcard
//! model, the [`Classifier`](classify::Classifier) and
//! [`FlashcardStore`](store::FlashcardStore) seams, and the pure mix selector.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod classify;
pub mod error;
pub mod flashcard;
pub mod mix;
pub mod store;
pub mod subject;

pub use error::{Error, Result};
