//! Completion service integration.
//!
//! `OllamaClient` speaks the Ollama HTTP API directly; the `CompletionBackend`
//! trait is the seam the relay depends on, so tests can substitute a scripted
//! backend and count invocations.

mod client;
pub mod models;

pub use client::OllamaClient;

use crate::error::Result;
use async_trait::async_trait;

/// A completion service that turns a prompt into answer text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Perform a single completion call. One attempt, no retries.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Endpoint the backend talks to, for user-facing error messages.
    fn endpoint(&self) -> &str;

    /// Model identifier the backend generates with.
    fn model(&self) -> &str;
}
