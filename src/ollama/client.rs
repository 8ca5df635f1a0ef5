// Ollama completion client

use super::models::{GenerateRequest, ModelTags};
use super::CompletionBackend;
use crate::config::OllamaConfig;
use crate::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for a locally running Ollama server.
///
/// Performs exactly one non-streaming `generate` call per completion; there
/// are no retries and no cancellation beyond the transport timeout. Every
/// failure is classified into one of the four relay error kinds so the
/// caller can translate it into user-facing text.
pub struct OllamaClient {
    http: Client,
    base_url: String,
    generate_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a new client with pooled connections and the configured
    /// timeouts.
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {e}")))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let generate_url = format!("{base_url}/api/generate");

        Ok(Self {
            http,
            base_url,
            generate_url,
            model: config.model.clone(),
        })
    }

    /// List the models installed on the Ollama server via `/api/tags`.
    ///
    /// Used by the `--check` startup probe to warn when the configured model
    /// is missing before the first question arrives.
    pub async fn installed_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        debug!("Listing installed models via {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RelayError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body).unwrap_or(body),
            });
        }

        let tags: ModelTags = response
            .json()
            .await
            .map_err(|e| RelayError::Parse(e.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}

#[async_trait]
impl CompletionBackend for OllamaClient {
    /// Issue one blocking `generate` call and return the answer text.
    ///
    /// Failure classification:
    /// - the request cannot be sent → `Connection`
    /// - non-2xx status → `Api` with the status code
    /// - body is not valid JSON → `Parse`
    /// - JSON without a string `response` field → `Shape`
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(
            "Calling Ollama ({}) at {} (non-streaming)",
            self.model, self.generate_url
        );

        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(&self.generate_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Parse(e.to_string()))?;

        if !status.is_success() {
            let message = extract_error_message(&body).unwrap_or_else(|| body.clone());
            error!("Ollama request failed: status={status}, body={message}");
            return Err(RelayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| RelayError::Parse(e.to_string()))?;

        match value.get("response").and_then(serde_json::Value::as_str) {
            Some(answer) => Ok(answer.to_string()),
            None => Err(RelayError::Shape(
                "missing string `response` field in completion body".to_string(),
            )),
        }
    }

    fn endpoint(&self) -> &str {
        &self.generate_url
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Pull the message out of an Ollama `{"error": "..."}` body.
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|e| e.error)
}
