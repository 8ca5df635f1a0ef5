//! Wire types for the Ollama HTTP API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/generate`. Streaming is always disabled; the
/// relay waits for the full answer in one body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// Response body for `GET /api/tags` (the installed model list).
#[derive(Debug, Default, Deserialize)]
pub struct ModelTags {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
pub struct ModelTag {
    pub name: String,
}
