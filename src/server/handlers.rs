// HTTP request handlers

use super::messages::{InboundMessage, OutboundMessage};
use super::routes::AppState;
use crate::cache::CacheStats;
use crate::docs::ComponentDoc;
use crate::error::{RelayError, Result};
use crate::metrics;
use crate::relay::Answer;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check completion service configuration
    let completion_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "endpoint: {}, model: {}",
            state.config.ollama.base_url, state.config.ollama.model
        ),
    };
    checks.insert("completion_service".to_string(), completion_check);

    // Check documentation dataset
    let docs_check = if state.docs.is_empty() {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: "No documentation loaded".to_string(),
        }
    } else {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("{} components loaded", state.docs.len()),
        }
    };
    checks.insert("documentation".to_string(), docs_check);

    // Check answer cache
    let stats = state.relay.cache_stats();
    let cache_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "{} entries, {} hits, {} misses",
            state.relay.cache_len(),
            stats.hits,
            stats.misses
        ),
    };
    checks.insert("cache".to_string(), cache_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Request body for `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub component: String,
    pub question: String,
}

/// Handler for `POST /ask`.
///
/// Past payload validation this always answers 200 with an `Answer`;
/// completion failures ride inside with `isError: true`.
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<Answer>> {
    let started = Instant::now();
    let result = answer_question(&state, &req.component, &req.question).await;

    let status = match &result {
        Ok(_) => 200,
        Err(err) => err.status().as_u16(),
    };
    metrics::record_request("POST", "/ask", status, started.elapsed().as_secs_f64());

    result.map(Json)
}

async fn answer_question(state: &AppState, component: &str, question: &str) -> Result<Answer> {
    if component.trim().is_empty() {
        return Err(RelayError::InvalidRequest(
            "component must not be empty".to_string(),
        ));
    }
    if question.trim().is_empty() {
        return Err(RelayError::InvalidRequest(
            "question must not be empty".to_string(),
        ));
    }

    Ok(state.relay.ask(component, question).await)
}

/// Handler for `POST /message` (the typed plugin message contract).
pub async fn message_handler(
    State(state): State<AppState>,
    Json(msg): Json<InboundMessage>,
) -> Result<Json<OutboundMessage>> {
    let started = Instant::now();
    let result = dispatch_message(&state, msg).await;

    let status = match &result {
        Ok(_) => 200,
        Err(err) => err.status().as_u16(),
    };
    metrics::record_request("POST", "/message", status, started.elapsed().as_secs_f64());

    result.map(Json)
}

async fn dispatch_message(state: &AppState, msg: InboundMessage) -> Result<OutboundMessage> {
    match msg {
        InboundMessage::AskAi {
            component,
            question,
        } => {
            let answer = answer_question(state, &component, &question).await?;
            Ok(OutboundMessage::AiResponse { answer })
        }
        InboundMessage::GetInitialData => Ok(OutboundMessage::LoadDocumentation {
            data: state.docs.all().clone(),
        }),
        InboundMessage::OpenStorybook { component } => {
            match state
                .docs
                .get(&component)
                .and_then(|doc| doc.storybook_url.clone())
            {
                Some(url) => Ok(OutboundMessage::StorybookUrl { component, url }),
                None => Ok(OutboundMessage::Error {
                    message: format!("Storybook link not found for {component}."),
                }),
            }
        }
    }
}

/// Handler for `GET /docs` - the full documentation dataset.
pub async fn docs_index_handler(
    State(state): State<AppState>,
) -> Json<HashMap<String, ComponentDoc>> {
    Json(state.docs.all().clone())
}

/// Handler for `GET /docs/:component`.
pub async fn docs_component_handler(
    State(state): State<AppState>,
    Path(component): Path<String>,
) -> Result<Json<ComponentDoc>> {
    state
        .docs
        .get(&component)
        .cloned()
        .map(Json)
        .ok_or_else(|| RelayError::NotFound(format!("no documentation for component: {component}")))
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub cache: CacheStats,
    pub entries: usize,
}

/// Handler for `GET /stats` - answer cache counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        cache: state.relay.cache_stats(),
        entries: state.relay.cache_len(),
    })
}

/// Handler for `GET /metrics` - Prometheus text format.
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}
