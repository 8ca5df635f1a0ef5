// HTTP routes configuration

use super::handlers::{
    ask_handler, docs_component_handler, docs_index_handler, health_handler, message_handler,
    metrics_handler, stats_handler,
};
use crate::config::AppConfig;
use crate::docs::DocumentationStore;
use crate::error::Result;
use crate::relay::Relay;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub relay: Arc<Relay>,
    pub docs: Arc<DocumentationStore>,
}

pub fn create_router(
    config: AppConfig,
    relay: Arc<Relay>,
    docs: Arc<DocumentationStore>,
) -> Result<Router> {
    let state = AppState {
        config,
        relay,
        docs,
    };

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/ask", post(ask_handler))
        .route("/message", post(message_handler))
        .route("/docs", get(docs_index_handler))
        .route("/docs/:component", get(docs_component_handler))
        .route("/stats", get(stats_handler))
        .route("/metrics", get(metrics_handler))
        // Questions and messages are small; documentation bodies only flow out
        .layer(tower_http::limit::RequestBodyLimitLayer::new(64 * 1024))
        // The plugin UI calls from a browser sandbox; the original Express
        // proxy existed largely to add these headers
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    Ok(app)
}
