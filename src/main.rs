// gatordocs - design-system documentation Q&A relay for a local Ollama server

use anyhow::Result;
use clap::Parser;
use gatordocs::cache::AnswerCache;
use gatordocs::cli::Args;
use gatordocs::config::AppConfig;
use gatordocs::docs::DocumentationStore;
use gatordocs::ollama::OllamaClient;
use gatordocs::relay::Relay;
use gatordocs::server::create_router;
use gatordocs::utils::logging;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gatordocs v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the Ollama client
    let client = OllamaClient::new(&config.ollama)?;

    // Phase 3.5: Handle --check flag (probe the completion service)
    if args.check {
        match client.installed_models().await {
            Ok(models) if models.iter().any(|m| m == &config.ollama.model) => {
                info!("Model {} is installed", config.ollama.model);
            }
            Ok(models) => warn!(
                "Model {} not found on the completion service (installed: {})",
                config.ollama.model,
                models.join(", ")
            ),
            Err(err) => warn!("Could not verify the completion service: {err}"),
        }
    }

    // Phase 4: Load the documentation dataset; a missing file degrades to an
    // empty store, questions still work
    let docs = match DocumentationStore::load(Path::new(&config.docs.path)) {
        Ok(store) => {
            info!(
                "Loaded documentation for {} components from {}",
                store.len(),
                config.docs.path
            );
            store
        }
        Err(err) => {
            warn!(
                "Could not load documentation dataset from {}: {err}",
                config.docs.path
            );
            DocumentationStore::empty()
        }
    };

    // Phase 5: Build the relay and start the HTTP server
    let relay = Relay::new(Arc::new(client), AnswerCache::new(&config.cache));
    let app = create_router(config.clone(), Arc::new(relay), Arc::new(docs))?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
