//! HTTP server for ramyeond.

use crate::config::DaemonConfig;
use crate::gemini::GeminiClient;
use crate::orchestrator::Orchestrator;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
pub struct AppState {
    pub orchestrator: Orchestrator,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }
}

/// Run the HTTP server until ctrl-c.
pub async fn run(config: DaemonConfig) -> Result<()> {
    let backend = Arc::new(GeminiClient::new(
        &config.gemini.model,
        config.gemini.api_key.clone(),
        config.gemini.timeout_secs,
    )?);
    let state = Arc::new(AppState::new(Orchestrator::new(backend)));

    let app = Router::new()
        .merge(routes::parse_routes())
        .merge(routes::guide_routes())
        .merge(routes::meta_routes())
        .fallback(routes::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The original deployment fronted a browser UI.
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down gracefully");
}
