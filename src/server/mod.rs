use crate::{
    config::Config,
    error::{ApiError, ExtractError},
    media::{MediaResolver, ResolvedMedia},
};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<MediaResolver>,
}

impl AppState {
    pub fn new(resolver: MediaResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExtractQuery {
    url: Option<String>,
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// GET /extract?url=<page url>
///
/// Resolves the page URL into a direct media URL. Every failure, whatever
/// the kind, renders as 400 with a detail message.
async fn extract(
    State(state): State<AppState>,
    Query(query): Query<ExtractQuery>,
) -> Result<Json<ResolvedMedia>, ApiError> {
    let source_url = query
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::InvalidUrl("Missing url query parameter".to_string()))?;

    url::Url::parse(source_url)
        .map_err(|e| ApiError::InvalidUrl(format!("Invalid url: {}", e)))?;

    match state.resolver.resolve(source_url).await {
        Ok(resolved) => Ok(Json(resolved)),
        Err(e) => {
            match &e {
                ExtractError::Internal(msg) => {
                    error!("Internal failure resolving {}: {}", source_url, msg)
                }
                _ => warn!("Resolution failed for {}: {}", source_url, e),
            }
            Err(ApiError::Extract(e))
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/extract", get(extract))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: &Config, state: AppState) -> Result<()> {
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            // keep serving; shutdown will only happen by killing the process
            std::future::pending::<()>().await;
        }
    }
}
