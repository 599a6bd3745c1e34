//! HTTP surface: probe and rate recommendation endpoints

pub mod error;
pub mod routes;

use crate::core::config::AppConfig;
use crate::providers::ExchangeRatesApiProvider;
use crate::service::RateService;
use anyhow::{Context, Result};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct AppState {
    pub service: RateService,
}

pub fn build_state(config: &AppConfig) -> Result<Arc<AppState>> {
    let provider = ExchangeRatesApiProvider::new(&config.provider)
        .context("Failed to build rate provider client")?;
    let service = RateService::new(Arc::new(provider), config.window_days);
    Ok(Arc::new(AppState { service }))
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/probe", get(routes::handle_probe))
        .route("/api/rate", get(routes::handle_rate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: &AppConfig, listen_addr: Option<SocketAddr>) -> Result<()> {
    let state = build_state(config)?;
    let addr = listen_addr.unwrap_or(config.server.listen_addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to bind HTTP server to {addr}"))?;
    info!("Starting HTTP server on {}", addr);

    axum::serve(listener, app_router(state))
        .await
        .context("HTTP server terminated unexpectedly")
}
