//! Quotes Server
//!
//! HTTP service for listing, adding, picking, and deleting short quotes.
//! Quotes are held in memory only.

pub mod config;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod services;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, get},
    Router,
};
use quotes_core::ports::QuoteService;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::services::QuoteManager;
use crate::storage::MemoryStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteService>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(quotes: Arc<dyn QuoteService>, request_timeout: Duration) -> Self {
        Self {
            quotes,
            request_timeout,
        }
    }
}

/// Wire the quote service onto `store`
pub fn build_state(store: Arc<MemoryStore>, config: &ServerConfig) -> AppState {
    let quotes = Arc::new(QuoteManager::new(store));
    AppState::new(quotes, config.request_timeout())
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/quotes",
            get(handlers::quotes::list).post(handlers::quotes::create),
        )
        .route("/quotes/random", get(handlers::quotes::random))
        .route("/quotes/:id", delete(handlers::quotes::delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until SIGINT/SIGTERM
pub async fn run(config: ServerConfig) -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let app = app_router(build_state(store.clone(), &config));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address()))?;
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("HTTP server: successfully started, address={}", addr);

    server::serve(
        listener,
        app,
        server::shutdown_signal(),
        config.shutdown_grace(),
    )
    .await?;

    info!("Releasing quote store, {} quotes dropped", store.len());
    store.clear();

    Ok(())
}
