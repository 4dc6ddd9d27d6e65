//! Exoplanet API Server
//!
//! A small catalogue of exoplanets with CRUD endpoints and trip fuel estimates.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryExoplanetRepository;
use app::ExoplanetService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub exoplanet_service: Arc<ExoplanetService<InMemoryExoplanetRepository>>,
    pub config: Config,
}

impl AppState {
    /// Fresh state backed by an empty in-memory catalogue
    pub fn new(config: Config) -> Self {
        let exoplanet_repo = Arc::new(InMemoryExoplanetRepository::new());

        Self {
            exoplanet_service: Arc::new(ExoplanetService::new(exoplanet_repo)),
            config,
        }
    }
}

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/exoplanets",
            get(handlers::list_exoplanets).post(handlers::create_exoplanet),
        )
        .route(
            "/exoplanets/:id",
            get(handlers::get_exoplanet)
                .put(handlers::update_exoplanet)
                .delete(handlers::delete_exoplanet),
        )
        .route("/exoplanets/:id/fuel", get(handlers::estimate_fuel))
        .layer(middleware)
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,exoplanet_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Exoplanet API...");

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let addr = config.bind_addr();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
