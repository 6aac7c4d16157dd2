//! Campaign dashboard API
//!
//! HTTP routes for the campaign dashboard, backed by mock JSON fixtures
//! and guarded by a bearer secret.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod state;

use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ApiConfig;
pub use state::AppState;

/// Start the API server
pub async fn serve(config: ApiConfig) -> Result<()> {
    let state = AppState::from_config(&config);

    if state.api_secret.is_none() {
        if state.dev_mode {
            tracing::warn!("No API secret set - dev mode, requests are not authenticated");
        } else {
            tracing::warn!("No API secret set - protected routes will return 500");
        }
    }
    tracing::info!(
        "Serving fixtures from {:?} (cache ttl {}s)",
        state.fixtures.dir(),
        state.fixtures.ttl().as_secs()
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting API server on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/contacts", get(api::contacts))
        .route("/lists", get(api::lists))
        .route("/campaigns", get(api::campaigns))
        .route("/files", get(api::files))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    let api_routes = Router::new()
        .route("/health", get(api::health_check))
        .merge(protected);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
