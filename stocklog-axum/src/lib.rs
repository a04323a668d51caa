#![warn(missing_docs)]
//! REST API for the stocklog inventory service.
//!
//! The router is generic over any [`InventoryRepository`] backend; the
//! handlers translate the wire contract (camelCase JSON bodies, one status
//! code per failure kind) into port calls and back.

mod routes;

pub mod config;
use config::AxumConfig;

use axum::{Json, Router, routing::get};
use serde::Serialize;
use stocklog_core::ports::InventoryRepository;
use tower_http::cors;

/// Response for the health check endpoint
#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct the full API router over the given backend.
pub fn router<T: InventoryRepository>(state: T) -> Router {
    // To allow for web app access, we use a permissive CORS policy. There is
    // no authorization for it to strip.
    let policy = cors::CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(routes::router())
        .layer(policy)
        .with_state(state)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: InventoryRepository>(
    config: AxumConfig,
    state: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .expect("Unable to bind to address");

    tracing::info!(
        "Listening for requests on {}",
        listener.local_addr().unwrap()
    );

    axum::serve(listener, router(state)).await
}
