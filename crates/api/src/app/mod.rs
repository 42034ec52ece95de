//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the injected basket store and the operations on it
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response bodies
//! - `errors.rs`: consistent error responses

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use vpaygo_infra::read_model::{InMemoryProductStore, ProductStore};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router with a fresh in-memory basket (entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new());
    build_app_with_store(store, &config.static_dir)
}

/// Build the router around an existing store.
///
/// API routes take priority; every other path is served from `static_dir`.
pub fn build_app_with_store(store: Arc<dyn ProductStore>, static_dir: &Path) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(Extension(services)),
        )
}
