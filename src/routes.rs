//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /sitemap.xml`           - Sitemap (public)
//! - `GET  /health`                - Health check (public)
//! - `GET  /dogs/{slug}`           - Listing page head (public)
//! - `GET  /organizations/{slug}`  - Organization page head (public)
//! - `/api/*`                      - JSON metadata and validation (public)
//! - `/api/cache*`                 - Cache control (Bearer token)
//!
//! # Middleware
//!
//! - **Authentication** - `ADMIN_TOKEN` bearer check on cache control
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, sitemap_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with state and tracing applied.
pub fn build_router(state: AppState) -> Router {
    let cache_control = api::routes::cache_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_router = api::routes::api_routes().merge(cache_control);

    Router::new()
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/health", get(health_handler))
        .merge(web::routes::public_routes())
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
