//! Handler for the health endpoint.

use axum::{Json, extract::State};
use tracing::warn;

use crate::api::dto::health::{
    CacheCheck, ComponentStatus, HealthChecks, HealthResponse, ServiceStatus,
};
use crate::infrastructure::cache::EntityCache;
use crate::state::AppState;

/// Reports service health.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// Always **200 OK**. Entity lookups fall through to the data source when
/// the cache is unreachable, so a cache failure only marks the service
/// `degraded`.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "backend": "redis", "message": "redis connected" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = check_cache(&state.entity_cache).await;

    let status = match cache.status {
        ComponentStatus::Ok => ServiceStatus::Healthy,
        ComponentStatus::Error => ServiceStatus::Degraded,
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { cache },
    })
}

async fn check_cache(cache: &EntityCache) -> CacheCheck {
    let backend = cache.backend_name();
    if cache.health_check().await {
        CacheCheck {
            status: ComponentStatus::Ok,
            backend,
            message: format!("{backend} connected"),
        }
    } else {
        warn!("Cache backend {} failed its health check", backend);
        CacheCheck {
            status: ComponentStatus::Error,
            backend,
            message: format!("{backend} unreachable"),
        }
    }
}
