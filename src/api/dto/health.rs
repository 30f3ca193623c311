//! DTOs for the health endpoint.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    /// Serving, but without a working cache.
    Degraded,
}

/// State of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub cache: CacheCheck,
}

/// Result of probing the entity cache backend.
#[derive(Debug, Serialize)]
pub struct CacheCheck {
    pub status: ComponentStatus,
    pub backend: &'static str,
    pub message: String,
}
