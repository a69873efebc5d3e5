//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, systemd, and load balancers to verify
//! the service is alive.

use axum::Json;
use serde::Serialize;

/// Health probe response body, serialized as `{"status":"UP"}`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

/// Health check handler.
///
/// Always reports `UP`: it only checks that the process can respond to HTTP,
/// not any deeper health. The orchestrator's probe caller interprets the 200.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "UP" })
}
