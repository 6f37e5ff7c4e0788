//! Health check endpoint.
//! Used by: server.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn up() -> Self {
        Self { status: "UP" }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::up())
}
