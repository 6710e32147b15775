//! Health API
//!
//! Liveness plus a little runtime detail for dashboards.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::GatewayState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub uptime_seconds: u64,
    pub in_flight: usize,
    pub max_concurrent_requests: usize,
}

/// Handler for `GET /api/health`
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        service: "inkwiz",
        version: env!("CARGO_PKG_VERSION"),
        provider: state.service.provider_name().to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        in_flight: state.admission.in_flight(),
        max_concurrent_requests: state.admission.limit(),
    })
}
