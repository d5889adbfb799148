//! HTTP API handlers

use axum::{extract::State, Json};
use serde::Serialize;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// General status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "service-portal",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_handler() {
        let Json(status) = status_handler(State(AppState::new())).await;
        assert_eq!(status.service, "service-portal");
        assert_eq!(status.uptime_secs, 0);

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
